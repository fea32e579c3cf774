pub mod client;
pub mod error;
pub mod mock;
pub mod session;
pub mod types;
pub mod validation;

pub use client::AdflowClient;
pub use error::{Error, Result};
pub use session::{Session, SessionStore};
pub use types::{
    Campaign, Credentials, DashboardSnapshot, LoginResponse, NewCampaign, SessionUser,
    TransferRequest, UserProfile, Wallet,
};
