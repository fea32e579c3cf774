//! Canned payloads served in place of read-only endpoints when the backend
//! cannot be reached during local development.

use crate::{
    error::Error,
    types::{
        Account, Balance, Campaign, DashboardSnapshot, DashboardSummary, DashboardUser,
        ProfileStats, ProfileUser, SessionUser, UserProfile, Wallet,
    },
};

pub const MOCK_PUBLIC_KEY: &str = "GCKFBEIYTKP5RDRFDZJUFN3K4D3SQU3KZJPSFWKH7XBGZQ9J3QGDNVTJ";

/// Substrings that mark a fetch-level network failure.
const CONNECTIVITY_MARKERS: [&str; 3] = ["fetch", "NetworkError", "Failed to fetch"];

/// Heuristic: does this error message look like the backend was unreachable?
pub fn looks_like_connectivity_failure(message: &str) -> bool {
    CONNECTIVITY_MARKERS.iter().any(|m| message.contains(m))
}

/// Whether a failed read may be replaced by mock data.
///
/// Application errors (the server answered with a non-2xx status) are never
/// eligible, even when their message happens to contain "fetch".
pub fn is_connectivity_failure(err: &Error) -> bool {
    match err {
        Error::Api { .. }
        | Error::Validation(_)
        | Error::NotAuthenticated
        | Error::CorruptSession { .. } => false,
        other => looks_like_connectivity_failure(&other.to_string()),
    }
}

/// `jane.doe@example.com` → `Jane Doe`.
pub fn display_name_from_email(email: &str) -> String {
    let local = email.split('@').next().unwrap_or_default();
    local
        .split(['.', '_'])
        .map(|token| {
            let mut chars = token.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn mock_user(email: &str) -> SessionUser {
    SessionUser {
        id: "1".to_string(),
        email: email.to_string(),
        name: display_name_from_email(email),
        public_key: MOCK_PUBLIC_KEY.to_string(),
    }
}

pub fn mock_wallet() -> Wallet {
    Wallet {
        public_key: MOCK_PUBLIC_KEY.to_string(),
        account: Account {
            balances: vec![Balance {
                asset_type: "native".to_string(),
                balance: "1000.0000000".to_string(),
            }],
        },
        user: None,
    }
}

fn sample_campaign() -> Campaign {
    Campaign {
        id: "1".to_string(),
        title: "Sample Campaign".to_string(),
        description: "This is a sample campaign for demonstration".to_string(),
        budget_xlm: 100.0,
        spent_xlm: Some(25.0),
        active: true,
        total_impressions: Some(1500),
        total_clicks: Some(75),
        total_revenue: Some(0.05),
        created_at: chrono::Utc::now().to_rfc3339(),
    }
}

pub fn mock_dashboard() -> DashboardSnapshot {
    DashboardSnapshot {
        user: DashboardUser {
            id: "1".to_string(),
            email: "user@example.com".to_string(),
            name: None,
            public_key: MOCK_PUBLIC_KEY.to_string(),
            user_type: Some("advertiser".to_string()),
        },
        campaigns: vec![sample_campaign()],
        sites: vec![],
        summary: DashboardSummary {
            total_campaigns: 1,
            total_sites: 0,
            total_clicks: 75,
            total_impressions: 1500,
            total_spent: 25.0,
        },
    }
}

/// Static profile matching what the profile page shows when no backend data
/// is available.
pub fn mock_profile() -> UserProfile {
    UserProfile {
        user: ProfileUser {
            id: "1".to_string(),
            email: "john.doe@example.com".to_string(),
            name: Some("John Doe".to_string()),
            public_key: MOCK_PUBLIC_KEY.to_string(),
            bio: Some("Web3 marketing specialist focused on DeFi and NFT projects.".to_string()),
            website: None,
            twitter: None,
        },
        campaigns: vec![sample_campaign()],
        stats: Some(ProfileStats {
            total_campaigns: 12,
            total_spent: 2340.0,
            success_rate: 87.0,
            member_since: "Jan 2024".to_string(),
        }),
    }
}
