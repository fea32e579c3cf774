//! `adflow`: command-line front end for the Adflow advertising wallet.
//!
//!   login / register / logout / whoami   session management
//!   wallet, dashboard, profile           read views (mock data when offline)
//!   campaigns, create-campaign           campaign management
//!   transfer                             move XLM credits to another wallet

mod media;

use std::path::PathBuf;

use adflow_wallet::{
    client::{AdflowClient, DEFAULT_API_URL},
    session::{default_session_path, Session, SessionStore},
    types::{Campaign, Credentials, NewCampaign, RegisterRequest, TransferRequest},
    validation,
};
use anyhow::Context;
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "adflow",
    version,
    about = "Adflow advertiser wallet: campaigns and XLM credits",
    long_about = "\
adflow talks to the Adflow backend (default http://localhost:3000).\n\
Wallet, dashboard and profile views fall back to built-in sample data when\n\
the backend cannot be reached, so the CLI is usable offline during development.\n\
\n\
Examples:\n\
  adflow register --email jane.doe@example.com --password hunter2 --name 'Jane Doe'\n\
  adflow login --email jane.doe@example.com --password hunter2\n\
  adflow dashboard\n\
  adflow create-campaign --title Launch --target-url https://x.io --budget 100 --cost-per-click 0.5 --media banner.png\n\
  adflow transfer --to GDEST... --amount 12.5"
)]
struct Cli {
    /// Backend base URL
    #[arg(long, global = true, env = "ADFLOW_API_URL", default_value = DEFAULT_API_URL)]
    api: String,

    /// Session file (defaults to ~/.adflow/session.json)
    #[arg(long, global = true, env = "ADFLOW_SESSION")]
    session: Option<PathBuf>,

    /// Print raw JSON instead of a summary
    #[arg(long, global = true, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Log in and store the session token
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Create an account (a Stellar keypair is generated server-side)
    Register {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        name: String,
    },
    /// Forget the stored session
    Logout,
    /// Show the logged-in user
    Whoami,
    /// Wallet public key and balances
    Wallet,
    /// Campaign performance summary
    Dashboard,
    /// List your campaigns
    Campaigns,
    /// Create a campaign (uploads the first media file as the campaign image)
    CreateCampaign {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        target_url: String,
        /// Total budget in XLM
        #[arg(long)]
        budget: String,
        /// Cost per click in XLM
        #[arg(long)]
        cost_per_click: String,
        /// Comma-separated tags
        #[arg(long, default_value = "")]
        tags: String,
        /// Image or video file; repeat up to 3 times
        #[arg(long = "media", required = true)]
        media: Vec<PathBuf>,
    },
    /// Send XLM credits to another public key
    Transfer {
        #[arg(long)]
        to: String,
        #[arg(long)]
        amount: String,
    },
    /// Profile and account stats
    Profile,
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_campaigns(campaigns: &[Campaign]) {
    if campaigns.is_empty() {
        println!("No campaigns yet.");
        return;
    }
    for c in campaigns {
        let status = if c.active { "active" } else { "paused" };
        println!(
            "  [{}] {} ({status}) budget {} XLM, spent {} XLM, {} impressions, {} clicks",
            c.id,
            c.title,
            c.budget_xlm,
            c.spent_xlm.unwrap_or(0.0),
            c.total_impressions.unwrap_or(0),
            c.total_clicks.unwrap_or(0),
        );
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let client = AdflowClient::new(&cli.api);
    let store = SessionStore::new(cli.session.clone().unwrap_or_else(default_session_path));

    match cli.command {
        Cmd::Login { email, password } => {
            let resp = client
                .login(&Credentials { email, password })
                .await
                .context("login failed")?;
            let session = Session::from_login(&resp)
                .context("backend accepted the credentials but issued no token")?;
            store.save(&session)?;
            println!("Logged in as {} ({})", session.user.name, session.user.email);
            println!("Public key: {}", session.user.public_key);
        }

        Cmd::Register {
            email,
            password,
            name,
        } => {
            let resp = client
                .register(&RegisterRequest {
                    email,
                    password,
                    name,
                })
                .await
                .context("registration failed")?;
            if cli.json {
                return print_json(&resp);
            }
            println!("{}", resp.message.as_deref().unwrap_or("Registered."));
            if let Some(pk) = resp.public_key {
                println!("Public key: {pk}");
            }
        }

        Cmd::Logout => {
            if store.clear()? {
                println!("Logged out.");
            } else {
                println!("No session stored.");
            }
        }

        Cmd::Whoami => {
            let session = store.require()?;
            if cli.json {
                return print_json(&session.user);
            }
            println!("User:       {} ({})", session.user.name, session.user.email);
            println!("Id:         {}", session.user.id);
            println!("Public key: {}", session.user.public_key);
        }

        Cmd::Wallet => {
            let session = store.require()?;
            let wallet = client
                .get_wallet(&session.user.email, &session.token)
                .await
                .context("failed to load wallet")?;
            if cli.json {
                return print_json(&wallet);
            }
            println!("Public key: {}", wallet.public_key);
            for b in &wallet.account.balances {
                let asset = if b.asset_type == "native" {
                    "XLM"
                } else {
                    b.asset_type.as_str()
                };
                println!("  {asset:<10} {}", b.balance);
            }
        }

        Cmd::Dashboard => {
            let session = store.require()?;
            let dash = client
                .get_dashboard(&session.user.id, &session.token)
                .await
                .context("failed to load dashboard")?;
            if cli.json {
                return print_json(&dash);
            }
            let s = &dash.summary;
            println!("Campaigns:   {}", s.total_campaigns);
            println!("Sites:       {}", s.total_sites);
            println!("Impressions: {}", s.total_impressions);
            println!("Clicks:      {}", s.total_clicks);
            println!("Spent:       {} XLM", s.total_spent);
            print_campaigns(&dash.campaigns);
        }

        Cmd::Campaigns => {
            let session = store.require()?;
            let campaigns = client
                .get_campaigns(&session.user.id, &session.token)
                .await
                .context("failed to load campaigns")?;
            if cli.json {
                return print_json(&campaigns);
            }
            print_campaigns(&campaigns);
        }

        Cmd::CreateCampaign {
            title,
            description,
            target_url,
            budget,
            cost_per_click,
            tags,
            media,
        } => {
            let session = store.require()?;
            let form = NewCampaign {
                title,
                description,
                target_url,
                budget_xlm: budget,
                cost_per_click,
                tags,
                media: media::load_campaign_media(&media)?,
            };
            let created = client
                .create_campaign(&form, &session.token)
                .await
                .context("failed to create campaign")?;
            if cli.json {
                return print_json(&created);
            }
            println!("Campaign created.");
        }

        Cmd::Transfer { to, amount } => {
            let session = store.require()?;
            let req = TransferRequest {
                from_email: session.user.email.clone(),
                to_public_key: to,
                amount: validation::parse_amount(&amount)?,
            };
            let receipt = client
                .transfer(&req, &session.token)
                .await
                .context("transfer failed")?;
            if cli.json {
                return print_json(&receipt);
            }
            println!("Sent {} XLM to {}", req.amount, req.to_public_key);
            if let Some(hash) = receipt.get("hash").and_then(|h| h.as_str()) {
                println!("Transaction: {hash}");
            }
        }

        Cmd::Profile => {
            let session = store.require()?;
            let profile = client
                .get_user_profile(&session.user.id, &session.token)
                .await
                .context("failed to load profile")?;
            if cli.json {
                return print_json(&profile);
            }
            let u = &profile.user;
            println!("Name:       {}", u.name.as_deref().unwrap_or(&session.user.name));
            println!("Email:      {}", u.email);
            println!("Public key: {}", u.public_key);
            if let Some(bio) = &u.bio {
                println!("Bio:        {bio}");
            }
            if let Some(stats) = &profile.stats {
                println!("Member since:      {}", stats.member_since);
                println!("Campaigns created: {}", stats.total_campaigns);
                println!("Total spent:       {} XLM", stats.total_spent);
                println!("Success rate:      {}%", stats.success_rate);
            } else {
                println!("Campaigns:  {}", profile.campaigns.len());
            }
        }
    }

    Ok(())
}
