use serde::{Deserialize, Deserializer, Serialize};

// ── Lenient wire helpers ──────────────────────────────────────────────────────

/// Backend ids are sometimes numeric, sometimes strings. Normalize to `String`.
fn de_id<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {other}"
        ))),
    }
}

/// XLM amounts come back either as JSON numbers or as decimal strings.
fn de_amount<'de, D>(deserializer: D) -> std::result::Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n
            .as_f64()
            .ok_or_else(|| serde::de::Error::custom("amount out of range")),
        serde_json::Value::String(s) => s
            .trim()
            .parse::<f64>()
            .map_err(|_| serde::de::Error::custom(format!("invalid amount: {s}"))),
        serde_json::Value::Null => Ok(0.0),
        other => Err(serde::de::Error::custom(format!(
            "expected numeric amount, got {other}"
        ))),
    }
}

fn de_opt_amount<'de, D>(deserializer: D) -> std::result::Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(v) => de_amount(v).map(Some).map_err(serde::de::Error::custom),
    }
}

// ── Auth ──────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionUser {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "publicKey", default)]
    pub public_key: String,
}

/// `POST /wallet/login` reply. `user` is filled in by the client when the
/// backend only returns a token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<SessionUser>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(rename = "publicKey", default)]
    pub public_key: Option<String>,
}

// ── Wallet ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Balance {
    pub asset_type: String,
    pub balance: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default)]
    pub balances: Vec<Balance>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WalletOwner {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Wallet {
    #[serde(rename = "publicKey")]
    pub public_key: String,
    #[serde(default)]
    pub account: Account,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<WalletOwner>,
}

impl Wallet {
    /// Balance of the chain's native asset (XLM), as reported by the backend.
    pub fn native_balance(&self) -> Option<&str> {
        self.account
            .balances
            .iter()
            .find(|b| b.asset_type == "native")
            .map(|b| b.balance.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferRequest {
    #[serde(rename = "fromEmail")]
    pub from_email: String,
    #[serde(rename = "toPublicKey")]
    pub to_public_key: String,
    pub amount: f64,
}

// ── Campaigns ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(deserialize_with = "de_amount")]
    pub budget_xlm: f64,
    #[serde(
        default,
        deserialize_with = "de_opt_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub spent_xlm: Option<f64>,
    #[serde(default)]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_impressions: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_clicks: Option<u64>,
    #[serde(
        default,
        deserialize_with = "de_opt_amount",
        skip_serializing_if = "Option::is_none"
    )]
    pub total_revenue: Option<f64>,
    #[serde(default)]
    pub created_at: String,
}

/// Multipart `campaignImage` / media attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone)]
pub struct CampaignMedia {
    pub filename: String,
    pub content_type: String,
    pub kind: MediaKind,
    pub bytes: Vec<u8>,
}

/// Create-campaign form as typed by the user. Numeric fields stay raw strings:
/// they are validated locally and forwarded verbatim.
#[derive(Debug, Clone, Default)]
pub struct NewCampaign {
    pub title: String,
    pub description: String,
    pub target_url: String,
    pub budget_xlm: String,
    pub cost_per_click: String,
    pub tags: String,
    pub media: Vec<CampaignMedia>,
}

// ── Dashboard ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardUser {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "publicKey", default)]
    pub public_key: String,
    #[serde(rename = "userType", default, skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_campaigns: u64,
    #[serde(default)]
    pub total_sites: u64,
    #[serde(default)]
    pub total_clicks: u64,
    #[serde(default)]
    pub total_impressions: u64,
    #[serde(default, deserialize_with = "de_amount")]
    pub total_spent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    pub user: DashboardUser,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default)]
    pub sites: Vec<serde_json::Value>,
    #[serde(default)]
    pub summary: DashboardSummary,
}

// ── Profile ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileUser {
    #[serde(deserialize_with = "de_id")]
    pub id: String,
    #[serde(default)]
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "publicKey", default)]
    pub public_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileStats {
    pub total_campaigns: u64,
    #[serde(deserialize_with = "de_amount")]
    pub total_spent: f64,
    pub success_rate: f64,
    pub member_since: String,
}

/// Profile data. The backend serves this from the dashboard endpoint, so
/// `stats` is only present when the server (or the mock) supplies it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user: ProfileUser,
    #[serde(default)]
    pub campaigns: Vec<Campaign>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stats: Option<ProfileStats>,
}
