pub mod auth;
pub mod campaigns;
pub mod dashboard;
pub mod wallet;

use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde::de::DeserializeOwned;

use crate::{
    error::{Error, Result},
    mock,
};

/// Backend address baked into development builds.
pub const DEFAULT_API_URL: &str = "http://localhost:3000";

/// HTTP client for the Adflow wallet/advertising backend.
///
/// The client holds no session state. Every authenticated call takes the
/// bearer token explicitly:
///
/// ```no_run
/// # async fn run() -> adflow_wallet::Result<()> {
/// use adflow_wallet::client::AdflowClient;
///
/// let client = AdflowClient::new("http://localhost:3000");
/// let wallet = client.get_wallet("jane.doe@example.com", "<token>").await?;
/// println!("{}", wallet.public_key);
/// # Ok(())
/// # }
/// ```
pub struct AdflowClient {
    api_base: String,
    pub(crate) http: reqwest::Client,
}

impl AdflowClient {
    pub fn new(base_url: &str) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    /// Use a preconfigured `reqwest::Client` (proxies, custom TLS roots).
    pub fn with_http(base_url: &str, http: reqwest::Client) -> Self {
        Self {
            api_base: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    pub fn api_base(&self) -> &str {
        &self.api_base
    }

    /// Build a full URL for a path relative to the API base, e.g. `"wallet/login"`.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}/{}", self.api_base, path.trim_start_matches('/'))
    }

    /// JSON content type plus `Authorization: Bearer <token>` when a token is given.
    pub(crate) fn auth_headers(token: Option<&str>) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(token) = token {
            headers.insert(AUTHORIZATION, bearer_value(token)?);
        }
        Ok(headers)
    }

    /// Authorization only. Multipart requests set their own content type.
    pub(crate) fn bearer(token: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, bearer_value(token)?);
        Ok(headers)
    }

    pub(crate) async fn send(
        &self,
        req: reqwest::RequestBuilder,
        url: &str,
    ) -> Result<reqwest::Response> {
        tracing::debug!(%url, "sending request");
        req.send().await.map_err(|e| Error::transport(url, e))
    }

    /// Decode a 2xx body as `T`; otherwise fail with the body's `error` field,
    /// or `default_message` when the body carries none.
    pub(crate) async fn read_json<T: DeserializeOwned>(
        resp: reqwest::Response,
        default_message: &str,
    ) -> Result<T> {
        let status = resp.status();
        let url = resp.url().to_string();
        let body = resp.bytes().await.map_err(|e| Error::transport(&url, e))?;
        if status.is_success() {
            return Ok(serde_json::from_slice(&body)?);
        }
        let message = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.as_str())
                    .filter(|s| !s.is_empty())
                    .map(ToString::to_string)
            })
            .unwrap_or_else(|| default_message.to_string());
        tracing::debug!(status = status.as_u16(), %url, %message, "request rejected");
        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }

    /// Replace a connectivity-shaped failure with mock data.
    pub(crate) fn or_mock<T>(result: Result<T>, what: &str, mock: impl FnOnce() -> T) -> Result<T> {
        match result {
            Err(err) if mock::is_connectivity_failure(&err) => {
                tracing::warn!(error = %err, "backend not available, using mock {what} data");
                Ok(mock())
            }
            other => other,
        }
    }
}

fn bearer_value(token: &str) -> Result<HeaderValue> {
    HeaderValue::from_str(&format!("Bearer {token}"))
        .map_err(|_| Error::Validation("token contains characters not allowed in a header".into()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_without_double_slashes() {
        let client = AdflowClient::new("http://localhost:3000/");
        assert_eq!(client.url("/wallet/login"), "http://localhost:3000/wallet/login");
        assert_eq!(client.url("transfer"), "http://localhost:3000/transfer");
    }

    #[test]
    fn auth_headers_without_token_only_set_content_type() {
        let headers = AdflowClient::auth_headers(None).unwrap();
        assert_eq!(headers.get(CONTENT_TYPE).unwrap(), "application/json");
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn auth_headers_with_token_add_bearer() {
        let headers = AdflowClient::auth_headers(Some("abc")).unwrap();
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
    }

    #[test]
    fn bearer_omits_content_type() {
        let headers = AdflowClient::bearer("abc").unwrap();
        assert!(headers.get(CONTENT_TYPE).is_none());
        assert_eq!(headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
    }

    #[test]
    fn token_with_newline_is_rejected() {
        assert!(matches!(
            AdflowClient::bearer("bad\ntoken"),
            Err(Error::Validation(_))
        ));
    }

    #[test]
    fn or_mock_passes_api_errors_through() {
        let res: Result<u8> = Err(Error::Api {
            status: 404,
            message: "Failed to fetch wallet".into(),
        });
        let err = AdflowClient::or_mock(res, "wallet", || 7).unwrap_err();
        assert_eq!(err.status(), Some(404));
    }

    #[test]
    fn or_mock_substitutes_on_network_error_message() {
        let res: Result<u8> = Err(Error::Other(anyhow::anyhow!("NetworkError: offline")));
        assert_eq!(AdflowClient::or_mock(res, "wallet", || 7).unwrap(), 7);
    }
}
