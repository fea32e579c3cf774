use crate::{
    client::AdflowClient,
    error::Result,
    types::{Credentials, LoginResponse, RegisterRequest, RegisterResponse, SessionUser},
};

/// Public key used when the wallet lookup after login fails.
pub const PLACEHOLDER_PUBLIC_KEY: &str = "TEMP_PUBLIC_KEY";

fn local_part(email: &str) -> &str {
    email.split('@').next().unwrap_or(email)
}

impl AdflowClient {
    /// `POST /wallet/login`
    ///
    /// Some backend versions answer with a bare token. In that case the user
    /// record is rebuilt from `GET /wallet/{email}`; if that lookup fails too,
    /// a placeholder user is returned instead of failing the login.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let url = self.url("wallet/login");
        let req = self
            .http
            .post(&url)
            .headers(Self::auth_headers(None)?)
            .json(credentials);
        let resp = self.send(req, &url).await?;
        let mut data: LoginResponse = Self::read_json(resp, "Login failed").await?;

        if data.user.is_none() {
            if let Some(token) = data.token.clone().filter(|t| !t.is_empty()) {
                data.user = Some(self.enrich_login_user(&credentials.email, &token).await);
            }
        }
        Ok(data)
    }

    async fn enrich_login_user(&self, email: &str, token: &str) -> SessionUser {
        let name = local_part(email).to_string();
        match self.get_wallet(email, token).await {
            Ok(wallet) => SessionUser {
                id: wallet
                    .user
                    .map(|u| u.id)
                    .filter(|id| !id.is_empty())
                    .unwrap_or_else(|| "1".to_string()),
                email: email.to_string(),
                name,
                public_key: wallet.public_key,
            },
            Err(err) => {
                tracing::warn!(error = %err, "wallet lookup after login failed, using placeholder user");
                SessionUser {
                    id: "1".to_string(),
                    email: email.to_string(),
                    name,
                    public_key: PLACEHOLDER_PUBLIC_KEY.to_string(),
                }
            }
        }
    }

    /// `POST /wallet/`
    /// Creates the account and its Stellar keypair server-side.
    pub async fn register(&self, req: &RegisterRequest) -> Result<RegisterResponse> {
        let url = self.url("wallet/");
        let builder = self
            .http
            .post(&url)
            .headers(Self::auth_headers(None)?)
            .json(req);
        let resp = self.send(builder, &url).await?;
        Self::read_json(resp, "Registration failed").await
    }
}
