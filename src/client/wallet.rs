use crate::{
    client::AdflowClient,
    error::Result,
    mock,
    types::{TransferRequest, Wallet},
    validation,
};

impl AdflowClient {
    /// `GET /wallet/{email}`
    ///
    /// Falls back to [`mock::mock_wallet`] when the backend is unreachable.
    pub async fn get_wallet(&self, email: &str, token: &str) -> Result<Wallet> {
        Self::or_mock(self.fetch_wallet(email, token).await, "wallet", mock::mock_wallet)
    }

    async fn fetch_wallet(&self, email: &str, token: &str) -> Result<Wallet> {
        let url = self.url(&format!("wallet/{email}"));
        let req = self.http.get(&url).headers(Self::auth_headers(Some(token))?);
        let resp = self.send(req, &url).await?;
        Self::read_json(resp, "Failed to fetch wallet").await
    }

    /// `POST /transfer`
    ///
    /// The request is validated first; an invalid amount never leaves the client.
    /// Returns the backend's JSON reply (transaction hash etc.) untouched.
    pub async fn transfer(&self, req: &TransferRequest, token: &str) -> Result<serde_json::Value> {
        validation::validate_transfer(req)?;
        let url = self.url("transfer");
        let builder = self
            .http
            .post(&url)
            .headers(Self::auth_headers(Some(token))?)
            .json(req);
        let resp = self.send(builder, &url).await?;
        Self::read_json(resp, "Transfer failed").await
    }
}
