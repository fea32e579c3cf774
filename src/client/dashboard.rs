use crate::{
    client::AdflowClient,
    error::Result,
    mock,
    types::{DashboardSnapshot, UserProfile},
};

impl AdflowClient {
    /// `GET /dashboard/{userId}`
    pub async fn get_dashboard(&self, user_id: &str, token: &str) -> Result<DashboardSnapshot> {
        let result = self
            .get_dashboard_as(user_id, token, "Failed to fetch dashboard data")
            .await;
        Self::or_mock(result, "dashboard", mock::mock_dashboard)
    }

    /// Profile data. The backend has no dedicated profile route yet, so this
    /// reads `GET /dashboard/{userId}` as well.
    pub async fn get_user_profile(&self, user_id: &str, token: &str) -> Result<UserProfile> {
        let result = self
            .get_dashboard_as(user_id, token, "Failed to fetch user profile")
            .await;
        Self::or_mock(result, "profile", mock::mock_profile)
    }

    async fn get_dashboard_as<T: serde::de::DeserializeOwned>(
        &self,
        user_id: &str,
        token: &str,
        default_message: &str,
    ) -> Result<T> {
        let url = self.url(&format!("dashboard/{user_id}"));
        let req = self.http.get(&url).headers(Self::auth_headers(Some(token))?);
        let resp = self.send(req, &url).await?;
        Self::read_json(resp, default_message).await
    }
}
