use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::{
    client::AdflowClient,
    error::{Error, Result},
    types::{Campaign, NewCampaign},
    validation,
};

/// `/advertisements/{userId}` answers either with a bare array or wrapped.
#[derive(Deserialize)]
#[serde(untagged)]
enum CampaignList {
    Bare(Vec<Campaign>),
    Advertisements { advertisements: Vec<Campaign> },
    Campaigns { campaigns: Vec<Campaign> },
}

impl CampaignList {
    fn into_vec(self) -> Vec<Campaign> {
        match self {
            CampaignList::Bare(v)
            | CampaignList::Advertisements { advertisements: v }
            | CampaignList::Campaigns { campaigns: v } => v,
        }
    }
}

/// Multipart body for `POST /advertisements`. Only the first media file is
/// uploaded, as `campaignImage`.
pub fn campaign_form(form: &NewCampaign) -> Result<Form> {
    let mut body = Form::new()
        .text("title", form.title.clone())
        .text("description", form.description.clone())
        .text("targetUrl", form.target_url.clone())
        .text("budgetXlm", form.budget_xlm.clone())
        .text("costPerClick", form.cost_per_click.clone())
        .text("tags", form.tags.clone());
    if let Some(media) = form.media.first() {
        let part = Part::bytes(media.bytes.clone())
            .file_name(media.filename.clone())
            .mime_str(&media.content_type)
            .map_err(|_| {
                Error::Validation(format!("invalid content type: {}", media.content_type))
            })?;
        body = body.part("campaignImage", part);
    }
    Ok(body)
}

impl AdflowClient {
    /// `GET /advertisements/{userId}`
    pub async fn get_campaigns(&self, user_id: &str, token: &str) -> Result<Vec<Campaign>> {
        let url = self.url(&format!("advertisements/{user_id}"));
        let req = self.http.get(&url).headers(Self::auth_headers(Some(token))?);
        let resp = self.send(req, &url).await?;
        let list: CampaignList = Self::read_json(resp, "Failed to fetch campaigns").await?;
        Ok(list.into_vec())
    }

    /// `POST /advertisements` (multipart).
    ///
    /// Validates the draft locally before anything is sent.
    pub async fn create_campaign(&self, form: &NewCampaign, token: &str) -> Result<serde_json::Value> {
        validation::validate_campaign(form)?;
        let url = self.url("advertisements");
        let req = self
            .http
            .post(&url)
            .headers(Self::bearer(token)?)
            .multipart(campaign_form(form)?);
        let resp = self.send(req, &url).await?;
        let created: serde_json::Value =
            Self::read_json(resp, "Failed to create campaign").await?;
        tracing::info!(title = %form.title, "campaign created");
        Ok(created)
    }
}
