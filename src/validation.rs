//! Client-side checks run before any request is issued.

use crate::{
    error::{Error, Result},
    types::{NewCampaign, TransferRequest},
};

/// Maximum number of media files attached to a campaign draft.
pub const MAX_CAMPAIGN_MEDIA: usize = 3;

/// Parse a user-typed amount. Must be a finite number greater than zero.
pub fn parse_amount(raw: &str) -> Result<f64> {
    let amount: f64 = raw
        .trim()
        .parse()
        .map_err(|_| Error::Validation(format!("amount must be a number, got {raw:?}")))?;
    check_amount(amount)?;
    Ok(amount)
}

fn check_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::Validation(
            "amount must be a positive number".to_string(),
        ));
    }
    Ok(())
}

pub fn validate_transfer(req: &TransferRequest) -> Result<()> {
    if req.from_email.trim().is_empty() {
        return Err(Error::Validation("sender email is required".to_string()));
    }
    if req.to_public_key.trim().is_empty() {
        return Err(Error::Validation(
            "recipient public key is required".to_string(),
        ));
    }
    check_amount(req.amount)
}

/// Positive-number check used for budget and cost-per-click. `None` on
/// anything that is not a number greater than zero.
fn positive(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite() && *v > 0.0)
}

pub fn validate_campaign(form: &NewCampaign) -> Result<()> {
    let missing = [
        &form.title,
        &form.target_url,
        &form.budget_xlm,
        &form.cost_per_click,
    ]
    .iter()
    .any(|field| field.trim().is_empty());
    if missing || form.media.is_empty() {
        return Err(Error::Validation(
            "fill in all required fields and add at least one image".to_string(),
        ));
    }
    if form.media.len() > MAX_CAMPAIGN_MEDIA {
        return Err(Error::Validation(format!(
            "at most {MAX_CAMPAIGN_MEDIA} media files per campaign"
        )));
    }
    if positive(&form.budget_xlm).is_none() {
        return Err(Error::Validation(
            "budget must be a positive number".to_string(),
        ));
    }
    if positive(&form.cost_per_click).is_none() {
        return Err(Error::Validation(
            "cost per click must be a positive number".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{CampaignMedia, MediaKind};

    fn image() -> CampaignMedia {
        CampaignMedia {
            filename: "banner.png".into(),
            content_type: "image/png".into(),
            kind: MediaKind::Image,
            bytes: vec![0x89, b'P', b'N', b'G'],
        }
    }

    fn draft() -> NewCampaign {
        NewCampaign {
            title: "Launch".into(),
            description: String::new(),
            target_url: "https://example.com".into(),
            budget_xlm: "100".into(),
            cost_per_click: "0.5".into(),
            tags: "defi,nft".into(),
            media: vec![image()],
        }
    }

    #[test]
    fn parse_amount_accepts_positive_decimals() {
        assert_eq!(parse_amount(" 12.5 ").unwrap(), 12.5);
    }

    #[test]
    fn parse_amount_rejects_zero_negative_and_garbage() {
        for raw in ["0", "-3", "abc", "", "NaN", "inf"] {
            assert!(
                matches!(parse_amount(raw), Err(Error::Validation(_))),
                "{raw:?} should be rejected"
            );
        }
    }

    #[test]
    fn transfer_requires_recipient() {
        let req = TransferRequest {
            from_email: "a@x.com".into(),
            to_public_key: "  ".into(),
            amount: 1.0,
        };
        assert!(matches!(validate_transfer(&req), Err(Error::Validation(_))));
    }

    #[test]
    fn complete_campaign_passes() {
        validate_campaign(&draft()).unwrap();
    }

    #[test]
    fn campaign_without_media_is_rejected() {
        let mut form = draft();
        form.media.clear();
        assert!(matches!(validate_campaign(&form), Err(Error::Validation(_))));
    }

    #[test]
    fn campaign_with_four_media_files_is_rejected() {
        let mut form = draft();
        form.media = vec![image(), image(), image(), image()];
        let err = validate_campaign(&form).unwrap_err();
        assert!(err.to_string().contains("at most 3"));
    }

    #[test]
    fn campaign_budget_must_be_positive() {
        let mut form = draft();
        form.budget_xlm = "-10".into();
        let err = validate_campaign(&form).unwrap_err();
        assert_eq!(err.to_string(), "budget must be a positive number");

        let mut form = draft();
        form.cost_per_click = "free".into();
        let err = validate_campaign(&form).unwrap_err();
        assert_eq!(err.to_string(), "cost per click must be a positive number");
    }
}
