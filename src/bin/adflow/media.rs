use std::path::Path;

use adflow_wallet::{
    types::{CampaignMedia, MediaKind},
    validation::MAX_CAMPAIGN_MEDIA,
};
use anyhow::{bail, Context, Result};

pub const MAX_UPLOAD_BYTES: usize = 5_000_000;

pub fn load_campaign_media(paths: &[impl AsRef<Path>]) -> Result<Vec<CampaignMedia>> {
    if paths.len() > MAX_CAMPAIGN_MEDIA {
        bail!(
            "at most {MAX_CAMPAIGN_MEDIA} media files per campaign, got {}",
            paths.len()
        );
    }
    paths.iter().map(|p| load_one(p.as_ref())).collect()
}

fn load_one(path: &Path) -> Result<CampaignMedia> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    let (kind, content_type) = classify(&ext)
        .with_context(|| format!("unsupported media type: {}", path.display()))?;
    let bytes =
        std::fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    if bytes.len() > MAX_UPLOAD_BYTES {
        bail!(
            "{} is {} bytes; uploads are limited to {MAX_UPLOAD_BYTES}",
            path.display(),
            bytes.len()
        );
    }
    Ok(CampaignMedia {
        filename: format!("{}.{ext}", sanitize_name(path, "media")),
        content_type: content_type.to_string(),
        kind,
        bytes,
    })
}

fn classify(ext: &str) -> Option<(MediaKind, &'static str)> {
    let found = match ext {
        "png" => (MediaKind::Image, "image/png"),
        "jpg" | "jpeg" => (MediaKind::Image, "image/jpeg"),
        "gif" => (MediaKind::Image, "image/gif"),
        "webp" => (MediaKind::Image, "image/webp"),
        "mp4" => (MediaKind::Video, "video/mp4"),
        "webm" => (MediaKind::Video, "video/webm"),
        "mov" => (MediaKind::Video, "video/quicktime"),
        _ => return None,
    };
    Some(found)
}

fn sanitize_name(path: &Path, fallback: &str) -> String {
    let raw = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(fallback)
        .to_lowercase();
    let mut clean = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if ch.is_ascii_alphanumeric() || ch == '-' || ch == '_' {
            clean.push(ch);
        } else if ch.is_ascii_whitespace() {
            clean.push('-');
        }
    }
    let clean = clean.trim_matches(['-', '_']).to_string();
    if clean.is_empty() {
        fallback.to_string()
    } else {
        clean
    }
}
