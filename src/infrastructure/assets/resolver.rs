use url::Url;

use crate::{errors::AppError, repositories::api::AssetApi};

use super::slot::AssetSlot;

/// Resolves stored filename references into short-lived signed URLs.
///
/// Absence is a valid terminal state: an empty reference, a failed lookup or
/// a response without the URL field all resolve to `None`, never an error.
/// Nothing is cached; a reference requested twice looks up twice.
pub struct AssetResolver<A: AssetApi> {
    api: A,
}

impl<A: AssetApi> AssetResolver<A> {
    pub fn new(api: A) -> Self {
        AssetResolver { api }
    }

    /// One-shot resolution.
    pub async fn resolve(&self, reference: Option<&str>) -> Option<String> {
        let reference = reference.map(str::trim).filter(|r| !r.is_empty())?;

        match self.api.resolve_asset(&bare_path(reference)).await {
            Ok(url) => url,
            Err(err) => {
                tracing::debug!("asset lookup failed for {reference}: {err}");
                None
            }
        }
    }

    /// Resolution through a slot, so a caller re-requesting with a changed
    /// reference keeps last-write-wins semantics for the current key.
    pub async fn refresh(&self, slot: &mut AssetSlot, reference: Option<&str>) -> Option<String> {
        let Some(ticket) = slot.request(reference) else {
            return None;
        };

        let url = match self.api.resolve_asset(&ticket.filename).await {
            Ok(url) => url,
            Err(err) => {
                tracing::debug!("asset lookup failed for {}: {err}", ticket.filename);
                None
            }
        };

        slot.complete(&ticket, url);
        slot.url().map(str::to_owned)
    }

    /// Resolves a reference and downloads the body behind it, used for
    /// README content.
    pub async fn fetch_text(&self, reference: Option<&str>) -> Result<Option<String>, AppError> {
        let Some(url) = self.resolve(reference).await else {
            return Ok(None);
        };

        let response = reqwest::get(&url).await?;
        if !response.status().is_success() {
            return Ok(None);
        }
        Ok(Some(response.text().await?))
    }
}

/// Reduces an absolute URL to its bare path component; the lookup endpoint
/// expects `path/img.png`, not `https://host/path/img.png`. Anything that is
/// not an absolute http(s) URL passes through unchanged.
pub fn bare_path(reference: &str) -> String {
    match Url::parse(reference) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
            url.path().trim_start_matches('/').to_string()
        }
        _ => reference.to_string(),
    }
}
