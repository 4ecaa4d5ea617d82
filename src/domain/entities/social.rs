use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Github,
    Twitter,
    Linkedin,
    Facebook,
    Instagram,
    Youtube,
    #[serde(other)]
    Other,
}

/// A profile link. Field aliases absorb the document API's envelope
/// (`$id`, `$createdAt`, `display_name`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(alias = "$id")]
    pub id: String,

    pub platform: Platform,

    pub url: String,

    #[serde(default, alias = "display_name")]
    pub label: String,

    #[serde(default, alias = "$createdAt")]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub order: i64,

    // Absent on the REST shape; the document API uses it to hide links.
    #[serde(default = "default_active")]
    pub is_active: bool,
}

fn default_active() -> bool {
    true
}

/// Accepted wire shapes for the social-link payload.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum SocialPayload {
    Wrapped {
        links: Vec<SocialLink>,
    },
    Documents {
        documents: Vec<SocialLink>,
    },
    Bare(Vec<SocialLink>),
}

impl SocialPayload {
    pub fn into_links(self) -> Vec<SocialLink> {
        match self {
            SocialPayload::Wrapped { links } => links,
            SocialPayload::Documents { documents } => documents,
            SocialPayload::Bare(links) => links,
        }
    }
}

/// Parses a raw response body. Anything that is not one of the recognized
/// list shapes, including non-JSON text from the legacy endpoint, yields an
/// empty list rather than an error.
pub fn parse_social_payload(raw: &str) -> Vec<SocialLink> {
    match serde_json::from_str::<SocialPayload>(raw) {
        Ok(payload) => payload.into_links(),
        Err(_) => Vec::new(),
    }
}
