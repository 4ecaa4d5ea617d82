use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One showcased project, normalized from either backend's wire shape.
///
/// The document API ships `$id` envelopes; the REST functions ship plain
/// `id`. Aliases make both land in the same struct.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(alias = "$id")]
    pub id: String,

    pub title: String,

    #[serde(default)]
    pub description: String,

    /// Always a plain list after deserialization, whatever the wire sent.
    #[serde(default, deserialize_with = "deserialize_technologies")]
    pub technologies: Vec<String>,

    #[serde(default)]
    pub github_url: String,

    #[serde(default)]
    pub preview_url: String,

    #[serde(default)]
    pub image_web: String,

    #[serde(default)]
    pub image_mobile: String,

    #[serde(default)]
    pub status_id: String,

    #[serde(default)]
    pub current_version: String,

    #[serde(default)]
    pub is_public: bool,

    #[serde(default)]
    pub readme_url: String,

    #[serde(default)]
    pub order: Option<i64>,

    #[serde(default)]
    pub last_deployed_at: Option<DateTime<Utc>>,
}

/// Accepted wire shapes for the project collection.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ProjectsPayload {
    Documents {
        documents: Vec<Project>,
    },
    Bare(Vec<Project>),
}

impl ProjectsPayload {
    pub fn into_projects(self) -> Vec<Project> {
        match self {
            ProjectsPayload::Documents { documents } => documents,
            ProjectsPayload::Bare(projects) => projects,
        }
    }
}

/// Technology tags as they actually arrive: a native list, a JSON-encoded
/// list string, a comma-separated string, or garbage.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TechnologiesWire {
    List(Vec<String>),
    Text(String),
    Other(serde_json::Value),
}

impl TechnologiesWire {
    /// Terminates in a known-good list; garbage normalizes to empty.
    pub fn normalize(self) -> Vec<String> {
        match self {
            TechnologiesWire::List(items) => items,
            TechnologiesWire::Text(raw) => match serde_json::from_str::<serde_json::Value>(&raw) {
                Ok(serde_json::Value::Array(items)) => items
                    .into_iter()
                    .filter_map(|item| item.as_str().map(str::to_owned))
                    .collect(),
                // Valid JSON but not a list, e.g. a bare number.
                Ok(_) => Vec::new(),
                Err(_) => raw
                    .split(',')
                    .map(str::trim)
                    .filter(|tag| !tag.is_empty())
                    .map(str::to_owned)
                    .collect(),
            },
            TechnologiesWire::Other(_) => Vec::new(),
        }
    }
}

fn deserialize_technologies<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let wire = Option::<TechnologiesWire>::deserialize(deserializer)?;
    Ok(wire.map(TechnologiesWire::normalize).unwrap_or_default())
}
