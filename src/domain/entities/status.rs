use serde::{Deserialize, Serialize};

/// A named project/deployment state from the status catalog.
///
/// Projects reference it by `id`, deployments by `name`; the two joins are
/// distinct operations and stay that way.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectStatus {
    #[serde(alias = "$id")]
    pub id: String,

    pub name: String,

    #[serde(default)]
    pub description: String,

    /// Presentation style token, passed through verbatim even when malformed.
    #[serde(default)]
    pub class: String,
}

/// Accepted wire shapes for the status catalog.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum StatusesPayload {
    Wrapped {
        statuses: Vec<ProjectStatus>,
    },
    Documents {
        documents: Vec<ProjectStatus>,
    },
    Bare(Vec<ProjectStatus>),
}

impl StatusesPayload {
    pub fn into_statuses(self) -> Vec<ProjectStatus> {
        match self {
            StatusesPayload::Wrapped { statuses } => statuses,
            StatusesPayload::Documents { documents } => documents,
            StatusesPayload::Bare(statuses) => statuses,
        }
    }
}
