use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One recorded deployment event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deployment {
    #[serde(alias = "$id")]
    pub id: String,

    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub version: String,

    /// Free text. Displayed as-is and joined against the status catalog by
    /// name; it never drives the success badge.
    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub deployment_time: Option<DateTime<Utc>>,

    #[serde(default)]
    pub github_sha: String,

    #[serde(default)]
    pub github_ref: String,

    #[serde(default)]
    pub actor: String,

    #[serde(default)]
    pub commit_message: String,

    #[serde(default)]
    pub source: String,

    #[serde(default)]
    pub deployment_url: String,

    #[serde(default)]
    pub duration_in_seconds: f64,

    pub is_success: bool,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentBadge {
    Success,
    Failed,
}

impl DeploymentBadge {
    pub fn label(&self) -> &'static str {
        match self {
            DeploymentBadge::Success => "Success",
            DeploymentBadge::Failed => "Failed",
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            DeploymentBadge::Success => "bg-green-100 text-green-800",
            DeploymentBadge::Failed => "bg-red-100 text-red-800",
        }
    }
}

impl Deployment {
    /// Derived from `is_success` alone, independent of the status text and
    /// of whatever the status catalog says.
    pub fn badge(&self) -> DeploymentBadge {
        if self.is_success {
            DeploymentBadge::Success
        } else {
            DeploymentBadge::Failed
        }
    }
}
