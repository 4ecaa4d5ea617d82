use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for the workflow-log aggregation endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct LogsRequest {
    pub is_logs_required: bool,
    pub group_by_repository: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Commit {
    #[serde(default)]
    pub sha: String,

    #[serde(default)]
    pub message: String,

    #[serde(default)]
    pub author: String,

    #[serde(default)]
    pub committer: String,

    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowLog {
    #[serde(default)]
    pub repo: String,

    #[serde(default)]
    pub run_id: i64,

    #[serde(default)]
    pub workflow: String,

    #[serde(default)]
    pub status: String,

    #[serde(default)]
    pub conclusion: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub run_number: i64,

    #[serde(default)]
    pub run_attempt: i64,

    #[serde(default)]
    pub actor: String,

    #[serde(default)]
    pub event: String,

    #[serde(default)]
    pub url: String,

    /// Milliseconds.
    #[serde(default)]
    pub duration: u64,

    #[serde(default)]
    pub branch: String,

    #[serde(default)]
    pub commit: Option<Commit>,
}

/// Per-repository CI/CD aggregates, with the raw runs attached when the
/// request asked for them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryStats {
    pub name: String,

    #[serde(default)]
    pub url: String,

    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,

    #[serde(default)]
    pub total_workflows: u64,

    #[serde(default)]
    pub successful_deployments: u64,

    #[serde(default)]
    pub failed_deployments: u64,

    /// Milliseconds.
    #[serde(default)]
    pub total_deployment_time: u64,

    #[serde(default)]
    pub workflow_logs: Option<Vec<WorkflowLog>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogsResponse {
    #[serde(default)]
    pub repositories: Vec<RepositoryStats>,
}

/// One workflow run with its repository name attached, the row shape the
/// global logs table renders.
#[derive(Debug, Clone)]
pub struct FlatWorkflowLog {
    pub repository: String,
    pub log: WorkflowLog,
}
