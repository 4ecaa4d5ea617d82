use async_trait::async_trait;

use crate::{
    entities::{Deployment, Project, ProjectStatus, RepositoryStats, SocialLink},
    errors::AppError,
};

/// Read access to the portfolio collections. Every call is an independent,
/// idempotent outbound read; this layer has no mutation calls at all.
#[async_trait]
pub trait PortfolioApi: Send + Sync {
    /// Fetches the project records.
    async fn fetch_projects(&self) -> Result<Vec<Project>, AppError>;

    /// Fetches the status catalog.
    async fn fetch_statuses(&self) -> Result<Vec<ProjectStatus>, AppError>;

    /// Fetches the profile's social links.
    async fn fetch_social_links(&self) -> Result<Vec<SocialLink>, AppError>;

    /// Fetches the deployment history, scoped server-side to one project
    /// when `project_id` is given.
    async fn fetch_deployments(&self, project_id: Option<&str>)
        -> Result<Vec<Deployment>, AppError>;
}

/// Read access to the GitHub Actions log aggregation.
#[async_trait]
pub trait WorkflowLogsApi: Send + Sync {
    /// Fetches per-repository aggregates, with the raw runs attached when
    /// `include_logs` is set.
    async fn fetch_workflow_stats(
        &self,
        include_logs: bool,
    ) -> Result<Vec<RepositoryStats>, AppError>;
}

/// Signed-URL lookup for stored assets.
#[async_trait]
pub trait AssetApi: Send + Sync {
    /// Resolves a bare stored path into a short-lived signed URL.
    /// `Ok(None)` covers both a rejected lookup and a response without the
    /// URL field; only transport-level failures are errors.
    async fn resolve_asset(&self, filename: &str) -> Result<Option<String>, AppError>;
}
