use crate::{
    entities::{FlatWorkflowLog, RepositoryStats},
    errors::AppError,
    repositories::api::WorkflowLogsApi,
    use_cases::table::SortValue,
};

/// Aggregated GitHub Actions statistics, grouped by repository.
pub struct WorkflowStatsAssembler<A: WorkflowLogsApi> {
    api: A,
}

impl<A: WorkflowLogsApi> WorkflowStatsAssembler<A> {
    pub fn new(api: A) -> Self {
        WorkflowStatsAssembler { api }
    }

    /// Single fetch; the stats page has no partial-data mode, a failure here
    /// renders as "Error loading data".
    pub async fn assemble(&self, include_logs: bool) -> Result<Vec<RepositoryStats>, AppError> {
        self.api.fetch_workflow_stats(include_logs).await
    }
}

/// Flattens per-repository runs into the row shape of the global logs table,
/// tagging each run with its repository name. Repositories fetched without
/// logs contribute nothing.
pub fn flatten_logs(repositories: &[RepositoryStats]) -> Vec<FlatWorkflowLog> {
    repositories
        .iter()
        .flat_map(|repo| {
            repo.workflow_logs.iter().flatten().map(|log| FlatWorkflowLog {
                repository: repo.name.clone(),
                log: log.clone(),
            })
        })
        .collect()
}

/// Sortable columns of the repository statistics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepoColumn {
    Name,
    CreatedAt,
    TotalWorkflows,
    SuccessfulDeployments,
    FailedDeployments,
    TotalDeploymentTime,
}

pub fn repo_sort_value(repo: &RepositoryStats, column: RepoColumn) -> SortValue {
    match column {
        RepoColumn::Name => SortValue::Text(repo.name.clone()),
        RepoColumn::CreatedAt => match repo.created_at {
            Some(at) => SortValue::Number(at.timestamp_millis() as f64),
            None => SortValue::None,
        },
        RepoColumn::TotalWorkflows => SortValue::Number(repo.total_workflows as f64),
        RepoColumn::SuccessfulDeployments => SortValue::Number(repo.successful_deployments as f64),
        RepoColumn::FailedDeployments => SortValue::Number(repo.failed_deployments as f64),
        RepoColumn::TotalDeploymentTime => SortValue::Number(repo.total_deployment_time as f64),
    }
}

pub fn repo_search_fields(repo: &RepositoryStats) -> Vec<String> {
    vec![repo.name.clone()]
}
