use std::collections::HashMap;

use crate::{
    entities::{Deployment, ProjectStatus},
    repositories::api::PortfolioApi,
    use_cases::table::SortValue,
};

/// The assembled deployments page: the (optionally project-scoped) history
/// plus a status catalog keyed by name.
#[derive(Debug, Default)]
pub struct DeploymentsView {
    pub deployments: Vec<Deployment>,
    pub statuses_by_name: HashMap<String, ProjectStatus>,

    /// False when one of the fetches failed and was replaced by an empty
    /// collection.
    pub complete: bool,
}

impl DeploymentsView {
    /// Join by the deployment's free-text status against a catalog *name*.
    /// A miss leaves the relation unresolved; it is never substituted with
    /// an arbitrary catalog entry.
    pub fn status_of(&self, deployment: &Deployment) -> Option<&ProjectStatus> {
        self.statuses_by_name.get(&deployment.status)
    }
}

pub struct DeploymentAssembler<A: PortfolioApi> {
    api: A,
}

impl<A: PortfolioApi> DeploymentAssembler<A> {
    pub fn new(api: A) -> Self {
        DeploymentAssembler { api }
    }

    /// Fetches the deployment history and the status catalog in parallel.
    /// `project_id` scopes the history server-side; `None` fetches all of it.
    /// Fail-partial like the projects page.
    pub async fn assemble(&self, project_id: Option<&str>) -> DeploymentsView {
        let (deployments, statuses) = futures::join!(
            self.api.fetch_deployments(project_id),
            self.api.fetch_statuses(),
        );

        let mut complete = true;
        let deployments = match deployments {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!("failed to load deployment history: {err}");
                complete = false;
                Vec::new()
            }
        };
        let statuses = match statuses {
            Ok(items) => items,
            Err(err) => {
                tracing::warn!("failed to load project statuses: {err}");
                complete = false;
                Vec::new()
            }
        };

        DeploymentsView {
            deployments,
            statuses_by_name: index_by_name(statuses),
            complete,
        }
    }
}

/// Status lookup keyed by name, the join the deployments page uses. When the
/// catalog carries duplicate names the first-encountered entry wins; that
/// ambiguity is inherited from the data, not resolved here.
pub fn index_by_name(statuses: Vec<ProjectStatus>) -> HashMap<String, ProjectStatus> {
    let mut by_name = HashMap::new();
    for status in statuses {
        by_name.entry(status.name.clone()).or_insert(status);
    }
    by_name
}

/// Sortable columns of the deployments table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeploymentColumn {
    Version,
    Status,
    DeploymentTime,
    Actor,
    Source,
    Duration,
    Success,
    CommitMessage,
}

pub fn deployment_sort_value(deployment: &Deployment, column: DeploymentColumn) -> SortValue {
    match column {
        DeploymentColumn::Version => SortValue::Text(deployment.version.clone()),
        DeploymentColumn::Status => SortValue::Text(deployment.status.clone()),
        DeploymentColumn::DeploymentTime => match deployment.deployment_time {
            Some(at) => SortValue::Number(at.timestamp_millis() as f64),
            None => SortValue::None,
        },
        DeploymentColumn::Actor => SortValue::Text(deployment.actor.clone()),
        DeploymentColumn::Source => SortValue::Text(deployment.source.clone()),
        DeploymentColumn::Duration => SortValue::Number(deployment.duration_in_seconds),
        DeploymentColumn::Success => SortValue::Bool(deployment.is_success),
        DeploymentColumn::CommitMessage => SortValue::Text(deployment.commit_message.clone()),
    }
}

/// The free-text filter matches when any of these fields matches.
pub fn deployment_search_fields(deployment: &Deployment) -> Vec<String> {
    vec![
        deployment.version.clone(),
        deployment.status.clone(),
        deployment.actor.clone(),
        deployment.source.clone(),
        deployment.commit_message.clone(),
    ]
}
