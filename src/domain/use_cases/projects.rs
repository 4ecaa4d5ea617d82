use std::collections::HashMap;

use crate::{
    entities::{Project, ProjectStatus, SocialLink},
    errors::AppError,
    repositories::api::PortfolioApi,
    use_cases::table::SortValue,
};

/// The assembled projects page: projects joined to the status catalog by id,
/// plus the profile's social links.
#[derive(Debug, Default)]
pub struct ProjectsView {
    pub projects: Vec<Project>,
    pub statuses_by_id: HashMap<String, ProjectStatus>,
    pub social_links: Vec<SocialLink>,

    /// False when at least one of the three fetches failed and its
    /// collection was replaced by an empty one. The caller surfaces this as
    /// a single transient notification.
    pub complete: bool,
}

impl ProjectsView {
    /// Join by status id. A miss means the project renders without a badge;
    /// the project itself is never dropped.
    pub fn status_of(&self, project: &Project) -> Option<&ProjectStatus> {
        self.statuses_by_id.get(&project.status_id)
    }
}

pub struct ProjectAssembler<A: PortfolioApi> {
    api: A,
}

impl<A: PortfolioApi> ProjectAssembler<A> {
    pub fn new(api: A) -> Self {
        ProjectAssembler { api }
    }

    /// Issues the three fetches concurrently and waits for all of them.
    /// Fail-partial: a failed fetch empties its own collection and clears
    /// `complete`, it never cancels the others or raises.
    pub async fn assemble(&self) -> ProjectsView {
        let (projects, statuses, social_links) = futures::join!(
            self.api.fetch_projects(),
            self.api.fetch_statuses(),
            self.api.fetch_social_links(),
        );

        let mut complete = true;
        let mut projects = take_or_empty(projects, "projects", &mut complete);
        let statuses = take_or_empty(statuses, "project statuses", &mut complete);
        let social_links = take_or_empty(social_links, "social links", &mut complete);

        sort_by_display_order(&mut projects);

        ProjectsView {
            projects,
            statuses_by_id: index_by_id(statuses),
            social_links,
            complete,
        }
    }
}

fn take_or_empty<T>(result: Result<Vec<T>, AppError>, what: &str, complete: &mut bool) -> Vec<T> {
    match result {
        Ok(items) => items,
        Err(err) => {
            tracing::warn!("failed to load {what}: {err}");
            *complete = false;
            Vec::new()
        }
    }
}

/// Status lookup keyed by id, the join the projects page uses. Deployments
/// join by name instead; see `deployments::index_by_name`.
pub fn index_by_id(statuses: Vec<ProjectStatus>) -> HashMap<String, ProjectStatus> {
    statuses
        .into_iter()
        .map(|status| (status.id.clone(), status))
        .collect()
}

/// Ascending by display order, stable; projects without an order sort after
/// every project that has one.
pub fn sort_by_display_order(projects: &mut [Project]) {
    projects.sort_by_key(|project| project.order.unwrap_or(i64::MAX));
}

/// Sortable columns of the flat projects table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectColumn {
    Title,
    CurrentVersion,
    Status,
    LastDeployedAt,
    IsPublic,
    PreviewUrl,
    GithubUrl,
    Order,
}

pub fn project_sort_value(project: &Project, column: ProjectColumn) -> SortValue {
    match column {
        ProjectColumn::Title => SortValue::Text(project.title.clone()),
        ProjectColumn::CurrentVersion => SortValue::Text(project.current_version.clone()),
        ProjectColumn::Status => SortValue::Text(project.status_id.clone()),
        ProjectColumn::LastDeployedAt => match project.last_deployed_at {
            Some(at) => SortValue::Number(at.timestamp_millis() as f64),
            None => SortValue::None,
        },
        ProjectColumn::IsPublic => SortValue::Bool(project.is_public),
        ProjectColumn::PreviewUrl => SortValue::Text(project.preview_url.clone()),
        ProjectColumn::GithubUrl => SortValue::Text(project.github_url.clone()),
        ProjectColumn::Order => match project.order {
            Some(order) => SortValue::Number(order as f64),
            None => SortValue::None,
        },
    }
}

pub fn project_search_fields(project: &Project) -> Vec<String> {
    vec![
        project.title.clone(),
        project.readme_url.clone(),
        project.description.clone(),
        project.github_url.clone(),
        project.preview_url.clone(),
    ]
}
