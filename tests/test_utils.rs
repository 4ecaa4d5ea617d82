use std::sync::atomic::AtomicUsize;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use portfolio_dashboard::entities::{
    Deployment, Platform, Project, ProjectStatus, RepositoryStats, SocialLink,
};
use portfolio_dashboard::errors::AppError;
use portfolio_dashboard::repositories::api::{AssetApi, PortfolioApi, WorkflowLogsApi};

/// Canned-response double for the outbound API traits. Clones share the
/// recorded-call state, so a clone can be handed to an assembler while the
/// original is inspected.
#[derive(Default, Clone)]
pub struct StubApi {
    pub projects: Vec<Project>,
    pub statuses: Vec<ProjectStatus>,
    pub social_links: Vec<SocialLink>,
    pub deployments: Vec<Deployment>,
    pub repositories: Vec<RepositoryStats>,

    pub fail_projects: bool,
    pub fail_statuses: bool,
    pub fail_social_links: bool,
    pub fail_deployments: bool,

    pub asset_url: Option<String>,
    pub fail_assets: bool,

    pub asset_calls: Arc<AtomicUsize>,
    pub last_filename: Arc<Mutex<Option<String>>>,
    pub last_project_id: Arc<Mutex<Option<Option<String>>>>,
}

fn unavailable() -> AppError {
    AppError::Transport("stubbed backend unavailable".to_string())
}

#[async_trait]
impl PortfolioApi for StubApi {
    async fn fetch_projects(&self) -> Result<Vec<Project>, AppError> {
        if self.fail_projects {
            return Err(unavailable());
        }
        Ok(self.projects.clone())
    }

    async fn fetch_statuses(&self) -> Result<Vec<ProjectStatus>, AppError> {
        if self.fail_statuses {
            return Err(unavailable());
        }
        Ok(self.statuses.clone())
    }

    async fn fetch_social_links(&self) -> Result<Vec<SocialLink>, AppError> {
        if self.fail_social_links {
            return Err(unavailable());
        }
        Ok(self.social_links.clone())
    }

    async fn fetch_deployments(
        &self,
        project_id: Option<&str>,
    ) -> Result<Vec<Deployment>, AppError> {
        *self.last_project_id.lock().unwrap() = Some(project_id.map(str::to_owned));
        if self.fail_deployments {
            return Err(unavailable());
        }
        Ok(self.deployments.clone())
    }
}

#[async_trait]
impl WorkflowLogsApi for StubApi {
    async fn fetch_workflow_stats(
        &self,
        _include_logs: bool,
    ) -> Result<Vec<RepositoryStats>, AppError> {
        Ok(self.repositories.clone())
    }
}

#[async_trait]
impl AssetApi for StubApi {
    async fn resolve_asset(&self, filename: &str) -> Result<Option<String>, AppError> {
        self.asset_calls
            .fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        *self.last_filename.lock().unwrap() = Some(filename.to_string());
        if self.fail_assets {
            return Err(unavailable());
        }
        Ok(self.asset_url.clone())
    }
}

pub fn sample_project(id: &str, title: &str, order: Option<i64>) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{title} description"),
        technologies: vec!["Rust".to_string()],
        github_url: format!("https://github.com/example/{id}"),
        preview_url: format!("https://example.dev/{id}"),
        image_web: format!("images/{id}-web.png"),
        image_mobile: format!("images/{id}-mobile.png"),
        status_id: "s1".to_string(),
        current_version: "1.0.0".to_string(),
        is_public: true,
        readme_url: format!("readmes/{id}.md"),
        order,
        last_deployed_at: None,
    }
}

pub fn sample_status(id: &str, name: &str, class: &str) -> ProjectStatus {
    ProjectStatus {
        id: id.to_string(),
        name: name.to_string(),
        description: format!("{name} description"),
        class: class.to_string(),
    }
}

pub fn sample_social_link(id: &str, platform: Platform, order: i64) -> SocialLink {
    SocialLink {
        id: id.to_string(),
        platform,
        url: format!("https://social.example/{id}"),
        label: id.to_string(),
        created_at: None,
        order,
        is_active: true,
    }
}

pub fn sample_deployment(id: &str, version: &str, status: &str, is_success: bool) -> Deployment {
    Deployment {
        id: id.to_string(),
        project_id: "p1".to_string(),
        version: version.to_string(),
        status: status.to_string(),
        deployment_time: None,
        github_sha: "abc1234".to_string(),
        github_ref: "refs/heads/main".to_string(),
        actor: "octocat".to_string(),
        commit_message: format!("release {version}"),
        source: "github-actions".to_string(),
        deployment_url: format!("https://example.dev/deploys/{id}"),
        duration_in_seconds: 42.0,
        is_success,
        created_at: None,
    }
}
