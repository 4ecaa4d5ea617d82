use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    entities::{
        parse_social_payload, Deployment, LogsRequest, LogsResponse, Project, ProjectStatus,
        ProjectsPayload, RepositoryStats, SocialLink, StatusesPayload,
    },
    errors::AppError,
    infrastructure::http::{ensure_success, functions_client},
    repositories::api::{AssetApi, PortfolioApi, WorkflowLogsApi},
    settings::AppConfig,
};

/// The REST functions backend (`get-projects`, `get-deployment-history`,
/// `get-s3-file`, ...). Responses are shape-tolerant where the endpoints
/// historically misbehaved.
#[derive(Clone)]
pub struct FunctionsApi {
    client: Client,
    base_url: String,
}

impl FunctionsApi {
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        Ok(FunctionsApi {
            client: functions_client()?,
            base_url: config.functions_base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, function: &str) -> String {
        format!("{}/{}", self.base_url, function)
    }
}

#[async_trait]
impl PortfolioApi for FunctionsApi {
    async fn fetch_projects(&self) -> Result<Vec<Project>, AppError> {
        let response = self.client.get(self.url("get-projects")).send().await?;
        let payload: ProjectsPayload = ensure_success(response)?.json().await?;
        Ok(payload.into_projects())
    }

    async fn fetch_statuses(&self) -> Result<Vec<ProjectStatus>, AppError> {
        let response = self
            .client
            .get(self.url("get-project-statuses"))
            .send()
            .await?;
        let payload: StatusesPayload = ensure_success(response)?.json().await?;
        Ok(payload.into_statuses())
    }

    async fn fetch_social_links(&self) -> Result<Vec<SocialLink>, AppError> {
        let response = self.client.get(self.url("get-social-links")).send().await?;
        // The legacy endpoint sometimes returns non-JSON text; read the body
        // as text and let normalization decide.
        let body = ensure_success(response)?.text().await?;
        Ok(parse_social_payload(&body))
    }

    async fn fetch_deployments(
        &self,
        project_id: Option<&str>,
    ) -> Result<Vec<Deployment>, AppError> {
        let mut request = self.client.get(self.url("get-deployment-history"));
        if let Some(project_id) = project_id {
            request = request.query(&[("project_id", project_id)]);
        }

        let response = request.send().await?;
        let deployments: Vec<Deployment> = ensure_success(response)?.json().await?;
        Ok(deployments)
    }
}

#[async_trait]
impl WorkflowLogsApi for FunctionsApi {
    async fn fetch_workflow_stats(
        &self,
        include_logs: bool,
    ) -> Result<Vec<RepositoryStats>, AppError> {
        let body = LogsRequest {
            is_logs_required: include_logs,
            group_by_repository: true,
        };

        let response = self
            .client
            .post(self.url("github-get-all-logs"))
            .json(&body)
            .send()
            .await?;
        let payload: LogsResponse = ensure_success(response)?.json().await?;
        Ok(payload.repositories)
    }
}

#[derive(Debug, Deserialize)]
struct SignedUrlResponse {
    url: Option<String>,
}

#[async_trait]
impl AssetApi for FunctionsApi {
    async fn resolve_asset(&self, filename: &str) -> Result<Option<String>, AppError> {
        let response = self
            .client
            .post(self.url("get-s3-file"))
            .json(&serde_json::json!({ "filename": filename }))
            .send()
            .await?;

        // A rejected lookup is a valid terminal state, not an error.
        if !response.status().is_success() {
            return Ok(None);
        }

        match response.json::<SignedUrlResponse>().await {
            Ok(payload) => Ok(payload.url),
            Err(_) => Ok(None),
        }
    }
}
