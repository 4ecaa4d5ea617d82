use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{
    entities::{Deployment, Project, ProjectStatus, SocialLink},
    errors::AppError,
    infrastructure::http::{appwrite_client, ensure_success},
    repositories::api::PortfolioApi,
    settings::AppwriteConfig,
};

/// Document-list envelope common to every collection read.
///
/// The explicit bound stops serde from requiring `T: Default` for the
/// defaulted `documents` field; the element type only ever needs to
/// deserialize.
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: DeserializeOwned"))]
struct DocumentList<T> {
    #[serde(default)]
    documents: Vec<T>,
}

/// The document-database backend. Collections carry `$id`/`$createdAt`
/// envelopes which the entity aliases absorb.
#[derive(Clone)]
pub struct AppwriteApi {
    client: Client,
    endpoint: String,
    database_id: String,
}

impl AppwriteApi {
    pub fn new(config: &AppwriteConfig) -> Result<Self, AppError> {
        if !config.is_configured() {
            return Err(AppError::Config(
                "Appwrite backend requested but not configured".to_string(),
            ));
        }

        Ok(AppwriteApi {
            client: appwrite_client(config)?,
            endpoint: config.endpoint.trim_end_matches('/').to_string(),
            database_id: config.database_id.clone(),
        })
    }

    fn collection_url(&self, collection: &str) -> String {
        format!(
            "{}/databases/{}/collections/{}/documents",
            self.endpoint, self.database_id, collection
        )
    }

    async fn fetch_collection<T: DeserializeOwned>(
        &self,
        collection: &str,
    ) -> Result<Vec<T>, AppError> {
        let response = self
            .client
            .get(self.collection_url(collection))
            .send()
            .await?;
        let list: DocumentList<T> = ensure_success(response)?.json().await?;
        Ok(list.documents)
    }
}

#[async_trait]
impl PortfolioApi for AppwriteApi {
    async fn fetch_projects(&self) -> Result<Vec<Project>, AppError> {
        self.fetch_collection("projects").await
    }

    async fn fetch_statuses(&self) -> Result<Vec<ProjectStatus>, AppError> {
        self.fetch_collection("project_statuses").await
    }

    async fn fetch_social_links(&self) -> Result<Vec<SocialLink>, AppError> {
        let mut links: Vec<SocialLink> = self.fetch_collection("social_links").await?;
        // Hidden links stay in the collection; the view never sees them.
        links.retain(|link| link.is_active);
        links.sort_by_key(|link| link.order);
        Ok(links)
    }

    async fn fetch_deployments(
        &self,
        project_id: Option<&str>,
    ) -> Result<Vec<Deployment>, AppError> {
        let mut deployments: Vec<Deployment> = self.fetch_collection("deployments").await?;
        if let Some(project_id) = project_id {
            deployments.retain(|deployment| deployment.project_id == project_id);
        }
        Ok(deployments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // The envelope must deserialize for any element type that itself
    // deserializes; nothing here implements Default.
    #[test]
    fn document_list_deserializes_without_default_elements() {
        let raw = serde_json::json!({
            "total": 1,
            "documents": [{
                "$id": "p1",
                "title": "Alpha",
                "status_id": "s1"
            }]
        });

        let list: DocumentList<Project> = serde_json::from_value(raw).unwrap();
        assert_eq!(list.documents.len(), 1);
        assert_eq!(list.documents[0].id, "p1");
    }

    #[test]
    fn document_list_defaults_to_empty_when_documents_missing() {
        let list: DocumentList<Project> = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(list.documents.is_empty());
    }
}
