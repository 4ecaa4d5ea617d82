use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE},
    Client, Response,
};

use crate::{errors::AppError, settings::AppwriteConfig};

/// Client for the REST function endpoints.
pub fn functions_client() -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))
}

/// Client for the document-database backend; project and key travel as
/// default headers on every request.
pub fn appwrite_client(config: &AppwriteConfig) -> Result<Client, AppError> {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(
        "X-Appwrite-Project",
        HeaderValue::from_str(&config.project_id)
            .map_err(|_| AppError::Config("invalid Appwrite project id".to_string()))?,
    );
    let mut key = HeaderValue::from_str(&config.api_key)
        .map_err(|_| AppError::Config("invalid Appwrite API key".to_string()))?;
    key.set_sensitive(true);
    headers.insert("X-Appwrite-Key", key);

    Client::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| AppError::Config(format!("failed to build HTTP client: {e}")))
}

/// Maps a non-2xx response to `AppError::UnexpectedStatus`.
pub fn ensure_success(response: Response) -> Result<Response, AppError> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(AppError::UnexpectedStatus(response.status().as_u16()))
    }
}
