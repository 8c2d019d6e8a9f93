use std::sync::Arc;

use log::{debug, warn};
use reqwest::header::CONTENT_TYPE;
use reqwest::Client;
use serde_json::Value;
use url::Url;

use crate::auth::CredentialProvider;
use crate::error::{OrchestraError, Result};
use crate::response::{ApiResponse, Pagination, Resource};


/// Production Orchestra API host.
pub const DEFAULT_BASE_URL: &str = "https://app.getorchestra.io";

/// Secret name the client resolves through its credential provider.
pub const DEFAULT_SECRET_KEY: &str = "API_KEY";

/// Client for the Orchestra public REST API.
///
/// Holds one `reqwest::Client` so connections are reused across calls;
/// clones share the same pool. The three operations never return `Err`:
/// every failure is folded into [`ApiResponse::Failure`], so callers
/// check the returned variant rather than catching errors.
#[derive(Clone)]
pub struct OrchestraClient {
    client: Client,
    base_url: Url,
    credentials: Arc<dyn CredentialProvider>,
    secret_key: String,
}

impl OrchestraClient {
    /// Create a client against the production Orchestra host.
    pub fn new(credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        Self::with_base_url(DEFAULT_BASE_URL, credentials)
    }

    /// Create a client against a custom host (self-hosted deployments,
    /// mock servers in tests).
    pub fn with_base_url(base_url: &str, credentials: Arc<dyn CredentialProvider>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("orchestra-client/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| OrchestraError::Config(format!("Failed to create HTTP client: {e}")))?;

        let base_url = Url::parse(base_url)
            .map_err(|e| OrchestraError::Config(format!("Invalid base URL: {e}")))?;

        Ok(Self {
            client,
            base_url,
            credentials,
            secret_key: DEFAULT_SECRET_KEY.to_owned(),
        })
    }

    /// Override the secret name passed to the credential provider.
    #[must_use]
    pub fn with_secret_key(mut self, key: impl Into<String>) -> Self {
        self.secret_key = key.into();
        self
    }

    /// Fetch one page of pipeline runs.
    pub async fn get_pipeline_runs(&self, pagination: Pagination) -> ApiResponse {
        self.request(Resource::PipelineRuns, Some(pagination)).await
    }

    /// Fetch one page of task runs.
    pub async fn get_task_runs(&self, pagination: Pagination) -> ApiResponse {
        self.request(Resource::TaskRuns, Some(pagination)).await
    }

    /// Fetch operations. The endpoint takes no pagination parameters.
    pub async fn get_operations(&self) -> ApiResponse {
        self.request(Resource::Operations, None).await
    }

    async fn request(&self, resource: Resource, pagination: Option<Pagination>) -> ApiResponse {
        match self.fetch(resource, pagination).await {
            Ok(body) => ApiResponse::Success(body),
            Err(e) => {
                warn!("Orchestra API request for {} failed: {e}", resource.key());
                ApiResponse::failure(resource, e.to_string())
            }
        }
    }

    async fn fetch(&self, resource: Resource, pagination: Option<Pagination>) -> Result<Value> {
        let token = self.credentials.resolve(&self.secret_key)?;

        let url = self
            .base_url
            .join(resource.path())
            .map_err(|e| OrchestraError::Config(format!("Invalid resource URL: {e}")))?;

        debug!("GET {url}");

        let mut request = self
            .client
            .get(url)
            .bearer_auth(token.as_str())
            .header(CONTENT_TYPE, "application/json");

        if let Some(pagination) = pagination {
            request = request.query(&pagination.query());
        }

        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unable to read error response".to_string());
            return Err(OrchestraError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response.json().await?)
    }
}
