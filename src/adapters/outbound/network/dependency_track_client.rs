use crate::ports::outbound::{ProjectRegistry, SbomUploader};
use crate::reconciliation::domain::RegistryProject;
use crate::shared::error::CycloneError;
use crate::shared::Result;
use async_trait::async_trait;
use base64::Engine;
use reqwest::StatusCode;
use serde::Serialize;
use std::time::Duration;

/// Environment variable holding the Dependency-Track API key
pub const API_KEY_VARIABLE: &str = "DEPENDENCYTRACK_API_KEY";

const API_KEY_HEADER: &str = "X-Api-Key";
const TIMEOUT_SECONDS: u64 = 60;

#[derive(Debug, Serialize)]
struct BomUploadRequest<'a> {
    project: &'a str,
    bom: String,
}

/// DependencyTrackClient adapter for the Dependency-Track REST API
///
/// Implements both the `SbomUploader` and the `ProjectRegistry` ports. The
/// API key is sent with every request in the `X-Api-Key` header.
pub struct DependencyTrackClient {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl DependencyTrackClient {
    /// Creates a client for the Dependency-Track instance at `base_url`
    pub fn new(base_url: &str, api_key: impl Into<String>) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(TIMEOUT_SECONDS))
            .user_agent(format!("central-cyclone/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self::with_client(client, base_url, api_key))
    }

    /// Creates a client, reading the API key from `DEPENDENCYTRACK_API_KEY`
    ///
    /// # Errors
    /// Returns `MissingCredential` if the variable is unset or empty.
    pub fn from_env(base_url: &str) -> Result<Self> {
        let api_key = std::env::var(API_KEY_VARIABLE)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| CycloneError::MissingCredential {
                variable: API_KEY_VARIABLE.to_string(),
                hint: "Create an API key for a team with BOM_UPLOAD and PORTFOLIO_MANAGEMENT permissions and export it".to_string(),
            })?;
        Self::new(base_url, api_key)
    }

    fn with_client(client: reqwest::Client, base_url: &str, api_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/v1/{}", self.base_url, path)
    }

    fn lookup_url(&self, name: &str, version: &str) -> String {
        format!(
            "{}?name={}&version={}",
            self.endpoint("project/lookup"),
            urlencoding::encode(name),
            urlencoding::encode(version)
        )
    }

    fn encode_bom(data: &[u8]) -> String {
        base64::engine::general_purpose::STANDARD.encode(data)
    }

    // Error bodies can be whole HTML pages; keep the start only
    async fn failure_details(status: StatusCode, response: reqwest::Response) -> String {
        let body = response.text().await.unwrap_or_default();
        let body: String = body.chars().take(500).collect();
        format!("status {}, body: {}", status, body.trim())
    }
}

#[async_trait]
impl SbomUploader for DependencyTrackClient {
    async fn upload_sbom(&self, project_id: &str, data: Vec<u8>) -> Result<()> {
        let payload = BomUploadRequest {
            project: project_id,
            bom: Self::encode_bom(&data),
        };

        let upload_failure = |details: String| CycloneError::UploadFailure {
            project_id: project_id.to_string(),
            details,
        };

        let response = self
            .client
            .put(self.endpoint("bom"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(&payload)
            .send()
            .await
            .map_err(|e| upload_failure(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let details = Self::failure_details(status, response).await;
            return Err(upload_failure(details).into());
        }

        tracing::debug!(project_id, bytes = data.len(), "BOM accepted by Dependency-Track");
        Ok(())
    }
}

#[async_trait]
impl ProjectRegistry for DependencyTrackClient {
    async fn lookup_project(&self, name: &str, version: &str) -> Result<RegistryProject> {
        let lookup_failure = |details: String| CycloneError::RegistryLookupFailure {
            name: name.to_string(),
            version: version.to_string(),
            details,
        };

        let response = self
            .client
            .get(self.lookup_url(name, version))
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .await
            .map_err(|e| lookup_failure(e.to_string()))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(CycloneError::RegistryNotFound {
                name: name.to_string(),
                version: version.to_string(),
            }
            .into());
        }
        if !status.is_success() {
            let details = Self::failure_details(status, response).await;
            return Err(lookup_failure(details).into());
        }

        let project = response
            .json::<RegistryProject>()
            .await
            .map_err(|e| lookup_failure(format!("invalid response body: {}", e)))?;
        Ok(project)
    }

    async fn create_project(&self, project: &RegistryProject) -> Result<()> {
        let response = self
            .client
            .put(self.endpoint("project"))
            .header(API_KEY_HEADER, &self.api_key)
            .json(project)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let details = Self::failure_details(status, response).await;
            anyhow::bail!(
                "Failed to create project {}@{}: {}",
                project.name,
                project.version,
                details
            );
        }
        Ok(())
    }
}
