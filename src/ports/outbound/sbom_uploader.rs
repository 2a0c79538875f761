use crate::shared::Result;
use async_trait::async_trait;

/// SbomUploader port for submitting SBOMs to the tracking service
#[async_trait]
pub trait SbomUploader: Send + Sync {
    /// Uploads an SBOM document to the given project
    async fn upload_sbom(&self, project_id: &str, data: Vec<u8>) -> Result<()>;
}
