use crate::reconciliation::domain::BuildTarget;
use crate::shared::Result;
use async_trait::async_trait;
use std::path::Path;

/// SbomGenerator port for producing an SBOM document from a checkout
#[async_trait]
pub trait SbomGenerator: Send + Sync {
    /// Generates the SBOM for one build target of a cloned repository
    ///
    /// # Arguments
    /// * `repo_path` - Root of the cloned repository
    /// * `target` - Build target; its optional sub-directory is resolved
    ///   relative to `repo_path`
    ///
    /// # Returns
    /// The raw SBOM bytes, never empty
    async fn generate(&self, repo_path: &Path, target: &BuildTarget) -> Result<Vec<u8>>;
}
