use crate::reconciliation::domain::RegistryProject;
use crate::shared::Result;
use async_trait::async_trait;

/// ProjectRegistry port for the tracking service's project catalogue
#[async_trait]
pub trait ProjectRegistry: Send + Sync {
    /// Looks up a project by name and version
    ///
    /// # Errors
    /// - `RegistryNotFound` when the project does not exist
    /// - `RegistryLookupFailure` for any other failure
    async fn lookup_project(&self, name: &str, version: &str) -> Result<RegistryProject>;

    /// Creates a project
    async fn create_project(&self, project: &RegistryProject) -> Result<()>;
}
