use crate::reconciliation::domain::ClonedRepo;
use crate::shared::Result;
use async_trait::async_trait;

/// RepositoryCloner port for checking out source repositories
///
/// Implementations place the clone in a fresh folder of the workspace and
/// must leave nothing behind when cloning fails.
#[async_trait]
pub trait RepositoryCloner: Send + Sync {
    /// Clones the repository at `url`
    ///
    /// # Errors
    /// Returns `CloneFailure` if the repository cannot be checked out.
    async fn clone_repo(&self, url: &str) -> Result<ClonedRepo>;
}
