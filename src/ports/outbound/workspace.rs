use crate::reconciliation::domain::{ClonedRepo, SbomArtifact};
use crate::shared::Result;
use std::path::PathBuf;

/// Workspace port for the local working folder
///
/// The workspace holds cloned repositories and, in persist mode, the
/// generated SBOM files.
pub trait Workspace: Send + Sync {
    /// Removes and recreates all working folders
    fn clear(&self) -> Result<()>;

    /// Returns an empty folder to clone `url` into
    ///
    /// Any previous content of the folder is removed.
    fn prepare_repo_folder(&self, url: &str) -> Result<PathBuf>;

    /// Stores an SBOM, consuming it
    ///
    /// # Returns
    /// Path of the written file
    fn save_sbom(&self, artifact: SbomArtifact) -> Result<PathBuf>;

    /// Reads a file from a cloned repository
    ///
    /// # Errors
    /// Returns `FileReadError` if `relative_path` is absolute, escapes the
    /// clone, or cannot be read.
    fn read_file_from_repo(&self, repo: &ClonedRepo, relative_path: &str) -> Result<Vec<u8>>;
}
