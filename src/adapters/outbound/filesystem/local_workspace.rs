use crate::ports::outbound::Workspace;
use crate::reconciliation::domain::{ClonedRepo, SbomArtifact};
use crate::reconciliation::services::{ArtifactName, RepoUrlMapper};
use crate::shared::error::CycloneError;
use crate::shared::security::{read_checked, resolve_inside};
use crate::shared::Result;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

const APP_DIR: &str = ".central-cyclone";
const WORK_DIR: &str = "workfolder";
const REPOS_DIR: &str = "repos";
const SBOMS_DIR: &str = "sboms";

/// LocalWorkspace adapter for the on-disk working folder
///
/// Layout:
/// ```text
/// <root>/
///   repos/<folder_name>/                  one clone per repository
///   sboms/<folder_name>_sbom_<type>.json  persisted SBOMs
/// ```
#[derive(Debug, Clone)]
pub struct LocalWorkspace {
    root: PathBuf,
}

impl LocalWorkspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `~/.central-cyclone/workfolder`
    pub fn default_root() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Cannot determine the home directory")?;
        Ok(home.join(APP_DIR).join(WORK_DIR))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn repos_dir(&self) -> PathBuf {
        self.root.join(REPOS_DIR)
    }

    pub fn sboms_dir(&self) -> PathBuf {
        self.root.join(SBOMS_DIR)
    }

    /// Creates the `repos/` and `sboms/` folders if missing
    pub fn ensure_layout(&self) -> Result<()> {
        for dir in [self.repos_dir(), self.sboms_dir()] {
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create directory {}", dir.display()))?;
        }
        Ok(())
    }

    fn remove_dir_if_exists(dir: &Path) -> Result<()> {
        if dir.exists() {
            fs::remove_dir_all(dir)
                .with_context(|| format!("Failed to remove directory {}", dir.display()))?;
        }
        Ok(())
    }
}

impl Workspace for LocalWorkspace {
    fn clear(&self) -> Result<()> {
        tracing::info!(root = %self.root.display(), "Clearing workspace");
        Self::remove_dir_if_exists(&self.repos_dir())?;
        Self::remove_dir_if_exists(&self.sboms_dir())?;
        self.ensure_layout()
    }

    fn prepare_repo_folder(&self, url: &str) -> Result<PathBuf> {
        let folder_name = RepoUrlMapper::folder_name(url)?;
        let path = self.repos_dir().join(folder_name.as_str());

        Self::remove_dir_if_exists(&path)?;
        fs::create_dir_all(&path)
            .with_context(|| format!("Failed to create directory {}", path.display()))?;
        Ok(path)
    }

    fn save_sbom(&self, artifact: SbomArtifact) -> Result<PathBuf> {
        let sboms_dir = self.sboms_dir();
        fs::create_dir_all(&sboms_dir)
            .with_context(|| format!("Failed to create directory {}", sboms_dir.display()))?;

        let file_name = ArtifactName::encode(artifact.folder_name(), artifact.target_type());
        let path = sboms_dir.join(file_name);
        fs::write(&path, artifact.data())
            .with_context(|| format!("Failed to write SBOM {}", path.display()))?;
        Ok(path)
    }

    fn read_file_from_repo(&self, repo: &ClonedRepo, relative_path: &str) -> Result<Vec<u8>> {
        let read_error = |details: String| CycloneError::FileReadError {
            path: repo.path.join(relative_path),
            details,
        };

        let path =
            resolve_inside(&repo.path, relative_path).map_err(|e| read_error(e.to_string()))?;
        let content = read_checked(&path, "repository file").map_err(|e| read_error(e.to_string()))?;
        Ok(content)
    }
}
