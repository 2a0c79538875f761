use central_cyclone::prelude::*;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Mock Workspace keeping saved SBOMs and repository files in memory
#[derive(Clone, Default)]
pub struct MockWorkspace {
    files: HashMap<String, String>,
    saved: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    clear_calls: Arc<Mutex<usize>>,
    fail_clear: bool,
}

impl MockWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Serves `content` for `relative_path` in every cloned repository
    pub fn with_file(mut self, relative_path: &str, content: &str) -> Self {
        self.files
            .insert(relative_path.to_string(), content.to_string());
        self
    }

    pub fn with_clear_failure() -> Self {
        Self {
            fail_clear: true,
            ..Self::default()
        }
    }

    pub fn saved_names(&self) -> Vec<String> {
        self.saved
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn clear_calls(&self) -> usize {
        *self.clear_calls.lock().unwrap()
    }
}

impl Workspace for MockWorkspace {
    fn clear(&self) -> Result<()> {
        *self.clear_calls.lock().unwrap() += 1;
        if self.fail_clear {
            anyhow::bail!("Mock clear failure");
        }
        self.saved.lock().unwrap().clear();
        Ok(())
    }

    fn prepare_repo_folder(&self, url: &str) -> Result<PathBuf> {
        let folder_name = RepoUrlMapper::folder_name(url)?;
        Ok(PathBuf::from("/mock/repos").join(folder_name.as_str()))
    }

    fn save_sbom(&self, artifact: SbomArtifact) -> Result<PathBuf> {
        let name = ArtifactName::encode(artifact.folder_name(), artifact.target_type());
        let path = PathBuf::from("/mock/sboms").join(&name);
        self.saved
            .lock()
            .unwrap()
            .push((name, artifact.data().to_vec()));
        Ok(path)
    }

    fn read_file_from_repo(&self, repo: &ClonedRepo, relative_path: &str) -> Result<Vec<u8>> {
        self.files
            .get(relative_path)
            .map(|content| content.clone().into_bytes())
            .ok_or_else(|| {
                CycloneError::FileReadError {
                    path: repo.path.join(relative_path),
                    details: "Mock file not found".to_string(),
                }
                .into()
            })
    }
}
