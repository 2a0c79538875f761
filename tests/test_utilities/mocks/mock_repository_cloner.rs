use async_trait::async_trait;
use central_cyclone::prelude::*;
use std::collections::HashMap;
use std::fs;

/// Mock RepositoryCloner
///
/// With a workspace it "clones" by writing fixture files into the folder
/// prepared for the URL. Without one it touches no disk at all.
pub struct MockRepositoryCloner {
    workspace: Option<LocalWorkspace>,
    files: HashMap<String, Vec<(String, String)>>,
    failing_urls: Vec<String>,
}

impl MockRepositoryCloner {
    pub fn new(workspace: LocalWorkspace) -> Self {
        Self {
            workspace: Some(workspace),
            files: HashMap::new(),
            failing_urls: Vec::new(),
        }
    }

    pub fn detached() -> Self {
        Self {
            workspace: None,
            files: HashMap::new(),
            failing_urls: Vec::new(),
        }
    }

    pub fn with_file(mut self, url: &str, relative_path: &str, content: &str) -> Self {
        self.files
            .entry(url.to_string())
            .or_default()
            .push((relative_path.to_string(), content.to_string()));
        self
    }

    pub fn with_failure(mut self, url: &str) -> Self {
        self.failing_urls.push(url.to_string());
        self
    }
}

#[async_trait]
impl RepositoryCloner for MockRepositoryCloner {
    async fn clone_repo(&self, url: &str) -> Result<ClonedRepo> {
        if self.failing_urls.iter().any(|u| u == url) {
            return Err(CycloneError::CloneFailure {
                url: url.to_string(),
                details: "Mock clone failure".to_string(),
            }
            .into());
        }

        let Some(workspace) = &self.workspace else {
            let folder_name = RepoUrlMapper::folder_name(url)?;
            return Ok(ClonedRepo::new(url, format!("/mock/repos/{}", folder_name))
                .with_revision("0000000000000000000000000000000000000000"));
        };

        let path = workspace.prepare_repo_folder(url)?;
        for (relative_path, content) in self.files.get(url).into_iter().flatten() {
            let file = path.join(relative_path);
            if let Some(parent) = file.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(file, content)?;
        }
        Ok(ClonedRepo::new(url, path))
    }
}
