use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

/// Where an application's deployed version is pinned for one environment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VersionIdentifier {
    /// Environment tag (dev / staging / prod / ...)
    pub environment: String,
    /// File path relative to the GitOps repository root
    #[serde(rename = "filepath")]
    pub file_path: String,
    /// Structured query path into the file, e.g. `.image.tag`
    #[serde(rename = "yamlPath")]
    pub query_path: String,
}

impl VersionIdentifier {
    pub fn new(
        environment: impl Into<String>,
        file_path: impl Into<String>,
        query_path: impl Into<String>,
    ) -> Self {
        Self {
            environment: environment.into(),
            file_path: file_path.into(),
            query_path: query_path.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitOpsApplication {
    #[serde(rename = "applicationName")]
    pub name: String,
    #[serde(default)]
    pub version_identifiers: Vec<VersionIdentifier>,
}

/// A GitOps repository and the applications whose versions it declares
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitOpsRepoDescriptor {
    pub url: String,
    #[serde(default)]
    pub applications: Vec<GitOpsApplication>,
}

/// A repository checked out on local disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClonedRepo {
    pub url: String,
    pub path: PathBuf,
    /// Commit id checked out at clone time, when the cloner could resolve it
    pub revision: Option<String>,
}

impl ClonedRepo {
    pub fn new(url: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            url: url.into(),
            path: path.into(),
            revision: None,
        }
    }

    pub fn with_revision(mut self, revision: impl Into<String>) -> Self {
        self.revision = Some(revision.into());
        self
    }

    pub fn current_revision(&self) -> Option<&str> {
        self.revision.as_deref()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AppStateKey {
    pub app_name: String,
    pub environment: String,
}

impl AppStateKey {
    pub fn new(app_name: impl Into<String>, environment: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            environment: environment.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub app_name: String,
    pub environment: String,
    pub current_version: String,
    /// Reserved for drift remediation; always false after extraction
    pub handled: bool,
}

#[derive(Debug, Clone)]
pub struct GitOpsRepoState {
    pub repo: ClonedRepo,
    pub app_states: HashMap<AppStateKey, AppState>,
}

impl GitOpsRepoState {
    /// App states ordered by (application, environment)
    pub fn sorted_app_states(&self) -> Vec<&AppState> {
        let mut keys: Vec<&AppStateKey> = self.app_states.keys().collect();
        keys.sort();
        keys.into_iter()
            .filter_map(|key| self.app_states.get(key))
            .collect()
    }
}

/// Reconciliation state for one GitOps sync run, keyed by repository URL
#[derive(Debug, Clone, Default)]
pub struct SyncState {
    pub repos: HashMap<String, GitOpsRepoState>,
}

impl SyncState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }

    pub fn len(&self) -> usize {
        self.repos.len()
    }

    pub fn repo(&self, url: &str) -> Option<&GitOpsRepoState> {
        self.repos.get(url)
    }
}
