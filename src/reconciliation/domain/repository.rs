use serde::{Deserialize, Serialize};

/// One SBOM-producing unit inside a repository
///
/// `target_type` is the generator's project type tag (e.g. "go", "npm", "java")
/// and `project_id` is the Dependency-Track project UUID the SBOM belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTarget {
    #[serde(rename = "type")]
    pub target_type: String,
    pub project_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_directory: Option<String>,
}

impl BuildTarget {
    pub fn new(target_type: impl Into<String>, project_id: impl Into<String>) -> Self {
        Self {
            target_type: target_type.into(),
            project_id: project_id.into(),
            sub_directory: None,
        }
    }

    pub fn with_sub_directory(mut self, sub_directory: impl Into<String>) -> Self {
        self.sub_directory = Some(sub_directory.into());
        self
    }
}

/// A source repository plus the build targets to generate SBOMs for
///
/// Target type tags are unique per descriptor by convention only; when a tag
/// is duplicated, lookups by type resolve to the first matching target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepositoryDescriptor {
    pub url: String,
    #[serde(default)]
    pub targets: Vec<BuildTarget>,
}

impl RepositoryDescriptor {
    pub fn new(url: impl Into<String>, targets: Vec<BuildTarget>) -> Self {
        Self {
            url: url.into(),
            targets,
        }
    }

    /// Finds the first target declared with the given type tag
    pub fn target_by_type(&self, target_type: &str) -> Option<&BuildTarget> {
        self.targets.iter().find(|t| t.target_type == target_type)
    }
}
