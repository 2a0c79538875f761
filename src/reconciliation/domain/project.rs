use serde::{Deserialize, Serialize};

/// A declared project that must exist in Dependency-Track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LogicalProject {
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub is_latest: bool,
    /// Known Dependency-Track UUID, informational only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<String>,
}

impl LogicalProject {
    pub fn new(name: impl Into<String>, version: impl Into<String>, is_latest: bool) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            is_latest,
            project_id: None,
        }
    }
}

/// Grouping used by the configuration file: one application, many project versions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub name: String,
    #[serde(default)]
    pub projects: Vec<LogicalProject>,
}

/// Project record as exchanged with the Dependency-Track project API
///
/// A lookup can come back with an empty `name`, which the reconciler treats
/// as "no real match".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistryProject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub is_latest: bool,
}

impl RegistryProject {
    /// The record to create for a declared project: active, with its latest flag
    pub fn from_declared(project: &LogicalProject) -> Self {
        Self {
            uuid: None,
            name: project.name.clone(),
            version: project.version.clone(),
            active: true,
            is_latest: project.is_latest,
        }
    }
}
