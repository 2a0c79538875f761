//! Configuration file support for central-cyclone.
//!
//! Settings are read from a JSON file (`./config.json` by default) or, for
//! `.yml` / `.yaml` files, from YAML. Credentials are never part of the file;
//! they come from the environment.

use anyhow::Context;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::path::Path;

use crate::reconciliation::domain::{
    Application, GitOpsRepoDescriptor, LogicalProject, RepositoryDescriptor,
};
use crate::reconciliation::services::RepoUrlMapper;
use crate::shared::error::CycloneError;
use crate::shared::Result;

pub const DEFAULT_CONFIG_PATH: &str = "./config.json";

/// Dependency-Track connection settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct DependencyTrackSettings {
    #[serde(default)]
    pub url: String,
}

/// Top-level configuration file schema.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    #[serde(default)]
    pub repositories: Vec<RepositoryDescriptor>,
    #[serde(default)]
    pub dependency_track: DependencyTrackSettings,
    #[serde(default)]
    pub applications: Vec<Application>,
    #[serde(default)]
    pub git_ops_repositories: Vec<GitOpsRepoDescriptor>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_json::Value>,
}

impl Settings {
    /// All declared projects across applications, in declaration order
    pub fn logical_projects(&self) -> Vec<LogicalProject> {
        self.applications
            .iter()
            .flat_map(|app| app.projects.iter().cloned())
            .collect()
    }

    /// Dependency-Track base URL, required by commands that talk to it
    pub fn dependency_track_url(&self) -> Result<&str> {
        let url = self.dependency_track.url.trim();
        if url.is_empty() {
            return Err(config_error(
                "dependencyTrack.url is required for this command",
            ));
        }
        Ok(url)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yml") || ext.eq_ignore_ascii_case("yaml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

/// Load settings from a path. Returns an error if the file is missing,
/// malformed, or fails validation.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable, or pass --config.",
            path.display()
        )
    })?;

    let settings = parse_settings(&content, ConfigFormat::for_path(path)).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid JSON (or YAML for .yml/.yaml files).",
            path.display()
        )
    })?;

    validate_settings(&settings)?;
    warn_unknown_fields(&settings);

    tracing::debug!(
        path = %path.display(),
        repositories = settings.repositories.len(),
        applications = settings.applications.len(),
        gitops_repositories = settings.git_ops_repositories.len(),
        "Configuration loaded"
    );
    Ok(settings)
}

fn parse_settings(content: &str, format: ConfigFormat) -> Result<Settings> {
    let settings = match format {
        ConfigFormat::Json => serde_json::from_str(content)?,
        ConfigFormat::Yaml => serde_yaml_ng::from_str(content)?,
    };
    Ok(settings)
}

fn config_error(message: impl Into<String>) -> anyhow::Error {
    CycloneError::ConfigError {
        message: message.into(),
    }
    .into()
}

/// Validate the loaded configuration.
fn validate_settings(settings: &Settings) -> Result<()> {
    let mut folder_owners: HashMap<String, &str> = HashMap::new();

    for (i, repo) in settings.repositories.iter().enumerate() {
        if repo.url.trim().is_empty() {
            return Err(config_error(format!(
                "repositories[{}].url must not be empty",
                i
            )));
        }

        let mut seen_types = HashSet::new();
        for (j, target) in repo.targets.iter().enumerate() {
            if target.target_type.trim().is_empty() {
                return Err(config_error(format!(
                    "repositories[{}].targets[{}].type must not be empty",
                    i, j
                )));
            }
            if !seen_types.insert(target.target_type.as_str()) {
                tracing::warn!(
                    repo = %repo.url,
                    target = %target.target_type,
                    "Duplicate target type; only the first entry is used when uploading from disk"
                );
            }
        }

        // Unmappable URLs are reported per unit at run time
        if let Ok(folder_name) = RepoUrlMapper::folder_name(&repo.url) {
            if let Some(previous) = folder_owners.insert(folder_name.clone().into_inner(), &repo.url)
            {
                return Err(config_error(format!(
                    "repositories {} and {} both map to folder name '{}'",
                    previous, repo.url, folder_name
                )));
            }
        }
    }

    for (i, app) in settings.applications.iter().enumerate() {
        for (j, project) in app.projects.iter().enumerate() {
            if project.name.trim().is_empty() || project.version.trim().is_empty() {
                return Err(config_error(format!(
                    "applications[{}].projects[{}] needs a non-empty name and version",
                    i, j
                )));
            }
        }
    }

    for (i, repo) in settings.git_ops_repositories.iter().enumerate() {
        if repo.url.trim().is_empty() {
            return Err(config_error(format!(
                "gitOpsRepositories[{}].url must not be empty",
                i
            )));
        }
        for app in &repo.applications {
            for identifier in &app.version_identifiers {
                if identifier.environment.trim().is_empty()
                    || identifier.file_path.trim().is_empty()
                    || identifier.query_path.trim().is_empty()
                {
                    return Err(config_error(format!(
                        "gitOpsRepositories[{}] application '{}' has a version identifier with an empty environment, filepath or yamlPath",
                        i, app.name
                    )));
                }
            }
        }
    }

    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(settings: &Settings) {
    for key in settings.unknown_fields.keys() {
        tracing::warn!(field = %key, "Unknown config field will be ignored");
    }
}
