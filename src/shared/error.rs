use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the CLI application.
///
/// These codes allow CI systems to distinguish a clean run from a run where
/// individual repositories, targets or projects failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - every unit of work completed
    Success = 0,
    /// The batch finished but at least one unit failed or was skipped
    PartialFailure = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (config, workspace, GitOps init, credentials, ...)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::PartialFailure => write!(f, "Partial Failure (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Application-specific errors for SBOM automation and reconciliation.
///
/// Callers receive these wrapped in `anyhow::Error`; code that must branch on
/// a specific failure (e.g. registry "not found") uses `downcast_ref`.
#[derive(Debug, Error)]
pub enum CycloneError {
    #[error("Invalid repository URL: {url}\nDetails: {details}\n\n💡 Hint: Use a full https URL such as https://github.com/org/repo.git")]
    InvalidUrl { url: String, details: String },

    #[error("Unsupported git host '{host}' for URL: {url}\n\n💡 Hint: The URL path needs at least an organization and a repository segment")]
    UnsupportedHost { host: String, url: String },

    #[error("Invalid SBOM filename format: {filename}\n\n💡 Hint: SBOM files must be named <folder>_sbom_<type>.json")]
    InvalidFilenameFormat { filename: String },

    #[error("Failed to clone repository: {url}\nDetails: {details}")]
    CloneFailure { url: String, details: String },

    #[error("Failed to generate SBOM for target '{target}' in {path}\nDetails: {details}")]
    GenerationFailure {
        target: String,
        path: PathBuf,
        details: String,
    },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists inside the cloned repository")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to evaluate query '{query}'\nDetails: {details}")]
    QueryEvaluationError { query: String, details: String },

    #[error("Failed to upload SBOM for project {project_id}\nDetails: {details}")]
    UploadFailure { project_id: String, details: String },

    #[error("Project lookup failed for {name}@{version}\nDetails: {details}")]
    RegistryLookupFailure {
        name: String,
        version: String,
        details: String,
    },

    #[error("Project {name}@{version} not found in Dependency-Track")]
    RegistryNotFound { name: String, version: String },

    #[error("Invalid configuration: {message}")]
    ConfigError { message: String },

    #[error("Environment variable {variable} is not set\n\n💡 Hint: {hint}")]
    MissingCredential { variable: String, hint: String },
}

impl CycloneError {
    /// Returns true when an `anyhow::Error` carries a registry "not found" signal.
    pub fn is_registry_not_found(err: &anyhow::Error) -> bool {
        matches!(
            err.downcast_ref::<CycloneError>(),
            Some(CycloneError::RegistryNotFound { .. })
        )
    }
}
