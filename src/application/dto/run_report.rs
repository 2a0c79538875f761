use crate::shared::error::ExitCode;

/// A repository or (repository, target) unit that did not complete
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnitFailure {
    pub repo: String,
    /// `None` for repository-level failures (mapping or clone)
    pub target: Option<String>,
    pub message: String,
}

impl UnitFailure {
    pub fn repository(repo: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            repo: repo.into(),
            target: None,
            message: first_line(error),
        }
    }

    pub fn target(repo: impl Into<String>, target: impl Into<String>, error: &anyhow::Error) -> Self {
        Self {
            repo: repo.into(),
            target: Some(target.into()),
            message: first_line(error),
        }
    }
}

// Error messages carry hint paragraphs; reports only keep the headline
fn first_line(error: &anyhow::Error) -> String {
    error
        .to_string()
        .lines()
        .next()
        .unwrap_or_default()
        .to_string()
}

/// PipelineReport - Aggregate outcome of an analyze run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Repositories attempted
    pub repositories: usize,
    /// Artifacts handed to storage or the uploader
    pub artifacts_routed: usize,
    pub failures: Vec<UnitFailure>,
}

impl PipelineReport {
    pub fn exit_code(&self) -> ExitCode {
        if self.failures.is_empty() {
            ExitCode::Success
        } else {
            ExitCode::PartialFailure
        }
    }
}

/// A directory entry or configured repository that was deliberately not processed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedEntry {
    /// File name, or repository URL for unmappable configuration entries
    pub name: String,
    pub reason: String,
}

/// A file whose read or upload failed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadFailure {
    pub file: String,
    pub message: String,
}

/// UploadReport - Aggregate outcome of uploading SBOM files from disk
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadReport {
    pub uploaded: usize,
    pub skipped: Vec<SkippedEntry>,
    pub failures: Vec<UploadFailure>,
}

impl UploadReport {
    pub fn exit_code(&self) -> ExitCode {
        if self.failures.is_empty() && self.skipped.is_empty() {
            ExitCode::Success
        } else {
            ExitCode::PartialFailure
        }
    }
}

/// ProjectSyncReport - Aggregate outcome of project reconciliation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProjectSyncReport {
    pub created: usize,
    pub existing: usize,
    pub failed: usize,
}

impl ProjectSyncReport {
    pub fn exit_code(&self) -> ExitCode {
        if self.failed == 0 {
            ExitCode::Success
        } else {
            ExitCode::PartialFailure
        }
    }
}
