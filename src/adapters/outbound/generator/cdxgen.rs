use crate::ports::outbound::SbomGenerator;
use crate::reconciliation::domain::BuildTarget;
use crate::shared::error::CycloneError;
use crate::shared::security::resolve_inside;
use crate::shared::Result;
use async_trait::async_trait;
use std::fs;
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Default executable name, resolved through `PATH`
pub const DEFAULT_CDXGEN_BIN: &str = "cdxgen";

/// CdxgenGenerator adapter invoking the `cdxgen` CLI
///
/// Each call writes into its own temporary file, which is removed once the
/// bytes have been read back.
pub struct CdxgenGenerator {
    bin: PathBuf,
}

impl CdxgenGenerator {
    pub fn new(bin: impl Into<PathBuf>) -> Self {
        Self { bin: bin.into() }
    }

    fn project_dir(repo_path: &Path, target: &BuildTarget) -> Result<PathBuf> {
        match target.sub_directory.as_deref() {
            Some(sub_directory) if !sub_directory.trim().is_empty() => {
                resolve_inside(repo_path, sub_directory)
            }
            _ => Ok(repo_path.to_path_buf()),
        }
    }
}

impl Default for CdxgenGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CDXGEN_BIN)
    }
}

#[async_trait]
impl SbomGenerator for CdxgenGenerator {
    async fn generate(&self, repo_path: &Path, target: &BuildTarget) -> Result<Vec<u8>> {
        let failure = |details: String| -> anyhow::Error {
            CycloneError::GenerationFailure {
                target: target.target_type.clone(),
                path: repo_path.to_path_buf(),
                details,
            }
            .into()
        };

        let project_dir = Self::project_dir(repo_path, target).map_err(|e| failure(e.to_string()))?;
        let output_file = tempfile::Builder::new()
            .prefix("central-cyclone-")
            .suffix(".json")
            .tempfile()
            .map_err(|e| failure(format!("failed to create output file: {}", e)))?;

        tracing::info!(
            target = %target.target_type,
            path = %project_dir.display(),
            "Generating SBOM"
        );

        let output = Command::new(&self.bin)
            .arg("-t")
            .arg(&target.target_type)
            .arg("-o")
            .arg(output_file.path())
            .arg(&project_dir)
            .output()
            .await
            .map_err(|e| failure(format!("failed to run {}: {}", self.bin.display(), e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(failure(format!(
                "{} exited with {}: {}",
                self.bin.display(),
                output.status,
                stderr.trim()
            )));
        }

        let data = fs::read(output_file.path())
            .map_err(|e| failure(format!("failed to read generated SBOM: {}", e)))?;
        if data.is_empty() {
            return Err(failure("generator produced an empty SBOM".to_string()));
        }
        Ok(data)
    }
}
