use crate::application::dto::{SkippedEntry, UploadFailure, UploadReport};
use crate::ports::outbound::{SbomEntry, SbomSource, SbomUploader};
use crate::reconciliation::domain::{FolderName, RepositoryDescriptor};
use crate::reconciliation::services::{ArtifactName, RepoUrlMapper};
use crate::shared::Result;
use std::collections::HashMap;

/// UploadSbomsUseCase - Uploads SBOM files found on disk
///
/// Each filename is decoded back to (folder name, target type) and matched
/// against the configured repositories to find the project id. Files that
/// cannot be matched are skipped; read and upload failures are recorded and
/// do not stop the run.
pub struct UploadSbomsUseCase<S, U> {
    source: S,
    uploader: U,
}

impl<S, U> UploadSbomsUseCase<S, U>
where
    S: SbomSource,
    U: SbomUploader,
{
    pub fn new(source: S, uploader: U) -> Self {
        Self { source, uploader }
    }

    /// # Errors
    /// Returns an error only if the SBOM directory cannot be listed.
    pub async fn execute(&self, repos: &[RepositoryDescriptor]) -> Result<UploadReport> {
        let mut report = UploadReport::default();
        let repos_by_folder = Self::index_repositories(repos, &mut report);

        let entries = self.source.list_sbom_files()?;
        tracing::info!(files = entries.len(), "Uploading SBOM files from disk");

        for entry in entries {
            self.process_entry(&entry, &repos_by_folder, &mut report)
                .await;
        }

        tracing::info!(
            uploaded = report.uploaded,
            skipped = report.skipped.len(),
            failed = report.failures.len(),
            "SBOM upload finished"
        );
        Ok(report)
    }

    fn index_repositories<'a>(
        repos: &'a [RepositoryDescriptor],
        report: &mut UploadReport,
    ) -> HashMap<FolderName, &'a RepositoryDescriptor> {
        let mut index = HashMap::new();
        for repo in repos {
            match RepoUrlMapper::folder_name(&repo.url) {
                // First declaration wins
                Ok(folder_name) => {
                    index.entry(folder_name).or_insert(repo);
                }
                Err(e) => {
                    tracing::warn!(repo = %repo.url, error = %e, "Skipping unmappable repository");
                    report.skipped.push(SkippedEntry {
                        name: repo.url.clone(),
                        reason: "repository URL cannot be mapped to a folder name".to_string(),
                    });
                }
            }
        }
        index
    }

    async fn process_entry(
        &self,
        entry: &SbomEntry,
        repos_by_folder: &HashMap<FolderName, &RepositoryDescriptor>,
        report: &mut UploadReport,
    ) {
        let file_name = entry.file_name();
        let skip = |report: &mut UploadReport, reason: String| {
            tracing::warn!(file = %file_name, %reason, "Skipping SBOM file");
            report.skipped.push(SkippedEntry {
                name: file_name.clone(),
                reason,
            });
        };

        if !entry.is_file {
            skip(report, "not a regular file".to_string());
            return;
        }

        let artifact = match ArtifactName::decode(&file_name) {
            Ok(artifact) => artifact,
            Err(_) => {
                skip(report, "filename does not match <folder>_sbom_<type>.json".to_string());
                return;
            }
        };

        let Some(repo) = repos_by_folder.get(&artifact.folder_name) else {
            skip(
                report,
                format!("no configured repository for folder {}", artifact.folder_name),
            );
            return;
        };

        let Some(target) = repo.target_by_type(&artifact.target_type) else {
            skip(
                report,
                format!(
                    "repository {} has no target of type {}",
                    repo.url, artifact.target_type
                ),
            );
            return;
        };

        let result = match self.source.read_sbom(&entry.path) {
            Ok(data) => self.uploader.upload_sbom(&target.project_id, data).await,
            Err(e) => Err(e),
        };

        match result {
            Ok(()) => {
                tracing::info!(
                    file = %file_name,
                    project_id = %target.project_id,
                    "SBOM uploaded"
                );
                report.uploaded += 1;
            }
            Err(e) => {
                tracing::error!(file = %file_name, error = %e, "SBOM upload failed");
                report.failures.push(UploadFailure {
                    file: file_name.clone(),
                    message: e.to_string().lines().next().unwrap_or_default().to_string(),
                });
            }
        }
    }
}
