use crate::application::dto::{PipelineReport, UnitFailure};
use crate::ports::outbound::{RepositoryCloner, SbomGenerator, SbomUploader, Workspace};
use crate::reconciliation::domain::{
    BuildTarget, ClonedRepo, FolderName, RepositoryDescriptor, SbomArtifact,
};
use crate::reconciliation::services::RepoUrlMapper;
use crate::shared::Result;
use std::path::PathBuf;

/// Where generated artifacts go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutingMode {
    /// Saved into the workspace `sboms/` folder
    Persist,
    /// Sent straight to the tracking service
    Upload,
}

/// Outcome of routing one artifact
enum Routed {
    Saved(PathBuf),
    Uploaded,
}

/// AnalyzeRepositoriesUseCase - Clone, generate and route SBOMs for a fleet
///
/// Runs sequentially over repositories and their targets. A failing unit
/// (repository or repository/target pair) is recorded in the report and the
/// run moves on; only a failure to clear the workspace in persist mode aborts.
///
/// # Type Parameters
/// * `C` - RepositoryCloner implementation
/// * `G` - SbomGenerator implementation
/// * `W` - Workspace implementation
/// * `U` - SbomUploader implementation (optional, selects upload mode)
pub struct AnalyzeRepositoriesUseCase<C, G, W, U> {
    cloner: C,
    generator: G,
    workspace: W,
    uploader: Option<U>,
}

impl<C, G, W, U> AnalyzeRepositoriesUseCase<C, G, W, U>
where
    C: RepositoryCloner,
    G: SbomGenerator,
    W: Workspace,
    U: SbomUploader,
{
    pub fn new(cloner: C, generator: G, workspace: W, uploader: Option<U>) -> Self {
        Self {
            cloner,
            generator,
            workspace,
            uploader,
        }
    }

    pub fn routing_mode(&self) -> RoutingMode {
        match self.uploader {
            Some(_) => RoutingMode::Upload,
            None => RoutingMode::Persist,
        }
    }

    /// Executes the pipeline over all configured repositories
    ///
    /// # Errors
    /// Returns an error only if the workspace cannot be cleared in persist mode.
    pub async fn execute(&self, repos: &[RepositoryDescriptor]) -> Result<PipelineReport> {
        let mode = self.routing_mode();
        tracing::info!(repositories = repos.len(), ?mode, "Starting SBOM analysis");

        if mode == RoutingMode::Persist {
            self.workspace.clear()?;
        }

        let mut report = PipelineReport::default();
        for repo in repos {
            report.repositories += 1;
            self.process_repository(repo, &mut report).await;
        }

        tracing::info!(
            repositories = report.repositories,
            artifacts = report.artifacts_routed,
            failures = report.failures.len(),
            "SBOM analysis finished"
        );
        Ok(report)
    }

    async fn process_repository(&self, repo: &RepositoryDescriptor, report: &mut PipelineReport) {
        let folder_name = match RepoUrlMapper::folder_name(&repo.url) {
            Ok(name) => name,
            Err(e) => {
                tracing::error!(repo = %repo.url, error = %e, "Cannot derive folder name");
                report.failures.push(UnitFailure::repository(&repo.url, &e));
                return;
            }
        };

        let cloned = match self.cloner.clone_repo(&repo.url).await {
            Ok(cloned) => cloned,
            Err(e) => {
                tracing::error!(repo = %repo.url, error = %e, "Clone failed");
                report.failures.push(UnitFailure::repository(&repo.url, &e));
                return;
            }
        };
        tracing::info!(repo = %repo.url, path = %cloned.path.display(), "Repository cloned");

        for target in &repo.targets {
            match self.process_target(&cloned, &folder_name, target).await {
                Ok(Routed::Saved(path)) => {
                    tracing::info!(
                        repo = %repo.url,
                        target = %target.target_type,
                        path = %path.display(),
                        "SBOM saved"
                    );
                    report.artifacts_routed += 1;
                }
                Ok(Routed::Uploaded) => {
                    tracing::info!(
                        repo = %repo.url,
                        target = %target.target_type,
                        project_id = %target.project_id,
                        "SBOM uploaded"
                    );
                    report.artifacts_routed += 1;
                }
                Err(e) => {
                    tracing::error!(
                        repo = %repo.url,
                        target = %target.target_type,
                        error = %e,
                        "Target failed"
                    );
                    report
                        .failures
                        .push(UnitFailure::target(&repo.url, &target.target_type, &e));
                }
            }
        }
    }

    async fn process_target(
        &self,
        cloned: &ClonedRepo,
        folder_name: &FolderName,
        target: &BuildTarget,
    ) -> Result<Routed> {
        let data = self.generator.generate(&cloned.path, target).await?;
        let artifact = SbomArtifact::new(
            folder_name.clone(),
            target.target_type.clone(),
            target.project_id.clone(),
            data,
        );
        self.route(artifact).await
    }

    async fn route(&self, artifact: SbomArtifact) -> Result<Routed> {
        match &self.uploader {
            Some(uploader) => {
                let (project_id, data) = artifact.into_upload_parts();
                uploader.upload_sbom(&project_id, data).await?;
                Ok(Routed::Uploaded)
            }
            None => self.workspace.save_sbom(artifact).map(Routed::Saved),
        }
    }
}
