use crate::application::dto::ProjectSyncReport;
use crate::ports::outbound::ProjectRegistry;
use crate::reconciliation::domain::{LogicalProject, RegistryProject};
use crate::shared::error::CycloneError;

/// What a registry lookup told us about a declared project
enum LookupOutcome {
    Exists,
    Missing,
    Failed,
}

/// SyncProjectsUseCase - Ensures every declared project exists in the registry
///
/// Existing projects are never modified. A lookup that reports "not found",
/// or that returns a record with an empty name, leads to a create.
pub struct SyncProjectsUseCase<R> {
    registry: R,
}

impl<R> SyncProjectsUseCase<R>
where
    R: ProjectRegistry,
{
    pub fn new(registry: R) -> Self {
        Self { registry }
    }

    pub async fn execute(&self, projects: &[LogicalProject]) -> ProjectSyncReport {
        let mut report = ProjectSyncReport::default();

        for project in projects {
            match self.lookup(project).await {
                LookupOutcome::Exists => {
                    tracing::debug!(
                        project_name = %project.name,
                        project_version = %project.version,
                        "Project already exists"
                    );
                    report.existing += 1;
                }
                LookupOutcome::Missing => {
                    if self.create(project).await {
                        report.created += 1;
                    } else {
                        report.failed += 1;
                    }
                }
                LookupOutcome::Failed => report.failed += 1,
            }
        }

        tracing::info!(
            created = report.created,
            existing = report.existing,
            failed = report.failed,
            "Project sync finished"
        );
        report
    }

    async fn lookup(&self, project: &LogicalProject) -> LookupOutcome {
        match self
            .registry
            .lookup_project(&project.name, &project.version)
            .await
        {
            Ok(found) if found.name.is_empty() => LookupOutcome::Missing,
            Ok(_) => LookupOutcome::Exists,
            Err(e) if CycloneError::is_registry_not_found(&e) => LookupOutcome::Missing,
            Err(e) => {
                tracing::warn!(
                    project_name = %project.name,
                    project_version = %project.version,
                    error = %e,
                    "Project lookup failed"
                );
                LookupOutcome::Failed
            }
        }
    }

    async fn create(&self, project: &LogicalProject) -> bool {
        let record = RegistryProject::from_declared(project);
        match self.registry.create_project(&record).await {
            Ok(()) => {
                tracing::info!(
                    project_name = %project.name,
                    project_version = %project.version,
                    is_latest = project.is_latest,
                    "Project created"
                );
                true
            }
            Err(e) => {
                tracing::error!(
                    project_name = %project.name,
                    project_version = %project.version,
                    error = %e,
                    "Project creation failed"
                );
                false
            }
        }
    }
}
