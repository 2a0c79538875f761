use crate::application::dto::{PipelineReport, ProjectSyncReport, UploadReport};
use crate::reconciliation::domain::SyncState;

/// SummaryPresenter port for reporting run outcomes to the user
pub trait SummaryPresenter {
    fn present_pipeline(&self, report: &PipelineReport);

    fn present_upload(&self, report: &UploadReport);

    fn present_project_sync(&self, report: &ProjectSyncReport);

    fn present_gitops(&self, state: &SyncState);
}
