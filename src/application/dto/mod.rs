/// Data Transfer Objects for application layer
///
/// Run reports returned by the use cases and rendered by the console adapter.
mod run_report;

pub use run_report::{
    PipelineReport, ProjectSyncReport, SkippedEntry, UnitFailure, UploadFailure, UploadReport,
};
