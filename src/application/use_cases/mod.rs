/// Use cases - Application business logic
///
/// Each use case orchestrates one command through the outbound ports.
mod analyze_repositories;
mod sync_gitops;
mod sync_projects;
mod upload_sboms;

pub use analyze_repositories::{AnalyzeRepositoriesUseCase, RoutingMode};
pub use sync_gitops::GitOpsSyncUseCase;
pub use sync_projects::SyncProjectsUseCase;
pub use upload_sboms::UploadSbomsUseCase;
