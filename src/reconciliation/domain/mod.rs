pub mod folder_name;
pub mod gitops;
pub mod project;
pub mod repository;
pub mod sbom_artifact;

pub use folder_name::FolderName;
pub use gitops::{
    AppState, AppStateKey, ClonedRepo, GitOpsApplication, GitOpsRepoDescriptor, GitOpsRepoState,
    SyncState, VersionIdentifier,
};
pub use project::{Application, LogicalProject, RegistryProject};
pub use repository::{BuildTarget, RepositoryDescriptor};
pub use sbom_artifact::SbomArtifact;
