//! central-cyclone - Central SBOM automation for a fleet of repositories
//!
//! This library clones configured repositories, generates CycloneDX SBOMs
//! with `cdxgen`, routes them to local storage or Dependency-Track, and
//! reconciles Dependency-Track projects and GitOps deployment versions
//! against the configuration. It follows hexagonal architecture principles.
//!
//! # Architecture
//!
//! The library is organized into the following layers:
//!
//! - **Reconciliation core** (`reconciliation`): Domain model, repository identity,
//!   artifact naming and structured value extraction
//! - **Application Layer** (`application`): Use cases and run reports
//! - **Ports** (`ports`): Interface definitions for infrastructure
//! - **Adapters** (`adapters`): git, cdxgen, Dependency-Track, filesystem, console
//! - **Shared** (`shared`): Error types, logging and path security
//!
//! # Example
//!
//! ```no_run
//! use central_cyclone::prelude::*;
//!
//! # async fn run() -> Result<()> {
//! let workspace = LocalWorkspace::new(LocalWorkspace::default_root()?);
//! let use_case = AnalyzeRepositoriesUseCase::new(
//!     GitCliCloner::new(workspace.clone()),
//!     CdxgenGenerator::default(),
//!     workspace,
//!     None::<DependencyTrackClient>,
//! );
//!
//! let repos = vec![RepositoryDescriptor::new(
//!     "https://github.com/org/repo.git",
//!     vec![BuildTarget::new("go", "6f8e9c1a-0000-0000-0000-000000000000")],
//! )];
//! let report = use_case.execute(&repos).await?;
//! println!("{} SBOM(s) written", report.artifacts_routed);
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod cli;
pub mod config;
pub mod ports;
pub mod reconciliation;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrSummaryPresenter;
    pub use crate::adapters::outbound::filesystem::{LocalSbomDirectory, LocalWorkspace};
    pub use crate::adapters::outbound::generator::CdxgenGenerator;
    pub use crate::adapters::outbound::git::GitCliCloner;
    pub use crate::adapters::outbound::network::DependencyTrackClient;
    pub use crate::application::dto::{
        PipelineReport, ProjectSyncReport, SkippedEntry, UnitFailure, UploadReport,
    };
    pub use crate::application::use_cases::{
        AnalyzeRepositoriesUseCase, GitOpsSyncUseCase, RoutingMode, SyncProjectsUseCase,
        UploadSbomsUseCase,
    };
    pub use crate::ports::outbound::{
        ProjectRegistry, RepositoryCloner, SbomEntry, SbomGenerator, SbomSource, SbomUploader,
        SummaryPresenter, ValueExtractor, Workspace,
    };
    pub use crate::reconciliation::domain::{
        AppState, AppStateKey, Application, BuildTarget, ClonedRepo, FolderName,
        GitOpsApplication, GitOpsRepoDescriptor, GitOpsRepoState, LogicalProject,
        RegistryProject, RepositoryDescriptor, SbomArtifact, SyncState, VersionIdentifier,
    };
    pub use crate::reconciliation::services::{ArtifactName, RepoUrlMapper, YamlPathExtractor};
    pub use crate::shared::error::{CycloneError, ExitCode};
    pub use crate::shared::Result;
}
