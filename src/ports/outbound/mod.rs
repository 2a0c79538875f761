/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the reconciliation core uses
/// to interact with git, the SBOM generator, Dependency-Track, the local
/// file system and the console.
pub mod project_registry;
pub mod repository_cloner;
pub mod sbom_generator;
pub mod sbom_source;
pub mod sbom_uploader;
pub mod summary_presenter;
pub mod value_extractor;
pub mod workspace;

pub use project_registry::ProjectRegistry;
pub use repository_cloner::RepositoryCloner;
pub use sbom_generator::SbomGenerator;
pub use sbom_source::{SbomEntry, SbomSource};
pub use sbom_uploader::SbomUploader;
pub use summary_presenter::SummaryPresenter;
pub use value_extractor::ValueExtractor;
pub use workspace::Workspace;
