/// Mock implementations for testing
mod mock_project_registry;
mod mock_repository_cloner;
mod mock_sbom_generator;
mod mock_sbom_source;
mod mock_sbom_uploader;
mod mock_workspace;

pub use mock_project_registry::MockProjectRegistry;
pub use mock_repository_cloner::MockRepositoryCloner;
pub use mock_sbom_generator::MockSbomGenerator;
pub use mock_sbom_source::MockSbomSource;
pub use mock_sbom_uploader::MockSbomUploader;
pub use mock_workspace::MockWorkspace;
