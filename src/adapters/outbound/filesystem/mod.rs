/// Filesystem adapters for the workspace and SBOM directories
mod local_workspace;
mod sbom_directory;

pub use local_workspace::LocalWorkspace;
pub use sbom_directory::LocalSbomDirectory;
