use crate::shared::Result;
use std::path::{Path, PathBuf};

/// One entry of an SBOM directory listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomEntry {
    pub path: PathBuf,
    /// False for directories, symlinks and other special files
    pub is_file: bool,
}

impl SbomEntry {
    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_file: true,
        }
    }

    pub fn other(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_file: false,
        }
    }

    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// SbomSource port for enumerating SBOM files already on disk
pub trait SbomSource {
    /// Lists directory entries, sorted by file name
    ///
    /// # Errors
    /// Returns an error if the directory cannot be read. This is the only
    /// failure that aborts an upload run.
    fn list_sbom_files(&self) -> Result<Vec<SbomEntry>>;

    /// Reads one SBOM file, rejecting symlinks and oversized files
    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>>;
}
