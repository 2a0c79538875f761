use crate::ports::outbound::{SbomEntry, SbomSource};
use crate::shared::error::CycloneError;
use crate::shared::security::read_checked;
use crate::shared::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// LocalSbomDirectory adapter listing SBOM files from a local directory
pub struct LocalSbomDirectory {
    dir: PathBuf,
}

impl LocalSbomDirectory {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl SbomSource for LocalSbomDirectory {
    fn list_sbom_files(&self) -> Result<Vec<SbomEntry>> {
        let read_error = |details: String| CycloneError::FileReadError {
            path: self.dir.clone(),
            details,
        };

        let mut entries = Vec::new();
        for entry in fs::read_dir(&self.dir).map_err(|e| read_error(e.to_string()))? {
            let entry = entry.map_err(|e| read_error(e.to_string()))?;
            // file_type() does not follow symlinks
            let is_file = entry
                .file_type()
                .map(|file_type| file_type.is_file())
                .unwrap_or(false);
            entries.push(SbomEntry {
                path: entry.path(),
                is_file,
            });
        }

        entries.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
        Ok(entries)
    }

    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        read_checked(path, "SBOM file").map_err(|e| {
            CycloneError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
            .into()
        })
    }
}
