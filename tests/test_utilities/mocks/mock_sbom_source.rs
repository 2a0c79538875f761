use central_cyclone::prelude::*;
use std::path::{Path, PathBuf};

/// Mock SbomSource listing in-memory entries
#[derive(Default)]
pub struct MockSbomSource {
    entries: Vec<(SbomEntry, Option<String>)>,
    fail_list: bool,
}

impl MockSbomSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, name: &str, content: &str) -> Self {
        self.entries.push((
            SbomEntry::file(PathBuf::from("/mock/sboms").join(name)),
            Some(content.to_string()),
        ));
        self
    }

    /// A listed file whose read fails
    pub fn with_unreadable_file(mut self, name: &str) -> Self {
        self.entries
            .push((SbomEntry::file(PathBuf::from("/mock/sboms").join(name)), None));
        self
    }

    pub fn with_directory(mut self, name: &str) -> Self {
        self.entries
            .push((SbomEntry::other(PathBuf::from("/mock/sboms").join(name)), None));
        self
    }

    pub fn with_list_failure() -> Self {
        Self {
            fail_list: true,
            ..Self::default()
        }
    }
}

impl SbomSource for MockSbomSource {
    fn list_sbom_files(&self) -> Result<Vec<SbomEntry>> {
        if self.fail_list {
            anyhow::bail!("Mock directory listing failure");
        }
        Ok(self.entries.iter().map(|(entry, _)| entry.clone()).collect())
    }

    fn read_sbom(&self, path: &Path) -> Result<Vec<u8>> {
        self.entries
            .iter()
            .find(|(entry, _)| entry.path == path)
            .and_then(|(_, content)| content.clone())
            .map(String::into_bytes)
            .ok_or_else(|| anyhow::anyhow!("Mock read failure: {}", path.display()))
    }
}
