use super::FolderName;

/// A freshly generated SBOM together with its routing information
///
/// Created by the generation step and moved, by value, into exactly one sink:
/// local storage or the uploader. Nothing keeps a copy afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SbomArtifact {
    folder_name: FolderName,
    target_type: String,
    project_id: String,
    data: Vec<u8>,
}

impl SbomArtifact {
    pub fn new(
        folder_name: FolderName,
        target_type: String,
        project_id: String,
        data: Vec<u8>,
    ) -> Self {
        Self {
            folder_name,
            target_type,
            project_id,
            data,
        }
    }

    pub fn folder_name(&self) -> &FolderName {
        &self.folder_name
    }

    pub fn target_type(&self) -> &str {
        &self.target_type
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the artifact, handing out the project id and the raw bytes
    pub fn into_upload_parts(self) -> (String, Vec<u8>) {
        (self.project_id, self.data)
    }
}
