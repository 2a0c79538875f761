use crate::reconciliation::domain::FolderName;
use crate::shared::error::CycloneError;
use crate::shared::Result;

const SEPARATOR: &str = "_sbom_";
const EXTENSION: &str = ".json";

/// ArtifactName - Bidirectional codec between (folder name, target type) and
/// an SBOM filename
///
/// Encoded form: `{folder_name}_sbom_{target_type}.json`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactName {
    pub folder_name: FolderName,
    pub target_type: String,
}

impl ArtifactName {
    pub fn encode(folder_name: &FolderName, target_type: &str) -> String {
        format!("{}{}{}{}", folder_name, SEPARATOR, target_type, EXTENSION)
    }

    /// Recovers folder name and target type from a filename
    ///
    /// The `.json` extension is optional. Decoding succeeds only when the
    /// separator occurs exactly once.
    pub fn decode(filename: &str) -> Result<Self> {
        let stem = filename.strip_suffix(EXTENSION).unwrap_or(filename);
        let parts: Vec<&str> = stem.split(SEPARATOR).collect();

        match parts.as_slice() {
            [folder, target_type] => Ok(Self {
                folder_name: FolderName::new(folder.to_string()),
                target_type: target_type.to_string(),
            }),
            _ => Err(CycloneError::InvalidFilenameFormat {
                filename: filename.to_string(),
            }
            .into()),
        }
    }
}
