use crate::shared::Result;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Maximum file size for security (100 MB)
/// Applies to GitOps version files and SBOM files read back from disk
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Joins a configured relative path onto a root directory
///
/// # Security
/// Paths come from the configuration file and from repository content, so
/// they must not escape the directory they are resolved against.
///
/// # Errors
/// Returns an error if the relative path is empty, absolute, or contains `..`
pub fn resolve_inside(root: &Path, relative: &str) -> Result<PathBuf> {
    if relative.trim().is_empty() {
        anyhow::bail!("path must not be empty");
    }

    let relative_path = Path::new(relative);
    for component in relative_path.components() {
        match component {
            Component::Normal(_) | Component::CurDir => {}
            Component::ParentDir => {
                anyhow::bail!(
                    "Security: '{}' contains '..' which is not allowed",
                    relative
                );
            }
            Component::RootDir | Component::Prefix(_) => {
                anyhow::bail!(
                    "Security: '{}' is an absolute path; only paths relative to the repository are allowed",
                    relative
                );
            }
        }
    }

    Ok(root.join(relative_path))
}

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// This combines existence check, symlink check, and file type check in one operation.
///
/// # Arguments
/// * `path` - The path to validate
/// * `file_description` - Description of the file (e.g., "version file", "SBOM")
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
///
/// # Errors
/// Returns an error if the file size exceeds the maximum
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a regular file after the symlink and size checks
pub fn read_checked(path: &Path, file_description: &str) -> Result<Vec<u8>> {
    let size = validate_regular_file(path, file_description)?;
    validate_file_size(size, path, MAX_FILE_SIZE)?;
    fs::read(path).map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Replaces credentials embedded in a URL (`https://token@host/...`) with `***`
pub fn redact_url(url: &str) -> String {
    if let Some((scheme, rest)) = url.split_once("://") {
        if let Some((userinfo, host_and_path)) = rest.split_once('@') {
            if !userinfo.contains('/') {
                return format!("{}://***@{}", scheme, host_and_path);
            }
        }
    }
    url.to_string()
}
