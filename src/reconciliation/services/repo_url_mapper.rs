use crate::reconciliation::domain::FolderName;
use crate::shared::error::CycloneError;
use crate::shared::Result;
use reqwest::Url;

const AZURE_DEVOPS_HOST: &str = "dev.azure.com";
const AZURE_GIT_MARKER: &str = "_git";

/// RepoUrlMapper - Derives the canonical folder name of a repository URL
///
/// The folder name names the clone directory and prefixes every SBOM
/// artifact produced for the repository, so the same URL must always map to
/// the same name.
///
/// Rules:
/// - `dev.azure.com/{org}/{project}/_git/{repo}` becomes `{org}_{project}_{repo}`
/// - any other host with at least two path segments becomes `{owner}_{repo}`
///   from the last two segments
/// - a trailing `.git` is ignored
pub struct RepoUrlMapper;

impl RepoUrlMapper {
    /// Maps a repository URL to its folder name
    ///
    /// # Errors
    /// - `InvalidUrl` if the URL cannot be parsed, or is an Azure DevOps URL
    ///   without a `_git` marker in a usable position
    /// - `UnsupportedHost` if the path has fewer than two segments
    pub fn folder_name(url: &str) -> Result<FolderName> {
        let parsed = Url::parse(url).map_err(|e| CycloneError::InvalidUrl {
            url: url.to_string(),
            details: e.to_string(),
        })?;

        let host = parsed.host_str().unwrap_or_default().to_string();
        let path = parsed.path();
        let path = path.strip_suffix(".git").unwrap_or(path);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

        if host.eq_ignore_ascii_case(AZURE_DEVOPS_HOST) {
            return Self::azure_folder_name(url, &segments);
        }

        if segments.len() >= 2 {
            let owner = segments[segments.len() - 2];
            let repo = segments[segments.len() - 1];
            return Ok(Self::join(&[owner, repo]));
        }

        Err(CycloneError::UnsupportedHost {
            host,
            url: url.to_string(),
        }
        .into())
    }

    fn azure_folder_name(url: &str, segments: &[&str]) -> Result<FolderName> {
        let marker = segments
            .iter()
            .enumerate()
            .position(|(i, s)| *s == AZURE_GIT_MARKER && i >= 2 && i + 1 < segments.len());

        match marker {
            Some(i) => Ok(Self::join(&[segments[i - 2], segments[i - 1], segments[i + 1]])),
            None => Err(CycloneError::InvalidUrl {
                url: url.to_string(),
                details: "invalid Azure DevOps URL, expected {org}/{project}/_git/{repo}"
                    .to_string(),
            }
            .into()),
        }
    }

    // Parsed path segments never contain '/', but may still contain '\'
    fn join(parts: &[&str]) -> FolderName {
        let joined = parts.join("_").replace('\\', "_");
        FolderName::new(joined)
    }
}
