use crate::ports::outbound::{RepositoryCloner, Workspace};
use crate::reconciliation::domain::ClonedRepo;
use crate::shared::error::CycloneError;
use crate::shared::security::redact_url;
use crate::shared::Result;
use anyhow::Context;
use async_trait::async_trait;
use std::fs;
use std::path::Path;
use tokio::process::Command;

/// Environment variable holding an access token for private repositories
pub const GIT_TOKEN_VARIABLE: &str = "GIT_TOKEN";

/// GitCliCloner adapter shelling out to the `git` executable
///
/// Performs shallow clones into the workspace folder of each repository.
/// When a token is configured it is embedded into `https://` URLs; the
/// token never appears in logs, errors or the returned `ClonedRepo`.
pub struct GitCliCloner<W> {
    workspace: W,
    git_bin: String,
    token: Option<String>,
}

impl<W: Workspace> GitCliCloner<W> {
    pub fn new(workspace: W) -> Self {
        let token = std::env::var(GIT_TOKEN_VARIABLE)
            .ok()
            .filter(|token| !token.is_empty());
        Self {
            workspace,
            git_bin: "git".to_string(),
            token,
        }
    }

    pub fn with_git_bin(mut self, git_bin: impl Into<String>) -> Self {
        self.git_bin = git_bin.into();
        self
    }

    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }

    /// Embeds the token as userinfo into `https://` URLs; others pass through
    fn authenticated_url(&self, url: &str) -> String {
        match (&self.token, url.strip_prefix("https://")) {
            (Some(token), Some(rest)) => format!("https://{}@{}", token, rest),
            _ => url.to_string(),
        }
    }

    // Removes the token from git's own error output
    fn scrub(&self, text: &str) -> String {
        match &self.token {
            Some(token) => text.replace(token.as_str(), "***"),
            None => text.to_string(),
        }
    }

    fn clone_failure(&self, url: &str, details: String) -> anyhow::Error {
        CycloneError::CloneFailure {
            url: redact_url(url),
            details: self.scrub(&details),
        }
        .into()
    }

    async fn run_clone(&self, url: &str, target_dir: &Path) -> Result<()> {
        let output = Command::new(&self.git_bin)
            .args(["clone", "--quiet", "--depth", "1"])
            .arg(self.authenticated_url(url))
            .arg(target_dir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .await
            .map_err(|e| self.clone_failure(url, format!("failed to run {}: {}", self.git_bin, e)))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.clone_failure(
                url,
                format!("git exited with {}: {}", output.status, stderr.trim()),
            ));
        }
        Ok(())
    }

    /// Commit id checked out in `repo_dir`, via `git rev-parse HEAD`
    pub async fn resolve_revision(&self, repo_dir: &Path) -> Result<String> {
        let output = Command::new(&self.git_bin)
            .args(["rev-parse", "HEAD"])
            .current_dir(repo_dir)
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .await
            .with_context(|| format!("Failed to run {} rev-parse", self.git_bin))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("git rev-parse exited with {}: {}", output.status, stderr.trim());
        }

        let revision = String::from_utf8_lossy(&output.stdout).trim().to_string();
        if revision.is_empty() {
            anyhow::bail!("git rev-parse printed no revision");
        }
        Ok(revision)
    }
}

#[async_trait]
impl<W: Workspace> RepositoryCloner for GitCliCloner<W> {
    async fn clone_repo(&self, url: &str) -> Result<ClonedRepo> {
        let target_dir = self.workspace.prepare_repo_folder(url)?;
        tracing::info!(repo = %redact_url(url), path = %target_dir.display(), "Cloning repository");

        if let Err(e) = self.run_clone(url, &target_dir).await {
            if let Err(cleanup) = fs::remove_dir_all(&target_dir) {
                tracing::warn!(
                    path = %target_dir.display(),
                    error = %cleanup,
                    "Failed to remove partial clone"
                );
            }
            return Err(e);
        }

        let cloned = ClonedRepo::new(url, &target_dir);
        match self.resolve_revision(&target_dir).await {
            Ok(revision) => Ok(cloned.with_revision(revision)),
            Err(e) => {
                tracing::warn!(repo = %redact_url(url), error = %e, "Cannot resolve cloned revision");
                Ok(cloned)
            }
        }
    }
}
