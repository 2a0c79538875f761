use crate::ports::outbound::{RepositoryCloner, ValueExtractor, Workspace};
use crate::reconciliation::domain::{
    AppState, AppStateKey, ClonedRepo, GitOpsApplication, GitOpsRepoDescriptor, GitOpsRepoState,
    SyncState,
};
use crate::shared::Result;
use anyhow::Context;
use std::collections::HashMap;

/// GitOpsSyncUseCase - Builds the deployed-version state of GitOps repositories
///
/// `init` is all-or-nothing: a new state is assembled from scratch and only
/// replaces the current one when every repository, file and query succeeded.
pub struct GitOpsSyncUseCase<C, W, E> {
    cloner: C,
    workspace: W,
    extractor: E,
    state: SyncState,
}

impl<C, W, E> GitOpsSyncUseCase<C, W, E>
where
    C: RepositoryCloner,
    W: Workspace,
    E: ValueExtractor,
{
    pub fn new(cloner: C, workspace: W, extractor: E) -> Self {
        Self {
            cloner,
            workspace,
            extractor,
            state: SyncState::new(),
        }
    }

    /// Clones every GitOps repository and extracts each declared version
    ///
    /// # Errors
    /// Returns the first clone, read or query error. The previously committed
    /// state is left untouched in that case.
    pub async fn init(&mut self, repos: &[GitOpsRepoDescriptor]) -> Result<()> {
        let mut fresh = SyncState::new();

        for repo in repos {
            tracing::info!(repo = %repo.url, "Syncing GitOps repository");
            let cloned = self
                .cloner
                .clone_repo(&repo.url)
                .await
                .with_context(|| format!("Failed to sync GitOps repository {}", repo.url))?;

            let mut app_states = HashMap::new();
            for app in &repo.applications {
                self.extract_application(&cloned, app, &mut app_states)?;
            }

            tracing::info!(
                repo = %repo.url,
                versions = app_states.len(),
                "GitOps repository synced"
            );
            fresh.repos.insert(
                repo.url.clone(),
                GitOpsRepoState {
                    repo: cloned,
                    app_states,
                },
            );
        }

        self.state = fresh;
        Ok(())
    }

    fn extract_application(
        &self,
        cloned: &ClonedRepo,
        app: &GitOpsApplication,
        app_states: &mut HashMap<AppStateKey, AppState>,
    ) -> Result<()> {
        for identifier in &app.version_identifiers {
            let content = self
                .workspace
                .read_file_from_repo(cloned, &identifier.file_path)?;
            let version = self
                .extractor
                .extract_value(&content, &identifier.query_path)
                .with_context(|| {
                    format!(
                        "Failed to extract version of {} ({}) from {}",
                        app.name, identifier.environment, identifier.file_path
                    )
                })?;

            tracing::debug!(
                application = %app.name,
                environment = %identifier.environment,
                version = %version,
                "Extracted deployed version"
            );
            app_states.insert(
                AppStateKey::new(&app.name, &identifier.environment),
                AppState {
                    app_name: app.name.clone(),
                    environment: identifier.environment.clone(),
                    current_version: version,
                    handled: false,
                },
            );
        }
        Ok(())
    }

    pub fn state(&self) -> &SyncState {
        &self.state
    }

    pub fn app_state(&self, repo_url: &str, key: &AppStateKey) -> Option<&AppState> {
        self.state
            .repo(repo_url)
            .and_then(|repo| repo.app_states.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reconciliation::domain::{SbomArtifact, VersionIdentifier};
    use crate::reconciliation::services::YamlPathExtractor;
    use crate::shared::error::CycloneError;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::sync::Arc;

    struct MockCloner {
        fail: Arc<AtomicBool>,
    }

    #[async_trait]
    impl RepositoryCloner for MockCloner {
        async fn clone_repo(&self, url: &str) -> Result<ClonedRepo> {
            if self.fail.load(Ordering::SeqCst) {
                return Err(CycloneError::CloneFailure {
                    url: url.to_string(),
                    details: "authentication required".to_string(),
                }
                .into());
            }
            Ok(ClonedRepo::new(url, "/work/repos/org_gitops"))
        }
    }

    /// Serves files from an in-memory map keyed by relative path
    struct MockWorkspace {
        files: HashMap<String, String>,
    }

    impl Workspace for MockWorkspace {
        fn clear(&self) -> Result<()> {
            Ok(())
        }

        fn prepare_repo_folder(&self, _url: &str) -> Result<PathBuf> {
            Ok(PathBuf::from("/work/repos/org_gitops"))
        }

        fn save_sbom(&self, _artifact: SbomArtifact) -> Result<PathBuf> {
            unreachable!("GitOps sync never stores SBOMs")
        }

        fn read_file_from_repo(&self, repo: &ClonedRepo, relative_path: &str) -> Result<Vec<u8>> {
            self.files
                .get(relative_path)
                .map(|content| content.clone().into_bytes())
                .ok_or_else(|| {
                    CycloneError::FileReadError {
                        path: repo.path.join(relative_path),
                        details: "No such file or directory".to_string(),
                    }
                    .into()
                })
        }
    }

    const URL: &str = "https://github.com/org/gitops";

    fn use_case(
        fail_clone: Arc<AtomicBool>,
    ) -> GitOpsSyncUseCase<MockCloner, MockWorkspace, YamlPathExtractor> {
        let files = HashMap::from([
            (
                "apps/api/prod.yaml".to_string(),
                "image:\n  tag: 1.4.2\n".to_string(),
            ),
            (
                "apps/api/staging.yaml".to_string(),
                "image:\n  tag: 1.5.0-rc1\n".to_string(),
            ),
            (
                "apps/web/values.json".to_string(),
                r#"{"deployment": {"version": "2.0.0"}}"#.to_string(),
            ),
        ]);
        GitOpsSyncUseCase::new(
            MockCloner { fail: fail_clone },
            MockWorkspace { files },
            YamlPathExtractor::new(),
        )
    }

    fn descriptor() -> GitOpsRepoDescriptor {
        GitOpsRepoDescriptor {
            url: URL.to_string(),
            applications: vec![
                GitOpsApplication {
                    name: "api".to_string(),
                    version_identifiers: vec![
                        VersionIdentifier::new("prod", "apps/api/prod.yaml", ".image.tag"),
                        VersionIdentifier::new("staging", "apps/api/staging.yaml", ".image.tag"),
                    ],
                },
                GitOpsApplication {
                    name: "web".to_string(),
                    version_identifiers: vec![VersionIdentifier::new(
                        "prod",
                        "apps/web/values.json",
                        ".deployment.version",
                    )],
                },
            ],
        }
    }

    #[tokio::test]
    async fn test_init_extracts_every_application() {
        let mut sync = use_case(Arc::new(AtomicBool::new(false)));
        sync.init(&[descriptor()]).await.unwrap();

        let repo_state = sync.state().repo(URL).unwrap();
        assert_eq!(repo_state.app_states.len(), 3);

        let prod = sync
            .app_state(URL, &AppStateKey::new("api", "prod"))
            .unwrap();
        assert_eq!(prod.current_version, "1.4.2");
        assert!(!prod.handled);

        let staging = sync
            .app_state(URL, &AppStateKey::new("api", "staging"))
            .unwrap();
        assert_eq!(staging.current_version, "1.5.0-rc1");

        let web = sync
            .app_state(URL, &AppStateKey::new("web", "prod"))
            .unwrap();
        assert_eq!(web.current_version, "2.0.0");
    }

    #[tokio::test]
    async fn test_clone_failure_leaves_empty_state() {
        let mut sync = use_case(Arc::new(AtomicBool::new(true)));
        let result = sync.init(&[descriptor()]).await;

        assert!(result.is_err());
        assert!(sync.state().is_empty());
    }

    #[tokio::test]
    async fn test_failed_init_keeps_previous_state() {
        let fail = Arc::new(AtomicBool::new(false));
        let mut sync = use_case(fail.clone());
        sync.init(&[descriptor()]).await.unwrap();

        fail.store(true, Ordering::SeqCst);
        assert!(sync.init(&[descriptor()]).await.is_err());

        assert_eq!(sync.state().len(), 1);
        assert!(sync
            .app_state(URL, &AppStateKey::new("api", "prod"))
            .is_some());
    }

    #[tokio::test]
    async fn test_missing_file_aborts_init() {
        let mut repo = descriptor();
        repo.applications[0]
            .version_identifiers
            .push(VersionIdentifier::new("dev", "apps/api/dev.yaml", ".image.tag"));

        let mut sync = use_case(Arc::new(AtomicBool::new(false)));
        let err = sync.init(&[repo]).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CycloneError>(),
            Some(CycloneError::FileReadError { .. })
        ));
        assert!(sync.state().is_empty());
    }

    #[tokio::test]
    async fn test_read_failure_keeps_previous_state() {
        let mut sync = use_case(Arc::new(AtomicBool::new(false)));
        sync.init(&[descriptor()]).await.unwrap();

        let mut repo = descriptor();
        repo.applications[1].version_identifiers[0].file_path = "apps/web/missing.json".to_string();
        let err = sync.init(&[repo]).await.unwrap_err();

        assert!(matches!(
            err.downcast_ref::<CycloneError>(),
            Some(CycloneError::FileReadError { .. })
        ));
        assert_eq!(sync.state().len(), 1);
        assert_eq!(sync.state().repo(URL).unwrap().app_states.len(), 3);
        let web = sync
            .app_state(URL, &AppStateKey::new("web", "prod"))
            .unwrap();
        assert_eq!(web.current_version, "2.0.0");
    }

    #[tokio::test]
    async fn test_bad_query_aborts_init() {
        let mut repo = descriptor();
        repo.applications[1].version_identifiers[0].query_path = "deployment[".to_string();

        let mut sync = use_case(Arc::new(AtomicBool::new(false)));
        assert!(sync.init(&[repo]).await.is_err());
        assert!(sync.state().is_empty());
    }

    #[tokio::test]
    async fn test_init_with_no_repositories() {
        let mut sync = use_case(Arc::new(AtomicBool::new(false)));
        sync.init(&[]).await.unwrap();
        assert!(sync.state().is_empty());
    }
}
