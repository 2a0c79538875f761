/// End-to-end tests for the CLI
///
/// These run the real binary against config files in temporary directories.
/// None of them reach the network or need git/cdxgen on the PATH.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

/// Write a config file into the directory and return its path.
fn write_config(dir: &Path, name: &str, content: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, content).unwrap();
    path
}

/// Build a command with an isolated workspace and no Dependency-Track key.
fn central_cyclone(temp: &TempDir, config: &Path) -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("central-cyclone");
    cmd.arg("--config")
        .arg(config)
        .arg("--workspace")
        .arg(temp.path().join("workfolder"))
        .env_remove("DEPENDENCYTRACK_API_KEY")
        .env_remove("GIT_TOKEN")
        .env_remove("RUST_LOG");
    cmd
}

// Exit code tests for CLI
mod exit_code_tests {
    use super::*;

    /// Exit code 0: --help should return success
    #[test]
    fn test_exit_code_help() {
        cargo_bin_cmd!("central-cyclone")
            .arg("--help")
            .assert()
            .code(0)
            .stdout(predicate::str::contains("analyze"))
            .stdout(predicate::str::contains("gitops"));
    }

    /// Exit code 0: --version should return success
    #[test]
    fn test_exit_code_version() {
        cargo_bin_cmd!("central-cyclone")
            .arg("--version")
            .assert()
            .code(0);
    }

    /// Exit code 2: Invalid arguments
    #[test]
    fn test_exit_code_invalid_argument() {
        cargo_bin_cmd!("central-cyclone")
            .arg("--invalid-option")
            .assert()
            .code(2);
    }

    /// Exit code 2: Missing subcommand
    #[test]
    fn test_exit_code_missing_subcommand() {
        cargo_bin_cmd!("central-cyclone").assert().code(2);
    }

    /// Exit code 2: Invalid log format value
    #[test]
    fn test_exit_code_invalid_log_format() {
        cargo_bin_cmd!("central-cyclone")
            .args(["--log-format", "xml", "analyze"])
            .assert()
            .code(2);
    }

    /// Exit code 3: Application error - config file does not exist
    #[test]
    fn test_exit_code_missing_config() {
        let temp = TempDir::new().unwrap();
        central_cyclone(&temp, &temp.path().join("absent.json"))
            .arg("analyze")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    /// Exit code 3: Application error - config file is not valid JSON
    #[test]
    fn test_exit_code_malformed_config() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "config.json", "{ repositories: ");
        central_cyclone(&temp, &config)
            .arg("analyze")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    /// Exit code 3: Application error - two repositories share a folder name
    #[test]
    fn test_exit_code_duplicate_folder_names() {
        let temp = TempDir::new().unwrap();
        let config = write_config(
            temp.path(),
            "config.json",
            r#"{"repositories": [
                {"url": "https://github.com/org/repo.git", "targets": []},
                {"url": "https://gitlab.com/org/repo", "targets": []}
            ]}"#,
        );
        central_cyclone(&temp, &config)
            .arg("analyze")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid configuration"));
    }
}

mod analyze_tests {
    use super::*;

    #[test]
    fn test_analyze_empty_fleet_succeeds() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "config.json", r#"{"repositories": []}"#);

        central_cyclone(&temp, &config)
            .arg("analyze")
            .assert()
            .code(0);

        assert!(temp.path().join("workfolder/repos").is_dir());
        assert!(temp.path().join("workfolder/sboms").is_dir());
    }

    #[test]
    fn test_analyze_unmappable_repository_is_partial_failure() {
        let temp = TempDir::new().unwrap();
        let config = write_config(
            temp.path(),
            "config.yaml",
            r#"
repositories:
  - url: https://github.com/lonely
    targets:
      - type: go
        projectId: proj-1
"#,
        );

        central_cyclone(&temp, &config)
            .arg("analyze")
            .assert()
            .code(1)
            .stderr(predicate::str::contains("https://github.com/lonely"));
    }

    #[test]
    fn test_analyze_upload_requires_api_key() {
        let temp = TempDir::new().unwrap();
        let config = write_config(
            temp.path(),
            "config.json",
            r#"{"repositories": [], "dependencyTrack": {"url": "http://127.0.0.1:9"}}"#,
        );

        central_cyclone(&temp, &config)
            .args(["analyze", "--upload"])
            .assert()
            .code(3)
            .stderr(predicate::str::contains("DEPENDENCYTRACK_API_KEY"));

        // Nothing was cleared or created before the credential check
        assert!(!temp.path().join("workfolder").exists());
    }
}

mod upload_tests {
    use super::*;

    #[test]
    fn test_upload_requires_dependency_track_url() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "config.json", r#"{"repositories": []}"#);

        central_cyclone(&temp, &config)
            .env("DEPENDENCYTRACK_API_KEY", "test-key")
            .arg("upload")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("dependencyTrack.url"));
    }

    #[test]
    fn test_upload_requires_api_key() {
        let temp = TempDir::new().unwrap();
        let config = write_config(
            temp.path(),
            "config.json",
            r#"{"repositories": [], "dependencyTrack": {"url": "http://127.0.0.1:9"}}"#,
        );

        central_cyclone(&temp, &config)
            .arg("upload")
            .assert()
            .code(3)
            .stderr(predicate::str::contains("DEPENDENCYTRACK_API_KEY"));
    }

    #[test]
    fn test_upload_skips_unmatched_files() {
        let temp = TempDir::new().unwrap();
        let sboms = temp.path().join("sboms");
        fs::create_dir(&sboms).unwrap();
        fs::write(sboms.join("unknown_repo_sbom_go.json"), "{}").unwrap();
        let config = write_config(
            temp.path(),
            "config.json",
            r#"{"repositories": [], "dependencyTrack": {"url": "http://127.0.0.1:9"}}"#,
        );

        central_cyclone(&temp, &config)
            .env("DEPENDENCYTRACK_API_KEY", "test-key")
            .arg("upload")
            .arg("--sboms-dir")
            .arg(&sboms)
            .assert()
            .code(1)
            .stderr(predicate::str::contains("unknown_repo_sbom_go.json"));
    }
}

mod reconcile_tests {
    use super::*;

    #[test]
    fn test_project_sync_without_projects_succeeds() {
        let temp = TempDir::new().unwrap();
        let config = write_config(
            temp.path(),
            "config.json",
            r#"{"dependencyTrack": {"url": "http://127.0.0.1:9"}, "applications": []}"#,
        );

        central_cyclone(&temp, &config)
            .env("DEPENDENCYTRACK_API_KEY", "test-key")
            .args(["dt", "projects", "sync"])
            .assert()
            .code(0);
    }

    #[test]
    fn test_gitops_status_without_repositories_succeeds() {
        let temp = TempDir::new().unwrap();
        let config = write_config(temp.path(), "config.json", r#"{"gitOpsRepositories": []}"#);

        central_cyclone(&temp, &config)
            .args(["gitops", "status"])
            .assert()
            .code(0);
    }

    #[test]
    fn test_gitops_status_invalid_identifier_is_config_error() {
        let temp = TempDir::new().unwrap();
        let config = write_config(
            temp.path(),
            "config.json",
            r#"{"gitOpsRepositories": [{"url": "https://github.com/org/gitops", "applications": [
                {"applicationName": "api", "versionIdentifiers": [{"environment": "", "filepath": "a.yaml", "yamlPath": ".tag"}]}
            ]}]}"#,
        );

        central_cyclone(&temp, &config)
            .args(["gitops", "status"])
            .assert()
            .code(3);
    }
}
