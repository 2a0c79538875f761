use crate::application::dto::{PipelineReport, ProjectSyncReport, UploadReport};
use crate::ports::outbound::SummaryPresenter;
use crate::reconciliation::domain::SyncState;
use owo_colors::OwoColorize;
use std::fmt::Write;
use std::io::IsTerminal;

/// StderrSummaryPresenter adapter printing run summaries to stderr
///
/// Colors are only emitted when stderr is a terminal.
pub struct StderrSummaryPresenter {
    colored: bool,
}

impl StderrSummaryPresenter {
    pub fn new() -> Self {
        Self {
            colored: std::io::stderr().is_terminal(),
        }
    }

    pub fn plain() -> Self {
        Self { colored: false }
    }

    fn ok(&self, text: &str) -> String {
        if self.colored {
            text.green().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn warn(&self, text: &str) -> String {
        if self.colored {
            text.yellow().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn fail(&self, text: &str) -> String {
        if self.colored {
            text.red().bold().to_string()
        } else {
            text.to_string()
        }
    }

    fn dim(&self, text: &str) -> String {
        if self.colored {
            text.dimmed().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn render_pipeline(&self, report: &PipelineReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "📦 SBOM analysis summary");
        let _ = writeln!(out, "   Repositories: {}", report.repositories);
        let _ = writeln!(
            out,
            "   Artifacts:    {}",
            self.ok(&report.artifacts_routed.to_string())
        );

        if report.failures.is_empty() {
            let _ = writeln!(out, "{}", self.ok("✅ All repositories processed"));
            return out;
        }

        let _ = writeln!(
            out,
            "{}",
            self.fail(&format!("❌ {} unit(s) failed:", report.failures.len()))
        );
        for failure in &report.failures {
            let unit = match &failure.target {
                Some(target) => format!("{} [{}]", failure.repo, target),
                None => failure.repo.clone(),
            };
            let _ = writeln!(out, "   - {}: {}", unit, self.dim(&failure.message));
        }
        out
    }

    pub fn render_upload(&self, report: &UploadReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "📤 SBOM upload summary");
        let _ = writeln!(
            out,
            "   Uploaded: {}",
            self.ok(&report.uploaded.to_string())
        );

        if !report.skipped.is_empty() {
            let _ = writeln!(
                out,
                "{}",
                self.warn(&format!("⚠️  Skipped {} entr(ies):", report.skipped.len()))
            );
            for skipped in &report.skipped {
                let _ = writeln!(out, "   - {}: {}", skipped.name, self.dim(&skipped.reason));
            }
        }

        if !report.failures.is_empty() {
            let _ = writeln!(
                out,
                "{}",
                self.fail(&format!("❌ {} upload(s) failed:", report.failures.len()))
            );
            for failure in &report.failures {
                let _ = writeln!(out, "   - {}: {}", failure.file, self.dim(&failure.message));
            }
        }
        out
    }

    pub fn render_project_sync(&self, report: &ProjectSyncReport) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "🗂️  Dependency-Track project sync");
        let _ = writeln!(out, "   Created:  {}", self.ok(&report.created.to_string()));
        let _ = writeln!(out, "   Existing: {}", report.existing);
        let failed = report.failed.to_string();
        let failed = if report.failed > 0 {
            self.fail(&failed)
        } else {
            failed
        };
        let _ = writeln!(out, "   Failed:   {}", failed);
        out
    }

    pub fn render_gitops(&self, state: &SyncState) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "🔎 GitOps deployed versions");

        let mut urls: Vec<&String> = state.repos.keys().collect();
        urls.sort();
        for url in urls {
            let Some(repo_state) = state.repo(url) else {
                continue;
            };
            let revision = repo_state.repo.current_revision().unwrap_or("unknown");
            let _ = writeln!(out, "   {} {}", url, self.dim(&format!("@ {}", revision)));

            for app_state in repo_state.sorted_app_states() {
                let _ = writeln!(
                    out,
                    "     {:<24} {:<12} {}",
                    app_state.app_name,
                    app_state.environment,
                    self.ok(&app_state.current_version)
                );
            }
        }
        out
    }
}

impl Default for StderrSummaryPresenter {
    fn default() -> Self {
        Self::new()
    }
}

impl SummaryPresenter for StderrSummaryPresenter {
    fn present_pipeline(&self, report: &PipelineReport) {
        eprint!("{}", self.render_pipeline(report));
    }

    fn present_upload(&self, report: &UploadReport) {
        eprint!("{}", self.render_upload(report));
    }

    fn present_project_sync(&self, report: &ProjectSyncReport) {
        eprint!("{}", self.render_project_sync(report));
    }

    fn present_gitops(&self, state: &SyncState) {
        eprint!("{}", self.render_gitops(state));
    }
}
