use central_cyclone::adapters::outbound::console::StderrSummaryPresenter;
use central_cyclone::adapters::outbound::filesystem::{LocalSbomDirectory, LocalWorkspace};
use central_cyclone::adapters::outbound::generator::CdxgenGenerator;
use central_cyclone::adapters::outbound::git::GitCliCloner;
use central_cyclone::adapters::outbound::network::DependencyTrackClient;
use central_cyclone::application::use_cases::{
    AnalyzeRepositoriesUseCase, GitOpsSyncUseCase, SyncProjectsUseCase, UploadSbomsUseCase,
};
use central_cyclone::cli::{Args, Command, DtCommand, GitOpsCommand, ProjectsCommand};
use central_cyclone::config::{load_settings, Settings};
use central_cyclone::ports::outbound::SummaryPresenter;
use central_cyclone::reconciliation::services::YamlPathExtractor;
use central_cyclone::shared::error::ExitCode;
use central_cyclone::shared::logging::init_tracing;
use central_cyclone::shared::Result;
use std::path::PathBuf;
use std::process;

#[tokio::main]
async fn main() {
    // clap exits with code 2 on invalid arguments
    let args = Args::parse_args();

    if let Err(e) = init_tracing(&args.log_level, args.log_format) {
        eprintln!("❌ {}", e);
        process::exit(ExitCode::ApplicationError.as_i32());
    }

    match run(args).await {
        Ok(exit_code) => process::exit(exit_code.as_i32()),
        Err(e) => {
            eprintln!("\n❌ An error occurred:\n");
            eprintln!("{}", e);

            // Display error chain
            for cause in e.chain().skip(1) {
                eprintln!("\nCaused by: {}", cause);
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

async fn run(args: Args) -> Result<ExitCode> {
    let settings = load_settings(&args.config)?;
    let workspace = LocalWorkspace::new(resolve_workspace_root(args.workspace)?);
    let presenter = StderrSummaryPresenter::new();

    match args.command {
        Command::Analyze { upload, cdxgen_bin } => {
            run_analyze(&settings, workspace, upload, cdxgen_bin, &presenter).await
        }
        Command::Upload { sboms_dir } => {
            let sboms_dir = sboms_dir.unwrap_or_else(|| workspace.sboms_dir());
            let client = DependencyTrackClient::from_env(settings.dependency_track_url()?)?;

            let use_case = UploadSbomsUseCase::new(LocalSbomDirectory::new(sboms_dir), client);
            let report = use_case.execute(&settings.repositories).await?;
            presenter.present_upload(&report);
            Ok(report.exit_code())
        }
        Command::Dt {
            command: DtCommand::Projects {
                command: ProjectsCommand::Sync,
            },
        } => {
            let client = DependencyTrackClient::from_env(settings.dependency_track_url()?)?;

            let use_case = SyncProjectsUseCase::new(client);
            let report = use_case.execute(&settings.logical_projects()).await;
            presenter.present_project_sync(&report);
            Ok(report.exit_code())
        }
        Command::Gitops {
            command: GitOpsCommand::Status,
        } => {
            workspace.ensure_layout()?;
            let cloner = GitCliCloner::new(workspace.clone());

            let mut use_case = GitOpsSyncUseCase::new(cloner, workspace, YamlPathExtractor::new());
            use_case.init(&settings.git_ops_repositories).await?;
            presenter.present_gitops(use_case.state());
            Ok(ExitCode::Success)
        }
    }
}

async fn run_analyze(
    settings: &Settings,
    workspace: LocalWorkspace,
    upload: bool,
    cdxgen_bin: PathBuf,
    presenter: &StderrSummaryPresenter,
) -> Result<ExitCode> {
    // Credentials are checked before any clone starts
    let uploader = if upload {
        Some(DependencyTrackClient::from_env(
            settings.dependency_track_url()?,
        )?)
    } else {
        None
    };

    workspace.ensure_layout()?;
    let cloner = GitCliCloner::new(workspace.clone());
    let generator = CdxgenGenerator::new(cdxgen_bin);

    let use_case = AnalyzeRepositoriesUseCase::new(cloner, generator, workspace, uploader);
    let report = use_case.execute(&settings.repositories).await?;
    presenter.present_pipeline(&report);
    Ok(report.exit_code())
}

fn resolve_workspace_root(workspace: Option<PathBuf>) -> Result<PathBuf> {
    match workspace {
        Some(root) => Ok(root),
        None => LocalWorkspace::default_root(),
    }
}
