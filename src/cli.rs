use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::adapters::outbound::generator::DEFAULT_CDXGEN_BIN;
use crate::config::DEFAULT_CONFIG_PATH;
use crate::shared::logging::LogFormat;

/// Central SBOM automation for a fleet of repositories
#[derive(Parser, Debug)]
#[command(name = "central-cyclone")]
#[command(version)]
#[command(
    about = "A small helper for central automated SBOM creation",
    long_about = "central-cyclone creates SBOMs for multiple configured repositories, uploads them to Dependency-Track and reconciles projects and GitOps deployment versions."
)]
pub struct Args {
    /// Path to the configuration file (JSON, or YAML for .yml/.yaml)
    #[arg(short, long, global = true, default_value = DEFAULT_CONFIG_PATH)]
    pub config: PathBuf,

    /// Working folder for clones and SBOMs [default: ~/.central-cyclone/workfolder]
    #[arg(long, global = true, value_name = "DIR")]
    pub workspace: Option<PathBuf>,

    /// Log level filter; RUST_LOG takes precedence when set
    #[arg(long, global = true, default_value = "info", value_name = "LEVEL")]
    pub log_level: String,

    /// Log output format: text or json
    #[arg(long, global = true, default_value = "text", value_name = "FORMAT")]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Clone every configured repository and generate SBOMs for its targets
    Analyze {
        /// Upload SBOMs to Dependency-Track instead of storing them in the workspace
        #[arg(long)]
        upload: bool,

        /// Path to the cdxgen executable
        #[arg(long, default_value = DEFAULT_CDXGEN_BIN, value_name = "PATH")]
        cdxgen_bin: PathBuf,
    },

    /// Upload SBOM files from disk to Dependency-Track
    Upload {
        /// Directory holding <folder>_sbom_<type>.json files [default: <workspace>/sboms]
        #[arg(long, value_name = "DIR")]
        sboms_dir: Option<PathBuf>,
    },

    /// Dependency-Track maintenance commands
    Dt {
        #[command(subcommand)]
        command: DtCommand,
    },

    /// GitOps repository commands
    Gitops {
        #[command(subcommand)]
        command: GitOpsCommand,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum DtCommand {
    /// Project catalogue commands
    Projects {
        #[command(subcommand)]
        command: ProjectsCommand,
    },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ProjectsCommand {
    /// Create every configured project that is missing in Dependency-Track
    Sync,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum GitOpsCommand {
    /// Show the deployed version of every configured application
    Status,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
