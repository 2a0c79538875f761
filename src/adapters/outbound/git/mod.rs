/// Git adapters
mod git_cli_cloner;

pub use git_cli_cloner::{GitCliCloner, GIT_TOKEN_VARIABLE};
