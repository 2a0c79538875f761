mod artifact_name;
mod query_path;
mod repo_url_mapper;

pub use artifact_name::ArtifactName;
pub use query_path::{PathStep, QueryPath, YamlPathExtractor};
pub use repo_url_mapper::RepoUrlMapper;
