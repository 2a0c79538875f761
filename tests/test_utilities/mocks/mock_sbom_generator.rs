use async_trait::async_trait;
use central_cyclone::prelude::*;
use std::path::Path;

/// Mock SbomGenerator producing a tiny CycloneDX document per target
pub struct MockSbomGenerator {
    failing_types: Vec<String>,
}

impl MockSbomGenerator {
    pub fn new() -> Self {
        Self {
            failing_types: Vec::new(),
        }
    }

    pub fn with_failing_type(mut self, target_type: &str) -> Self {
        self.failing_types.push(target_type.to_string());
        self
    }
}

#[async_trait]
impl SbomGenerator for MockSbomGenerator {
    async fn generate(&self, repo_path: &Path, target: &BuildTarget) -> Result<Vec<u8>> {
        if self.failing_types.contains(&target.target_type) {
            return Err(CycloneError::GenerationFailure {
                target: target.target_type.clone(),
                path: repo_path.to_path_buf(),
                details: "Mock generation failure".to_string(),
            }
            .into());
        }
        Ok(format!(
            r#"{{"bomFormat":"CycloneDX","specVersion":"1.5","metadata":{{"component":{{"type":"{}"}}}}}}"#,
            target.target_type
        )
        .into_bytes())
    }
}
