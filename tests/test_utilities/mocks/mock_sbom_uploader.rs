use async_trait::async_trait;
use central_cyclone::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock SbomUploader recording every (project id, payload) it receives
#[derive(Clone, Default)]
pub struct MockSbomUploader {
    uploads: Arc<Mutex<Vec<(String, Vec<u8>)>>>,
    failing_projects: Vec<String>,
}

impl MockSbomUploader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_failing_project(mut self, project_id: &str) -> Self {
        self.failing_projects.push(project_id.to_string());
        self
    }

    pub fn uploaded_projects(&self) -> Vec<String> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .map(|(project_id, _)| project_id.clone())
            .collect()
    }

    pub fn payload_for(&self, project_id: &str) -> Option<Vec<u8>> {
        self.uploads
            .lock()
            .unwrap()
            .iter()
            .find(|(id, _)| id == project_id)
            .map(|(_, data)| data.clone())
    }
}

#[async_trait]
impl SbomUploader for MockSbomUploader {
    async fn upload_sbom(&self, project_id: &str, data: Vec<u8>) -> Result<()> {
        if self.failing_projects.iter().any(|p| p == project_id) {
            return Err(CycloneError::UploadFailure {
                project_id: project_id.to_string(),
                details: "Mock upload failure".to_string(),
            }
            .into());
        }
        self.uploads
            .lock()
            .unwrap()
            .push((project_id.to_string(), data));
        Ok(())
    }
}
