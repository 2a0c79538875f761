use async_trait::async_trait;
use central_cyclone::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock ProjectRegistry backed by an in-memory catalogue
#[derive(Clone, Default)]
pub struct MockProjectRegistry {
    existing: Arc<Mutex<Vec<RegistryProject>>>,
    unreachable: bool,
}

impl MockProjectRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_project(self, name: &str, version: &str) -> Self {
        self.existing.lock().unwrap().push(RegistryProject {
            uuid: Some(format!("uuid-{}-{}", name, version)),
            name: name.to_string(),
            version: version.to_string(),
            active: true,
            is_latest: false,
        });
        self
    }

    pub fn unreachable() -> Self {
        Self {
            unreachable: true,
            ..Self::default()
        }
    }

    pub fn projects(&self) -> Vec<RegistryProject> {
        self.existing.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProjectRegistry for MockProjectRegistry {
    async fn lookup_project(&self, name: &str, version: &str) -> Result<RegistryProject> {
        if self.unreachable {
            return Err(CycloneError::RegistryLookupFailure {
                name: name.to_string(),
                version: version.to_string(),
                details: "Mock connection refused".to_string(),
            }
            .into());
        }
        self.existing
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.name == name && p.version == version)
            .cloned()
            .ok_or_else(|| {
                CycloneError::RegistryNotFound {
                    name: name.to_string(),
                    version: version.to_string(),
                }
                .into()
            })
    }

    async fn create_project(&self, project: &RegistryProject) -> Result<()> {
        let mut created = project.clone();
        created.uuid = Some(format!("uuid-{}-{}", project.name, project.version));
        self.existing.lock().unwrap().push(created);
        Ok(())
    }
}
