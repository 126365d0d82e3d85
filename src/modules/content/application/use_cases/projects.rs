use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::ContentError;
use crate::content::application::ports::outgoing::projects::{
    NewProject, ProjectRecord, ProjectRepository,
};

#[async_trait]
pub trait AddProjectUseCase: Send + Sync {
    async fn execute(&self, data: NewProject) -> Result<ProjectRecord, ContentError>;
}

#[async_trait]
pub trait ListProjectsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, ContentError>;
}

#[async_trait]
pub trait DeleteProjectUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

/// Fields pass through verbatim; the dashboard owns its own input rules and
/// there is deliberately no update path, edits are delete-and-recreate.
pub struct ProjectContentService {
    repository: Arc<dyn ProjectRepository>,
}

impl ProjectContentService {
    pub fn new(repository: Arc<dyn ProjectRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AddProjectUseCase for ProjectContentService {
    async fn execute(&self, data: NewProject) -> Result<ProjectRecord, ContentError> {
        Ok(self.repository.insert(data).await?)
    }
}

#[async_trait]
impl ListProjectsUseCase for ProjectContentService {
    async fn execute(&self) -> Result<Vec<ProjectRecord>, ContentError> {
        Ok(self.repository.list_all().await?)
    }
}

#[async_trait]
impl DeleteProjectUseCase for ProjectContentService {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete_by_id(id).await?)
    }
}
