use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::ContentError;
use crate::content::application::ports::outgoing::experiences::{
    ExperienceRecord, ExperienceRepository, NewExperience,
};

#[async_trait]
pub trait AddExperienceUseCase: Send + Sync {
    async fn execute(&self, data: NewExperience) -> Result<ExperienceRecord, ContentError>;
}

#[async_trait]
pub trait ListExperiencesUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ContentError>;
}

#[async_trait]
pub trait DeleteExperienceUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

pub struct ExperienceContentService {
    repository: Arc<dyn ExperienceRepository>,
}

impl ExperienceContentService {
    pub fn new(repository: Arc<dyn ExperienceRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AddExperienceUseCase for ExperienceContentService {
    async fn execute(&self, data: NewExperience) -> Result<ExperienceRecord, ContentError> {
        Ok(self.repository.insert(data).await?)
    }
}

#[async_trait]
impl ListExperiencesUseCase for ExperienceContentService {
    async fn execute(&self) -> Result<Vec<ExperienceRecord>, ContentError> {
        Ok(self.repository.list_all().await?)
    }
}

#[async_trait]
impl DeleteExperienceUseCase for ExperienceContentService {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete_by_id(id).await?)
    }
}
