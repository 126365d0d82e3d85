use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::ContentError;
use crate::content::application::ports::outgoing::education::{
    EducationRecord, EducationRepository, NewEducation,
};

#[async_trait]
pub trait AddEducationUseCase: Send + Sync {
    async fn execute(&self, data: NewEducation) -> Result<EducationRecord, ContentError>;
}

#[async_trait]
pub trait ListEducationUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<EducationRecord>, ContentError>;
}

#[async_trait]
pub trait DeleteEducationUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

pub struct EducationContentService {
    repository: Arc<dyn EducationRepository>,
}

impl EducationContentService {
    pub fn new(repository: Arc<dyn EducationRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AddEducationUseCase for EducationContentService {
    async fn execute(&self, data: NewEducation) -> Result<EducationRecord, ContentError> {
        Ok(self.repository.insert(data).await?)
    }
}

#[async_trait]
impl ListEducationUseCase for EducationContentService {
    async fn execute(&self) -> Result<Vec<EducationRecord>, ContentError> {
        Ok(self.repository.list_all().await?)
    }
}

#[async_trait]
impl DeleteEducationUseCase for EducationContentService {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete_by_id(id).await?)
    }
}
