use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::ContentError;
use crate::content::application::ports::outgoing::skills::{
    NewSkill, SkillRecord, SkillRepository,
};

#[async_trait]
pub trait AddSkillUseCase: Send + Sync {
    async fn execute(&self, data: NewSkill) -> Result<SkillRecord, ContentError>;
}

#[async_trait]
pub trait ListSkillsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<SkillRecord>, ContentError>;
}

#[async_trait]
pub trait DeleteSkillUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

/// Proficiency is stored as submitted. The 0-100 range lives in the
/// dashboard's slider, not here.
pub struct SkillContentService {
    repository: Arc<dyn SkillRepository>,
}

impl SkillContentService {
    pub fn new(repository: Arc<dyn SkillRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AddSkillUseCase for SkillContentService {
    async fn execute(&self, data: NewSkill) -> Result<SkillRecord, ContentError> {
        Ok(self.repository.insert(data).await?)
    }
}

#[async_trait]
impl ListSkillsUseCase for SkillContentService {
    async fn execute(&self) -> Result<Vec<SkillRecord>, ContentError> {
        Ok(self.repository.list_all().await?)
    }
}

#[async_trait]
impl DeleteSkillUseCase for SkillContentService {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete_by_id(id).await?)
    }
}
