use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use super::ContentRepositoryError;

/// Period is free text ("2021 - Present"), never parsed.
#[derive(Debug, Clone)]
pub struct NewExperience {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExperienceRecord {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub created_at: DateTime<FixedOffset>,
}

#[async_trait]
pub trait ExperienceRepository: Send + Sync {
    async fn insert(&self, data: NewExperience) -> Result<ExperienceRecord, ContentRepositoryError>;

    async fn list_all(&self) -> Result<Vec<ExperienceRecord>, ContentRepositoryError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError>;
}
