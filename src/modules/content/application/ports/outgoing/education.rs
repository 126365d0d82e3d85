use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use super::ContentRepositoryError;

#[derive(Debug, Clone)]
pub struct NewEducation {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EducationRecord {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub created_at: DateTime<FixedOffset>,
}

#[async_trait]
pub trait EducationRepository: Send + Sync {
    async fn insert(&self, data: NewEducation) -> Result<EducationRecord, ContentRepositoryError>;

    async fn list_all(&self) -> Result<Vec<EducationRecord>, ContentRepositoryError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError>;
}
