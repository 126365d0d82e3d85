use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use super::ContentRepositoryError;

/// Proficiency is whatever integer the back office sends; the 0-100 range
/// is a client convention, not a storage constraint.
#[derive(Debug, Clone)]
pub struct NewSkill {
    pub name: String,
    pub proficiency: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SkillRecord {
    pub id: Uuid,
    pub name: String,
    pub proficiency: i32,
    pub created_at: DateTime<FixedOffset>,
}

#[async_trait]
pub trait SkillRepository: Send + Sync {
    async fn insert(&self, data: NewSkill) -> Result<SkillRecord, ContentRepositoryError>;

    async fn list_all(&self) -> Result<Vec<SkillRecord>, ContentRepositoryError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError>;
}
