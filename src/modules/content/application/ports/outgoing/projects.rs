use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use super::ContentRepositoryError;

/// Input for a new portfolio project. The id and creation timestamp are
/// assigned by the repository, never by the caller.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub stack: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectRecord {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub stack: String,
    pub image_url: Option<String>,
    pub video_url: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

#[async_trait]
pub trait ProjectRepository: Send + Sync {
    async fn insert(&self, data: NewProject) -> Result<ProjectRecord, ContentRepositoryError>;

    /// Full scan ordered by creation time, oldest first.
    async fn list_all(&self) -> Result<Vec<ProjectRecord>, ContentRepositoryError>;

    /// Deleting an absent id is success, not an error.
    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError>;
}
