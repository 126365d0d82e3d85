use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};
use uuid::Uuid;

use super::ContentRepositoryError;

/// The publication date is assigned by the repository at insert time; the
/// back office never supplies it.
#[derive(Debug, Clone)]
pub struct NewBlogPost {
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BlogPostRecord {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub image_url: Option<String>,
    pub published_at: DateTime<FixedOffset>,
    pub created_at: DateTime<FixedOffset>,
}

#[async_trait]
pub trait BlogPostRepository: Send + Sync {
    async fn insert(&self, data: NewBlogPost) -> Result<BlogPostRecord, ContentRepositoryError>;

    async fn list_all(&self) -> Result<Vec<BlogPostRecord>, ContentRepositoryError>;

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError>;
}
