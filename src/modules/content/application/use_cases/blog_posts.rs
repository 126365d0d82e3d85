use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use super::ContentError;
use crate::content::application::ports::outgoing::blog_posts::{
    BlogPostRecord, BlogPostRepository, NewBlogPost,
};

#[async_trait]
pub trait AddBlogPostUseCase: Send + Sync {
    async fn execute(&self, data: NewBlogPost) -> Result<BlogPostRecord, ContentError>;
}

#[async_trait]
pub trait ListBlogPostsUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<BlogPostRecord>, ContentError>;
}

#[async_trait]
pub trait DeleteBlogPostUseCase: Send + Sync {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError>;
}

pub struct BlogPostContentService {
    repository: Arc<dyn BlogPostRepository>,
}

impl BlogPostContentService {
    pub fn new(repository: Arc<dyn BlogPostRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AddBlogPostUseCase for BlogPostContentService {
    async fn execute(&self, data: NewBlogPost) -> Result<BlogPostRecord, ContentError> {
        Ok(self.repository.insert(data).await?)
    }
}

#[async_trait]
impl ListBlogPostsUseCase for BlogPostContentService {
    async fn execute(&self) -> Result<Vec<BlogPostRecord>, ContentError> {
        Ok(self.repository.list_all().await?)
    }
}

#[async_trait]
impl DeleteBlogPostUseCase for BlogPostContentService {
    async fn execute(&self, id: Uuid) -> Result<(), ContentError> {
        Ok(self.repository.delete_by_id(id).await?)
    }
}
