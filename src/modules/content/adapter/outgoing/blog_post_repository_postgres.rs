use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::adapter::outgoing::sea_orm_entity::blog_posts::{
    ActiveModel, Column, Entity, Model,
};
use crate::content::application::ports::outgoing::blog_posts::{
    BlogPostRecord, BlogPostRepository, NewBlogPost,
};
use crate::content::application::ports::outgoing::ContentRepositoryError;

#[derive(Clone)]
pub struct BlogPostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl BlogPostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::QueryFailed(e.to_string())
}

fn to_record(model: Model) -> BlogPostRecord {
    BlogPostRecord {
        id: model.id,
        title: model.title,
        content: model.content,
        image_url: model.image_url,
        published_at: model.published_at,
        created_at: model.created_at,
    }
}

#[async_trait]
impl BlogPostRepository for BlogPostRepositoryPostgres {
    async fn insert(&self, data: NewBlogPost) -> Result<BlogPostRecord, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            content: Set(data.content),
            image_url: Set(data.image_url),
            // Publication date is server-assigned, exactly once
            published_at: Set(now),
            created_at: Set(now),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(inserted))
    }

    async fn list_all(&self) -> Result<Vec<BlogPostRecord>, ContentRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(to_record).collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}
