use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::adapter::outgoing::sea_orm_entity::experiences::{
    ActiveModel, Column, Entity, Model,
};
use crate::content::application::ports::outgoing::experiences::{
    ExperienceRecord, ExperienceRepository, NewExperience,
};
use crate::content::application::ports::outgoing::ContentRepositoryError;

#[derive(Clone)]
pub struct ExperienceRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ExperienceRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::QueryFailed(e.to_string())
}

fn to_record(model: Model) -> ExperienceRecord {
    ExperienceRecord {
        id: model.id,
        title: model.title,
        company: model.company,
        period: model.period,
        description: model.description,
        created_at: model.created_at,
    }
}

#[async_trait]
impl ExperienceRepository for ExperienceRepositoryPostgres {
    async fn insert(&self, data: NewExperience) -> Result<ExperienceRecord, ContentRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            company: Set(data.company),
            period: Set(data.period),
            description: Set(data.description),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(inserted))
    }

    async fn list_all(&self) -> Result<Vec<ExperienceRecord>, ContentRepositoryError> {
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
