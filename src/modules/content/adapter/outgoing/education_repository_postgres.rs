use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::adapter::outgoing::sea_orm_entity::education::{
    ActiveModel, Column, Entity, Model,
};
use crate::content::application::ports::outgoing::education::{
    EducationRecord, EducationRepository, NewEducation,
};
use crate::content::application::ports::outgoing::ContentRepositoryError;

#[derive(Clone)]
pub struct EducationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl EducationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::QueryFailed(e.to_string())
}

fn to_record(model: Model) -> EducationRecord {
    EducationRecord {
        id: model.id,
        degree: model.degree,
        institution: model.institution,
        period: model.period,
        description: model.description,
        created_at: model.created_at,
    }
}

#[async_trait]
impl EducationRepository for EducationRepositoryPostgres {
    async fn insert(&self, data: NewEducation) -> Result<EducationRecord, ContentRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            degree: Set(data.degree),
            institution: Set(data.institution),
            period: Set(data.period),
            description: Set(data.description),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(inserted))
    }

    async fn list_all(&self) -> Result<Vec<EducationRecord>, ContentRepositoryError> {
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
