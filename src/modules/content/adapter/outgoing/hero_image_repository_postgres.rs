use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, Set};
use std::sync::Arc;

use crate::content::adapter::outgoing::sea_orm_entity::hero_image::{
    ActiveModel, Column, Entity, Model,
};
use crate::content::application::ports::outgoing::hero_image::{
    HeroImageRecord, HeroImageRepository,
};
use crate::content::application::ports::outgoing::ContentRepositoryError;

/// Every row ever written carries this key, so the table can't grow past
/// one row and `set` becomes a plain upsert.
const SINGLETON_KEY: &str = "hero";

#[derive(Clone)]
pub struct HeroImageRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl HeroImageRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::QueryFailed(e.to_string())
}

fn to_record(model: Model) -> HeroImageRecord {
    HeroImageRecord {
        image_url: model.image_url,
        updated_at: model.updated_at,
    }
}

#[async_trait]
impl HeroImageRepository for HeroImageRepositoryPostgres {
    async fn get(&self) -> Result<Option<HeroImageRecord>, ContentRepositoryError> {
        let model = Entity::find_by_id(SINGLETON_KEY.to_string())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(model.map(to_record))
    }

    async fn set(&self, image_url: String) -> Result<HeroImageRecord, ContentRepositoryError> {
        let now = Utc::now().fixed_offset();

        let model = ActiveModel {
            singleton_key: Set(SINGLETON_KEY.to_string()),
            image_url: Set(image_url.clone()),
            updated_at: Set(now),
        };

        Entity::insert(model)
            .on_conflict(
                OnConflict::column(Column::SingletonKey)
                    .update_columns([Column::ImageUrl, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(HeroImageRecord {
            image_url,
            updated_at: now,
        })
    }

    async fn delete(&self) -> Result<(), ContentRepositoryError> {
        Entity::delete_by_id(SINGLETON_KEY.to_string())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}
