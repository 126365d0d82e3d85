use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, Set};
use std::sync::Arc;
use uuid::Uuid;

use crate::content::adapter::outgoing::sea_orm_entity::projects::{
    ActiveModel, Column, Entity, Model,
};
use crate::content::application::ports::outgoing::projects::{
    NewProject, ProjectRecord, ProjectRepository,
};
use crate::content::application::ports::outgoing::ContentRepositoryError;

#[derive(Clone)]
pub struct ProjectRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ProjectRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

fn map_db_err(e: DbErr) -> ContentRepositoryError {
    ContentRepositoryError::QueryFailed(e.to_string())
}

fn to_record(model: Model) -> ProjectRecord {
    ProjectRecord {
        id: model.id,
        title: model.title,
        description: model.description,
        stack: model.stack,
        image_url: model.image_url,
        video_url: model.video_url,
        created_at: model.created_at,
    }
}

#[async_trait]
impl ProjectRepository for ProjectRepositoryPostgres {
    async fn insert(&self, data: NewProject) -> Result<ProjectRecord, ContentRepositoryError> {
        let model = ActiveModel {
            id: Set(Uuid::new_v4()),
            title: Set(data.title),
            description: Set(data.description),
            stack: Set(data.stack),
            image_url: Set(data.image_url),
            video_url: Set(data.video_url),
            created_at: Set(Utc::now().fixed_offset()),
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;
        Ok(to_record(inserted))
    }

    async fn list_all(&self) -> Result<Vec<ProjectRecord>, ContentRepositoryError> {
        let models = Entity::find()
            .order_by_asc(Column::CreatedAt)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(to_record).collect())
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<(), ContentRepositoryError> {
        // rows_affected == 0 (already gone) is still success
        Entity::delete_by_id(id)
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};

    fn sample_model() -> Model {
        Model {
            id: Uuid::new_v4(),
            title: "Portfolio site".to_string(),
            description: "This very site".to_string(),
            stack: "Rust, Actix".to_string(),
            image_url: None,
            video_url: None,
            created_at: Utc::now().fixed_offset(),
        }
    }

    #[tokio::test]
    async fn insert_returns_the_stored_row() {
        let stored = sample_model();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![stored.clone()]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let record = repo
            .insert(NewProject {
                title: "Portfolio site".to_string(),
                description: "This very site".to_string(),
                stack: "Rust, Actix".to_string(),
                image_url: None,
                video_url: None,
            })
            .await
            .unwrap();

        assert_eq!(record.id, stored.id);
        assert_eq!(record.title, "Portfolio site");
    }

    #[tokio::test]
    async fn delete_of_an_absent_row_is_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        repo.delete_by_id(Uuid::new_v4()).await.unwrap();
    }

    #[tokio::test]
    async fn list_maps_models_into_records() {
        let a = sample_model();
        let b = sample_model();
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![a.clone(), b.clone()]])
            .into_connection();

        let repo = ProjectRepositoryPostgres::new(Arc::new(db));
        let listed = repo.list_all().await.unwrap();

        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, a.id);
        assert_eq!(listed[1].id, b.id);
    }
}
