use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::content::application::ports::outgoing::experiences::{ExperienceRecord, NewExperience};
use crate::content::application::use_cases::ContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, post, web, Responder};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Serialize)]
pub struct ExperienceDto {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<ExperienceRecord> for ExperienceDto {
    fn from(record: ExperienceRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            company: record.company,
            period: record.period,
            description: record.description,
            created_at: record.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateExperienceDto {
    pub title: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[get("/api/public/experiences")]
pub async fn get_public_experiences_handler(data: web::Data<AppState>) -> impl Responder {
    match data.experiences.list.execute().await {
        Ok(records) => ApiResponse::success(
            records
                .into_iter()
                .map(ExperienceDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to list experiences");
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/experiences")]
pub async fn create_experience_handler(
    _session: AdminSession,
    req: web::Json<CreateExperienceDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let result = data
        .experiences
        .add
        .execute(NewExperience {
            title: dto.title,
            company: dto.company,
            period: dto.period,
            description: dto.description,
        })
        .await;

    match result {
        Ok(record) => {
            info!(experience_id = %record.id, "Experience created");
            ApiResponse::created(ExperienceDto::from(record))
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to create experience");
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/experiences/{id}")]
pub async fn delete_experience_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.experiences.delete.execute(id).await {
        Ok(()) => {
            info!(experience_id = %id, "Experience deleted");
            ApiResponse::no_content()
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to delete experience");
            ApiResponse::internal_error()
        }
    }
}
