use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::content::application::ports::outgoing::skills::{NewSkill, SkillRecord};
use crate::content::application::use_cases::ContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, post, web, Responder};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Serialize)]
pub struct SkillDto {
    pub id: Uuid,
    pub name: String,
    pub proficiency: i32,
    pub created_at: DateTime<FixedOffset>,
}

impl From<SkillRecord> for SkillDto {
    fn from(record: SkillRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            proficiency: record.proficiency,
            created_at: record.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateSkillDto {
    pub name: String,
    pub proficiency: i32,
}

#[get("/api/public/skills")]
pub async fn get_public_skills_handler(data: web::Data<AppState>) -> impl Responder {
    match data.skills.list.execute().await {
        Ok(records) => {
            ApiResponse::success(records.into_iter().map(SkillDto::from).collect::<Vec<_>>())
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to list skills");
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/skills")]
pub async fn create_skill_handler(
    _session: AdminSession,
    req: web::Json<CreateSkillDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    // Proficiency is stored as submitted, range is a dashboard convention
    let result = data
        .skills
        .add
        .execute(NewSkill {
            name: dto.name,
            proficiency: dto.proficiency,
        })
        .await;

    match result {
        Ok(record) => {
            info!(skill_id = %record.id, "Skill created");
            ApiResponse::created(SkillDto::from(record))
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to create skill");
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/skills/{id}")]
pub async fn delete_skill_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.skills.delete.execute(id).await {
        Ok(()) => {
            info!(skill_id = %id, "Skill deleted");
            ApiResponse::no_content()
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to delete skill");
            ApiResponse::internal_error()
        }
    }
}
