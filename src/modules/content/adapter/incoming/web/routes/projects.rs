use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::content::application::ports::outgoing::projects::{NewProject, ProjectRecord};
use crate::content::application::use_cases::ContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, post, web, Responder};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

/// Wire shape of a project. Field names follow the site's JSON contract
/// (`desc`, `image`, `video`) rather than the column names.
#[derive(Serialize, ToSchema)]
pub struct ProjectDto {
    pub id: Uuid,
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    pub stack: String,
    #[serde(rename = "image")]
    pub image_url: Option<String>,
    #[serde(rename = "video")]
    pub video_url: Option<String>,
    pub created_at: DateTime<FixedOffset>,
}

impl From<ProjectRecord> for ProjectDto {
    fn from(record: ProjectRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            stack: record.stack,
            image_url: record.image_url,
            video_url: record.video_url,
            created_at: record.created_at,
        }
    }
}

#[derive(Deserialize, ToSchema)]
pub struct CreateProjectDto {
    #[schema(example = "Portfolio site")]
    pub title: String,
    #[serde(rename = "desc")]
    pub description: String,
    #[schema(example = "Rust, Actix, Postgres")]
    pub stack: String,
    #[serde(rename = "image", default)]
    pub image_url: Option<String>,
    #[serde(rename = "video", default)]
    pub video_url: Option<String>,
}

/// List projects
///
/// Public listing used by the site's projects page and the dashboard alike.
#[utoipa::path(
    get,
    path = "/api/public/projects",
    tag = "content",
    responses(
        (
            status = 200,
            description = "All projects, oldest first",
            body = inline(SuccessResponse<Vec<ProjectDto>>)
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/projects")]
pub async fn get_public_projects_handler(data: web::Data<AppState>) -> impl Responder {
    match data.projects.list.execute().await {
        Ok(records) => ApiResponse::success(
            records.into_iter().map(ProjectDto::from).collect::<Vec<_>>(),
        ),
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to list projects");
            ApiResponse::internal_error()
        }
    }
}

/// Create a project
///
/// Admin only. The id and creation timestamp are server-assigned; editing
/// happens by delete-and-recreate, there is no update endpoint.
#[utoipa::path(
    post,
    path = "/api/projects",
    tag = "content",
    request_body = CreateProjectDto,
    responses(
        (
            status = 201,
            description = "Project created",
            body = inline(SuccessResponse<ProjectDto>)
        ),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/projects")]
pub async fn create_project_handler(
    _session: AdminSession,
    req: web::Json<CreateProjectDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let result = data
        .projects
        .add
        .execute(NewProject {
            title: dto.title,
            description: dto.description,
            stack: dto.stack,
            image_url: dto.image_url,
            video_url: dto.video_url,
        })
        .await;

    match result {
        Ok(record) => {
            info!(project_id = %record.id, "Project created");
            ApiResponse::created(ProjectDto::from(record))
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to create project");
            ApiResponse::internal_error()
        }
    }
}

/// Delete a project
///
/// Admin only and idempotent: deleting an id that is already gone is 204.
#[utoipa::path(
    delete,
    path = "/api/projects/{id}",
    tag = "content",
    params(("id" = Uuid, Path, description = "Project id")),
    responses(
        (status = 204, description = "Deleted (or was already absent)"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/projects/{id}")]
pub async fn delete_project_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.projects.delete.execute(id).await {
        Ok(()) => {
            info!(project_id = %id, "Project deleted");
            ApiResponse::no_content()
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to delete project");
            ApiResponse::internal_error()
        }
    }
}
