use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::content::application::use_cases::ContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, put, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use utoipa::ToSchema;

/// `image_url` is null until the operator sets a hero image.
#[derive(Serialize, ToSchema)]
pub struct HeroImageDto {
    #[schema(example = "https://storage.googleapis.com/bucket/hero.png")]
    pub image_url: Option<String>,
}

#[derive(Deserialize, ToSchema)]
pub struct SetHeroImageDto {
    #[schema(example = "https://storage.googleapis.com/bucket/hero.png")]
    pub image_url: String,
}

/// Current hero image
///
/// Public; the landing page renders a fallback when the URL is null.
#[utoipa::path(
    get,
    path = "/api/public/hero-image",
    tag = "content",
    responses(
        (
            status = 200,
            description = "Current hero image URL, or null when unset",
            body = inline(SuccessResponse<HeroImageDto>)
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/public/hero-image")]
pub async fn get_public_hero_image_handler(data: web::Data<AppState>) -> impl Responder {
    match data.hero.get.execute().await {
        Ok(record) => ApiResponse::success(HeroImageDto {
            image_url: record.map(|r| r.image_url),
        }),
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to read hero image");
            ApiResponse::internal_error()
        }
    }
}

/// Set the hero image
///
/// Admin only. Create-or-replace: a second PUT overwrites the first, no
/// history is kept and the previous asset stays on the media host.
#[utoipa::path(
    put,
    path = "/api/hero-image",
    tag = "content",
    request_body = SetHeroImageDto,
    responses(
        (
            status = 200,
            description = "Hero image replaced",
            body = inline(SuccessResponse<HeroImageDto>)
        ),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[put("/api/hero-image")]
pub async fn set_hero_image_handler(
    _session: AdminSession,
    req: web::Json<SetHeroImageDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data.hero.set.execute(dto.image_url).await {
        Ok(record) => {
            info!("Hero image replaced");
            ApiResponse::success(HeroImageDto {
                image_url: Some(record.image_url),
            })
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to set hero image");
            ApiResponse::internal_error()
        }
    }
}

/// Clear the hero image
#[utoipa::path(
    delete,
    path = "/api/hero-image",
    tag = "content",
    responses(
        (status = 204, description = "Cleared (or was already unset)"),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/hero-image")]
pub async fn delete_hero_image_handler(
    _session: AdminSession,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.hero.delete.execute().await {
        Ok(()) => {
            info!("Hero image cleared");
            ApiResponse::no_content()
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to clear hero image");
            ApiResponse::internal_error()
        }
    }
}
