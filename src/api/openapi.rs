use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::auth::adapter::incoming::web::routes::login::{LoginRequestDto, LoginResponseBody};
use crate::auth::adapter::incoming::web::routes::session::SessionStatusBody;
use crate::content::adapter::incoming::web::routes::hero_image::{HeroImageDto, SetHeroImageDto};
use crate::content::adapter::incoming::web::routes::projects::{CreateProjectDto, ProjectDto};
use crate::media::adapter::incoming::web::routes::upload::UploadResponseBody;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Foliode API",
        version = "1.0.0",
        description = "Portfolio site backend: public content reads plus an authenticated back-office"
    ),
    paths(
        // Auth
        crate::auth::adapter::incoming::web::routes::login::login_handler,
        crate::auth::adapter::incoming::web::routes::session::check_session_handler,

        // Content (projects are representative; the other collections mirror them)
        crate::content::adapter::incoming::web::routes::projects::get_public_projects_handler,
        crate::content::adapter::incoming::web::routes::projects::create_project_handler,
        crate::content::adapter::incoming::web::routes::projects::delete_project_handler,
        crate::content::adapter::incoming::web::routes::hero_image::get_public_hero_image_handler,
        crate::content::adapter::incoming::web::routes::hero_image::set_hero_image_handler,
        crate::content::adapter::incoming::web::routes::hero_image::delete_hero_image_handler,

        // Media
        crate::media::adapter::incoming::web::routes::upload::upload_media_handler,
    ),
    components(
        schemas(
            SuccessResponse<LoginResponseBody>,
            ErrorResponse,
            ErrorDetail,

            LoginRequestDto,
            LoginResponseBody,
            SessionStatusBody,

            ProjectDto,
            CreateProjectDto,
            HeroImageDto,
            SetHeroImageDto,

            UploadResponseBody
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Operator authentication"),
        (name = "content", description = "Portfolio content collections"),
        (name = "media", description = "Media uploads"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Access token from POST /api/auth/login"))
                        .build(),
                ),
            )
        }
    }
}
