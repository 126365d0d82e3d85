use crate::api::schemas::SuccessResponse;
use crate::auth::adapter::incoming::web::extractors::auth::extract_token_from_header;
use crate::auth::application::use_cases::check_session::CheckSessionError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{get, web, HttpRequest, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

#[derive(Serialize, ToSchema)]
pub struct SessionStatusBody {
    /// Whether the presented token still identifies a live session
    #[schema(example = true)]
    authenticated: bool,
}

/// Session probe
///
/// Reports whether the bearer token (if any) still identifies a live
/// operator session. Never returns an auth error: an absent, invalid or
/// revoked token is simply an unauthenticated answer.
#[utoipa::path(
    get,
    path = "/api/auth/session",
    tag = "auth",
    responses(
        (
            status = 200,
            description = "Session status",
            body = inline(SuccessResponse<SessionStatusBody>),
            example = json!({
                "success": true,
                "data": { "authenticated": true }
            })
        ),
    ),
    security(
        ("bearer_auth" = [])
    )
)]
#[get("/api/auth/session")]
pub async fn check_session_handler(req: HttpRequest, data: web::Data<AppState>) -> impl Responder {
    let token = extract_token_from_header(&req);

    match data.check_session.execute(token.as_deref()).await {
        Ok(status) => ApiResponse::success(SessionStatusBody {
            authenticated: status.authenticated,
        }),

        Err(CheckSessionError::BlacklistError(ref e)) => {
            error!(error = %e, "Session probe could not reach the blacklist");
            ApiResponse::internal_error()
        }
    }
}
