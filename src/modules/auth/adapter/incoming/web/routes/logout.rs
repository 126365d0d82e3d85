use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::auth::application::use_cases::logout_operator::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::{error, info};

#[derive(Serialize)]
struct LogoutResponseBody {
    message: String,
}

/// Signs the current operator out by revoking the presented access token.
#[post("/api/auth/logout")]
pub async fn logout_handler(session: AdminSession, data: web::Data<AppState>) -> impl Responder {
    info!(operator = %session.operator_email, "Logout attempt");

    match data.logout_operator.execute(&session.token).await {
        Ok(()) => {
            info!("Operator logged out successfully");
            ApiResponse::success(LogoutResponseBody {
                message: "Logged out successfully".to_string(),
            })
        }

        Err(LogoutError::InvalidToken) => {
            // The extractor already verified the token, so this only fires
            // when it expires between extraction and revocation.
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid or expired token")
        }

        Err(LogoutError::BlacklistError(ref e)) => {
            error!(error = %e, "Token revocation failed during logout");
            // The client drops the token either way.
            ApiResponse::success(LogoutResponseBody {
                message: "Logged out successfully".to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::application::use_cases::logout_operator::LogoutOperatorUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{issue_test_token, test_token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockLogoutSuccess;

    #[async_trait]
    impl LogoutOperatorUseCase for MockLogoutSuccess {
        async fn execute(&self, _access_token: &str) -> Result<(), LogoutError> {
            Ok(())
        }
    }

    #[derive(Clone)]
    struct MockLogoutBlacklistError;

    #[async_trait]
    impl LogoutOperatorUseCase for MockLogoutBlacklistError {
        async fn execute(&self, _access_token: &str) -> Result<(), LogoutError> {
            Err(LogoutError::BlacklistError("redis down".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_logout_success() {
        let app_state = TestAppStateBuilder::default()
            .with_logout_operator(MockLogoutSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(logout_handler),
        )
        .await;

        let token = issue_test_token("admin@example.com");
        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["message"], "Logged out successfully");
    }

    #[actix_web::test]
    async fn test_logout_without_token_is_unauthorized() {
        let app_state = TestAppStateBuilder::default()
            .with_logout_operator(MockLogoutSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(logout_handler),
        )
        .await;

        let req = test::TestRequest::post().uri("/api/auth/logout").to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "MISSING_AUTH_HEADER");
    }

    #[actix_web::test]
    async fn test_logout_with_garbage_token_is_unauthorized() {
        let app_state = TestAppStateBuilder::default()
            .with_logout_operator(MockLogoutSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(logout_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .insert_header(("Authorization", "Bearer not.a.jwt"))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 401);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_TOKEN");
    }

    #[actix_web::test]
    async fn test_logout_survives_blacklist_failure() {
        let app_state = TestAppStateBuilder::default()
            .with_logout_operator(MockLogoutBlacklistError)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(logout_handler),
        )
        .await;

        let token = issue_test_token("admin@example.com");
        let req = test::TestRequest::post()
            .uri("/api/auth/logout")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
    }
}
