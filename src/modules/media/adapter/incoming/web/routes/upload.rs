use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::media::application::domain::MediaKind;
use crate::media::application::use_cases::upload_asset::{UploadError, UploadRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{post, web, HttpRequest, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

#[derive(Deserialize)]
pub struct UploadQuery {
    pub file_name: String,
    pub kind: String,
}

/// Field name matches what the dashboard expects from its media host.
#[derive(Serialize, ToSchema)]
pub struct UploadResponseBody {
    #[serde(rename = "secureUrl")]
    #[schema(example = "https://storage.googleapis.com/bucket/abc-photo.png")]
    pub secure_url: String,
}

/// Upload a media asset
///
/// Admin only. The raw file is the request body; `file_name` and `kind`
/// (image|video) are query parameters and the Content-Type header carries
/// the MIME type. Returns a permanent public URL to thread into content.
#[utoipa::path(
    post,
    path = "/api/media/upload",
    tag = "media",
    params(
        ("file_name" = String, Query, description = "Original file name"),
        ("kind" = String, Query, description = "image or video"),
    ),
    request_body(content = Vec<u8>, description = "Raw file bytes"),
    responses(
        (
            status = 200,
            description = "Asset stored",
            body = inline(SuccessResponse<UploadResponseBody>)
        ),
        (status = 400, description = "Rejected by the upload policy", body = ErrorResponse),
        (status = 401, description = "Missing or invalid bearer token", body = ErrorResponse),
        (status = 502, description = "Media storage unavailable", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/media/upload")]
pub async fn upload_media_handler(
    _session: AdminSession,
    query: web::Query<UploadQuery>,
    http_req: HttpRequest,
    body: web::Bytes,
    data: web::Data<AppState>,
) -> impl Responder {
    let query = query.into_inner();

    let kind = match MediaKind::parse(&query.kind) {
        Some(k) => k,
        None => {
            return ApiResponse::bad_request("INVALID_KIND", "kind must be 'image' or 'video'");
        }
    };

    let content_type = match http_req
        .headers()
        .get("Content-Type")
        .and_then(|v| v.to_str().ok())
    {
        Some(ct) if !ct.is_empty() => ct.to_string(),
        _ => {
            return ApiResponse::bad_request(
                "MISSING_CONTENT_TYPE",
                "A Content-Type header is required",
            );
        }
    };

    info!(
        file_name = %query.file_name,
        kind = %kind.as_str(),
        size = body.len(),
        "Media upload attempt"
    );

    let result = data
        .upload_asset
        .execute(UploadRequest {
            file_name: query.file_name,
            kind,
            content_type,
            bytes: body.to_vec(),
        })
        .await;

    match result {
        Ok(asset) => {
            info!("Media upload stored");
            ApiResponse::success(UploadResponseBody {
                secure_url: asset.secure_url,
            })
        }

        Err(UploadError::Rejected(ref violation)) => {
            warn!(reason = %violation, "Media upload rejected by policy");
            ApiResponse::bad_request("UPLOAD_REJECTED", &violation.to_string())
        }

        Err(UploadError::StorageFailed(ref e)) => {
            error!(error = %e, "Media upload failed in storage");
            ApiResponse::bad_gateway("STORAGE_ERROR", "Media storage is unavailable")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::application::domain::PolicyViolation;
    use crate::media::application::use_cases::upload_asset::{UploadAssetUseCase, UploadedAsset};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{issue_test_token, test_token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;

    struct MockUploadSuccess;

    #[async_trait]
    impl UploadAssetUseCase for MockUploadSuccess {
        async fn execute(&self, request: UploadRequest) -> Result<UploadedAsset, UploadError> {
            Ok(UploadedAsset {
                secure_url: format!(
                    "https://storage.googleapis.com/test-bucket/{}",
                    request.file_name
                ),
            })
        }
    }

    struct MockUploadTooLarge;

    #[async_trait]
    impl UploadAssetUseCase for MockUploadTooLarge {
        async fn execute(&self, _request: UploadRequest) -> Result<UploadedAsset, UploadError> {
            Err(UploadError::Rejected(PolicyViolation::FileTooLarge {
                kind: "image",
                limit_bytes: 10,
            }))
        }
    }

    struct MockUploadStorageDown;

    #[async_trait]
    impl UploadAssetUseCase for MockUploadStorageDown {
        async fn execute(&self, _request: UploadRequest) -> Result<UploadedAsset, UploadError> {
            Err(UploadError::StorageFailed("bucket unreachable".to_string()))
        }
    }

    #[actix_web::test]
    async fn test_upload_returns_the_secure_url() {
        let app_state = TestAppStateBuilder::default()
            .with_upload_asset(MockUploadSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(upload_media_handler),
        )
        .await;

        let token = issue_test_token("admin@example.com");
        let req = test::TestRequest::post()
            .uri("/api/media/upload?file_name=photo.png&kind=image")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .insert_header(("Content-Type", "image/png"))
            .set_payload(vec![1u8, 2, 3])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 200);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["success"], true);
        assert_eq!(
            body["data"]["secureUrl"],
            "https://storage.googleapis.com/test-bucket/photo.png"
        );
    }

    #[actix_web::test]
    async fn test_upload_requires_auth() {
        let app_state = TestAppStateBuilder::default()
            .with_upload_asset(MockUploadSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(upload_media_handler),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/media/upload?file_name=photo.png&kind=image")
            .insert_header(("Content-Type", "image/png"))
            .set_payload(vec![1u8])
            .to_request();

        assert_eq!(test::call_service(&app, req).await.status(), 401);
    }

    #[actix_web::test]
    async fn test_unknown_kind_is_a_bad_request() {
        let app_state = TestAppStateBuilder::default()
            .with_upload_asset(MockUploadSuccess)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(upload_media_handler),
        )
        .await;

        let token = issue_test_token("admin@example.com");
        let req = test::TestRequest::post()
            .uri("/api/media/upload?file_name=a.mp3&kind=audio")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .insert_header(("Content-Type", "audio/mpeg"))
            .set_payload(vec![1u8])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "INVALID_KIND");
    }

    #[actix_web::test]
    async fn test_policy_rejection_maps_to_400() {
        let app_state = TestAppStateBuilder::default()
            .with_upload_asset(MockUploadTooLarge)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(upload_media_handler),
        )
        .await;

        let token = issue_test_token("admin@example.com");
        let req = test::TestRequest::post()
            .uri("/api/media/upload?file_name=big.png&kind=image")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .insert_header(("Content-Type", "image/png"))
            .set_payload(vec![0u8; 64])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 400);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "UPLOAD_REJECTED");
    }

    #[actix_web::test]
    async fn test_storage_failure_maps_to_bad_gateway() {
        let app_state = TestAppStateBuilder::default()
            .with_upload_asset(MockUploadStorageDown)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(upload_media_handler),
        )
        .await;

        let token = issue_test_token("admin@example.com");
        let req = test::TestRequest::post()
            .uri("/api/media/upload?file_name=photo.png&kind=image")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .insert_header(("Content-Type", "image/png"))
            .set_payload(vec![1u8])
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 502);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "STORAGE_ERROR");
    }
}
