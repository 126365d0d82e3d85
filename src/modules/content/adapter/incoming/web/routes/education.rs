use crate::auth::adapter::incoming::web::extractors::auth::AdminSession;
use crate::content::application::ports::outgoing::education::{EducationRecord, NewEducation};
use crate::content::application::use_cases::ContentError;
use crate::shared::api::ApiResponse;
use crate::AppState;
use actix_web::{delete, get, post, web, Responder};
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};
use tracing::{error, info};
use uuid::Uuid;

#[derive(Serialize)]
pub struct EducationDto {
    pub id: Uuid,
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
    pub created_at: DateTime<FixedOffset>,
}

impl From<EducationRecord> for EducationDto {
    fn from(record: EducationRecord) -> Self {
        Self {
            id: record.id,
            degree: record.degree,
            institution: record.institution,
            period: record.period,
            description: record.description,
            created_at: record.created_at,
        }
    }
}

#[derive(Deserialize)]
pub struct CreateEducationDto {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub description: String,
}

#[get("/api/public/education")]
pub async fn get_public_education_handler(data: web::Data<AppState>) -> impl Responder {
    match data.education.list.execute().await {
        Ok(records) => ApiResponse::success(
            records
                .into_iter()
                .map(EducationDto::from)
                .collect::<Vec<_>>(),
        ),
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to list education entries");
            ApiResponse::internal_error()
        }
    }
}

#[post("/api/education")]
pub async fn create_education_handler(
    _session: AdminSession,
    req: web::Json<CreateEducationDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let result = data
        .education
        .add
        .execute(NewEducation {
            degree: dto.degree,
            institution: dto.institution,
            period: dto.period,
            description: dto.description,
        })
        .await;

    match result {
        Ok(record) => {
            info!(education_id = %record.id, "Education entry created");
            ApiResponse::created(EducationDto::from(record))
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to create education entry");
            ApiResponse::internal_error()
        }
    }
}

#[delete("/api/education/{id}")]
pub async fn delete_education_handler(
    _session: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let id = path.into_inner();

    match data.education.delete.execute(id).await {
        Ok(()) => {
            info!(education_id = %id, "Education entry deleted");
            ApiResponse::no_content()
        }
        Err(ContentError::DatabaseError(ref e)) => {
            error!(error = %e, "Failed to delete education entry");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::application::use_cases::education::{
        AddEducationUseCase, DeleteEducationUseCase, ListEducationUseCase,
    };
    use crate::content::application::use_cases::EducationOps;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{issue_test_token, test_token_provider_data};
    use actix_web::{test, App};
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Arc;

    struct MockEducationHappy;

    #[async_trait]
    impl AddEducationUseCase for MockEducationHappy {
        async fn execute(&self, data: NewEducation) -> Result<EducationRecord, ContentError> {
            Ok(EducationRecord {
                id: Uuid::new_v4(),
                degree: data.degree,
                institution: data.institution,
                period: data.period,
                description: data.description,
                created_at: Utc::now().fixed_offset(),
            })
        }
    }

    #[async_trait]
    impl ListEducationUseCase for MockEducationHappy {
        async fn execute(&self) -> Result<Vec<EducationRecord>, ContentError> {
            Ok(vec![])
        }
    }

    #[async_trait]
    impl DeleteEducationUseCase for MockEducationHappy {
        async fn execute(&self, _id: Uuid) -> Result<(), ContentError> {
            Ok(())
        }
    }

    #[actix_web::test]
    async fn test_create_education_entry() {
        let app_state = TestAppStateBuilder::default()
            .with_education_ops(EducationOps::from_service(Arc::new(MockEducationHappy)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(create_education_handler),
        )
        .await;

        let token = issue_test_token("admin@example.com");
        let req = test::TestRequest::post()
            .uri("/api/education")
            .insert_header(("Authorization", format!("Bearer {}", token)))
            .set_json(serde_json::json!({
                "degree": "BSc Computer Science",
                "institution": "State University",
                "period": "2015 - 2019",
                "description": "Systems focus"
            }))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 201);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["degree"], "BSc Computer Science");
        assert_eq!(body["data"]["institution"], "State University");
    }

    #[actix_web::test]
    async fn test_mutations_reject_anonymous_callers() {
        let app_state = TestAppStateBuilder::default()
            .with_education_ops(EducationOps::from_service(Arc::new(MockEducationHappy)))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider_data())
                .service(create_education_handler)
                .service(delete_education_handler),
        )
        .await;

        let create = test::TestRequest::post()
            .uri("/api/education")
            .set_json(serde_json::json!({
                "degree": "x", "institution": "y", "period": "z", "description": "w"
            }))
            .to_request();
        assert_eq!(test::call_service(&app, create).await.status(), 401);

        let delete = test::TestRequest::delete()
            .uri(&format!("/api/education/{}", Uuid::new_v4()))
            .to_request();
        assert_eq!(test::call_service(&app, delete).await.status(), 401);
    }
}
