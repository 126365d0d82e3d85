use actix_web::{post, web, Responder};
use serde::Serialize;
use tracing::error;

use crate::contact::application::use_cases::submit_contact::SubmitContactError;
use crate::contact::application::use_cases::ContactSubmission;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize)]
struct ContactReceipt {
    message: String,
}

/// Public endpoint; validation happens during deserialization so a
/// malformed payload never reaches the use case.
#[post("/api/contact")]
pub async fn submit_contact_handler(
    payload: web::Json<ContactSubmission>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.submit_contact.execute(payload.into_inner()).await {
        Ok(()) => ApiResponse::success(ContactReceipt {
            message: "Message sent".to_string(),
        }),
        Err(SubmitContactError::DeliveryFailed(reason)) => {
            error!(error = %reason, "contact relay failed");
            ApiResponse::bad_gateway("EMAIL_DELIVERY_FAILED", "Could not deliver your message")
        }
    }
}
