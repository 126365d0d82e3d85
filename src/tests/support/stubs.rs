use std::sync::Arc;

use actix_web::web;
use async_trait::async_trait;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::ports::outgoing::TokenProvider;
use crate::auth::application::use_cases::check_session::{
    CheckSessionError, CheckSessionUseCase, SessionStatus,
};
use crate::auth::application::use_cases::login_operator::{
    LoginError, LoginOperatorUseCase, LoginRequest, LoginResponse,
};
use crate::auth::application::use_cases::logout_operator::{LogoutError, LogoutOperatorUseCase};
use crate::contact::application::use_cases::submit_contact::{
    ContactSubmission, SubmitContactError, SubmitContactUseCase,
};
use crate::media::application::use_cases::upload_asset::{
    UploadAssetUseCase, UploadError, UploadRequest, UploadedAsset,
};

pub fn test_jwt_service() -> JwtTokenService {
    JwtTokenService::new(JwtConfig {
        secret_key: "test_secret_key_for_testing_purposes_only".to_string(),
        issuer: "Foliode".to_string(),
        access_token_expiry: 3600,
    })
}

/// A real HS256 token the test token provider will accept.
pub fn issue_test_token(operator_email: &str) -> String {
    test_jwt_service()
        .generate_access_token(operator_email)
        .expect("test token generation cannot fail")
}

/// Registered as app data so the session extractor finds a provider.
pub fn test_token_provider_data() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let provider: Arc<dyn TokenProvider + Send + Sync> = Arc::new(test_jwt_service());
    web::Data::new(provider)
}

#[derive(Default, Clone)]
pub struct StubLoginOperator;

#[async_trait]
impl LoginOperatorUseCase for StubLoginOperator {
    async fn execute(&self, _request: LoginRequest) -> Result<LoginResponse, LoginError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLogoutOperator;

#[async_trait]
impl LogoutOperatorUseCase for StubLogoutOperator {
    async fn execute(&self, _access_token: &str) -> Result<(), LogoutError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubCheckSession;

#[async_trait]
impl CheckSessionUseCase for StubCheckSession {
    async fn execute(
        &self,
        _access_token: Option<&str>,
    ) -> Result<SessionStatus, CheckSessionError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubUploadAsset;

#[async_trait]
impl UploadAssetUseCase for StubUploadAsset {
    async fn execute(&self, _request: UploadRequest) -> Result<UploadedAsset, UploadError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubSubmitContact;

#[async_trait]
impl SubmitContactUseCase for StubSubmitContact {
    async fn execute(&self, _submission: ContactSubmission) -> Result<(), SubmitContactError> {
        unimplemented!("Not used in this test")
    }
}
