use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{
    TokenBlacklistRepository, TokenError, TokenProvider,
};

#[derive(Debug, Clone, thiserror::Error)]
pub enum LogoutError {
    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Blacklist error: {0}")]
    BlacklistError(String),
}

#[async_trait]
pub trait LogoutOperatorUseCase: Send + Sync {
    async fn execute(&self, access_token: &str) -> Result<(), LogoutError>;
}

pub struct LogoutOperatorService {
    tokens: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklistRepository>,
}

impl LogoutOperatorService {
    pub fn new(
        tokens: Arc<dyn TokenProvider>,
        blacklist: Arc<dyn TokenBlacklistRepository>,
    ) -> Self {
        Self { tokens, blacklist }
    }
}

#[async_trait]
impl LogoutOperatorUseCase for LogoutOperatorService {
    async fn execute(&self, access_token: &str) -> Result<(), LogoutError> {
        let claims = self.tokens.verify_token(access_token).map_err(|e| match e {
            TokenError::Expired => LogoutError::InvalidToken,
            _ => LogoutError::InvalidToken,
        })?;

        // Park the token until its natural expiry; no point keeping
        // blacklist entries for tokens that can no longer verify.
        let remaining = claims.exp - Utc::now().timestamp();
        if remaining <= 0 {
            return Ok(());
        }

        self.blacklist
            .blacklist_token(access_token, remaining as u64)
            .await
            .map_err(LogoutError::BlacklistError)
    }
}
