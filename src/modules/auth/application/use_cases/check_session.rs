use async_trait::async_trait;
use serde::Serialize;
use std::sync::Arc;

use crate::auth::application::ports::outgoing::{TokenBlacklistRepository, TokenProvider};

/// Backend rendition of the client's `currentSession()` probe.
#[derive(Debug, Clone, Serialize)]
pub struct SessionStatus {
    pub authenticated: bool,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum CheckSessionError {
    #[error("Blacklist error: {0}")]
    BlacklistError(String),
}

#[async_trait]
pub trait CheckSessionUseCase: Send + Sync {
    async fn execute(&self, access_token: Option<&str>)
        -> Result<SessionStatus, CheckSessionError>;
}

pub struct CheckSessionService {
    tokens: Arc<dyn TokenProvider>,
    blacklist: Arc<dyn TokenBlacklistRepository>,
}

impl CheckSessionService {
    pub fn new(
        tokens: Arc<dyn TokenProvider>,
        blacklist: Arc<dyn TokenBlacklistRepository>,
    ) -> Self {
        Self { tokens, blacklist }
    }
}

#[async_trait]
impl CheckSessionUseCase for CheckSessionService {
    async fn execute(
        &self,
        access_token: Option<&str>,
    ) -> Result<SessionStatus, CheckSessionError> {
        let token = match access_token {
            Some(t) if !t.is_empty() => t,
            _ => return Ok(SessionStatus {
                authenticated: false,
            }),
        };

        if self.tokens.verify_token(token).is_err() {
            return Ok(SessionStatus {
                authenticated: false,
            });
        }

        // Signed out earlier? The blacklist wins over a valid signature.
        let revoked = self
            .blacklist
            .is_token_blacklisted(token)
            .await
            .map_err(CheckSessionError::BlacklistError)?;

        Ok(SessionStatus {
            authenticated: !revoked,
        })
    }
}
