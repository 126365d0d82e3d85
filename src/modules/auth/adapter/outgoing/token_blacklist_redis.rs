use async_trait::async_trait;
use deadpool_redis::Pool;
use redis::AsyncCommands;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::auth::application::ports::outgoing::token_blacklist_repository::TokenBlacklistRepository;

/// Redis-backed revoked-session store. Tokens are keyed by their
/// SHA-256 digest so raw JWTs never land in Redis.
pub struct RedisTokenBlacklistRepository {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklistRepository {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }

    fn key_for(token: &str) -> String {
        let digest = Sha256::digest(token.as_bytes());
        format!("revoked_session:{:x}", digest)
    }
}

#[async_trait]
impl TokenBlacklistRepository for RedisTokenBlacklistRepository {
    async fn blacklist_token(&self, token: &str, ttl_seconds: u64) -> Result<(), String> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| format!("Redis connection error: {}", e))?;

        let _: () = conn
            .set_ex(Self::key_for(token), "1", ttl_seconds)
            .await
            .map_err(|e| format!("Failed to blacklist token: {}", e))?;

        Ok(())
    }

    async fn is_token_blacklisted(&self, token: &str) -> Result<bool, String> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| format!("Redis connection error: {}", e))?;

        let exists: bool = conn
            .exists(Self::key_for(token))
            .await
            .map_err(|e| format!("Failed to check token status: {}", e))?;

        Ok(exists)
    }
}
