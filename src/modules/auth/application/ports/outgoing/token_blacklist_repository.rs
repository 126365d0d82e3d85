use async_trait::async_trait;

/// Revoked-session store. Sign-out parks the token here until its
/// natural expiry; the session probe consults it.
#[async_trait]
pub trait TokenBlacklistRepository: Send + Sync {
    async fn blacklist_token(&self, token: &str, ttl_seconds: u64) -> Result<(), String>;

    async fn is_token_blacklisted(&self, token: &str) -> Result<bool, String>;
}
