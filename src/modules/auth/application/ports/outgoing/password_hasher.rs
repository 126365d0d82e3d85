use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PasswordHasherError {
    #[error("Hashing failed: {0}")]
    HashingFailed(String),

    #[error("Stored hash is malformed: {0}")]
    MalformedHash(String),

    #[error("Hashing task failed")]
    TaskFailed,
}

/// Seam over the password hashing scheme so use cases never touch
/// algorithm-specific types. Async because hashing is CPU-bound and
/// implementations offload it from the event loop.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, PasswordHasherError>;

    /// Returns Ok(false) on a well-formed hash that does not match.
    async fn verify_password(
        &self,
        password: &str,
        stored_hash: &str,
    ) -> Result<bool, PasswordHasherError>;
}
