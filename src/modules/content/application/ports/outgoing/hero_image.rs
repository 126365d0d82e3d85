use async_trait::async_trait;
use chrono::{DateTime, FixedOffset};

use super::ContentRepositoryError;

/// The landing-page hero image. A singleton: the table holds at most one
/// row and `set` is a create-or-replace upsert with no history.
#[derive(Debug, Clone, PartialEq)]
pub struct HeroImageRecord {
    pub image_url: String,
    pub updated_at: DateTime<FixedOffset>,
}

#[async_trait]
pub trait HeroImageRepository: Send + Sync {
    async fn get(&self) -> Result<Option<HeroImageRecord>, ContentRepositoryError>;

    async fn set(&self, image_url: String) -> Result<HeroImageRecord, ContentRepositoryError>;

    /// Idempotent; clearing an unset hero is success.
    async fn delete(&self) -> Result<(), ContentRepositoryError>;
}
