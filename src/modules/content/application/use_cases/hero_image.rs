use async_trait::async_trait;
use std::sync::Arc;

use super::ContentError;
use crate::content::application::ports::outgoing::hero_image::{
    HeroImageRecord, HeroImageRepository,
};

#[async_trait]
pub trait GetHeroImageUseCase: Send + Sync {
    async fn execute(&self) -> Result<Option<HeroImageRecord>, ContentError>;
}

#[async_trait]
pub trait SetHeroImageUseCase: Send + Sync {
    async fn execute(&self, image_url: String) -> Result<HeroImageRecord, ContentError>;
}

#[async_trait]
pub trait DeleteHeroImageUseCase: Send + Sync {
    async fn execute(&self) -> Result<(), ContentError>;
}

pub struct HeroImageService {
    repository: Arc<dyn HeroImageRepository>,
}

impl HeroImageService {
    pub fn new(repository: Arc<dyn HeroImageRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl GetHeroImageUseCase for HeroImageService {
    async fn execute(&self) -> Result<Option<HeroImageRecord>, ContentError> {
        Ok(self.repository.get().await?)
    }
}

#[async_trait]
impl SetHeroImageUseCase for HeroImageService {
    async fn execute(&self, image_url: String) -> Result<HeroImageRecord, ContentError> {
        Ok(self.repository.set(image_url).await?)
    }
}

#[async_trait]
impl DeleteHeroImageUseCase for HeroImageService {
    async fn execute(&self) -> Result<(), ContentError> {
        Ok(self.repository.delete().await?)
    }
}
