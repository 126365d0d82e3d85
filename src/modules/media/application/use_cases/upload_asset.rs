use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::media::application::domain::{MediaKind, PolicyViolation, UploadPolicy};
use crate::media::application::ports::outgoing::{MediaStore, MediaStoreError};

#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file_name: String,
    pub kind: MediaKind,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UploadedAsset {
    pub secure_url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum UploadError {
    #[error(transparent)]
    Rejected(#[from] PolicyViolation),

    #[error("Storage error: {0}")]
    StorageFailed(String),
}

#[async_trait]
pub trait UploadAssetUseCase: Send + Sync {
    async fn execute(&self, request: UploadRequest) -> Result<UploadedAsset, UploadError>;
}

pub struct UploadAssetService {
    policy: UploadPolicy,
    store: Arc<dyn MediaStore>,
}

impl UploadAssetService {
    pub fn new(policy: UploadPolicy, store: Arc<dyn MediaStore>) -> Self {
        Self { policy, store }
    }

    /// Object keys are prefixed with a fresh UUID so two uploads of
    /// `photo.png` never clobber each other.
    fn object_name(file_name: &str) -> String {
        let safe: String = file_name
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();

        format!("{}-{}", Uuid::new_v4(), safe)
    }
}

#[async_trait]
impl UploadAssetUseCase for UploadAssetService {
    async fn execute(&self, request: UploadRequest) -> Result<UploadedAsset, UploadError> {
        self.policy.check(
            request.kind,
            &request.content_type,
            &request.file_name,
            request.bytes.len() as u64,
        )?;

        let object_name = Self::object_name(&request.file_name);

        let stored = self
            .store
            .put_object(
                &self.policy.bucket_name,
                &object_name,
                &request.content_type,
                request.bytes,
            )
            .await
            .map_err(|e| match e {
                MediaStoreError::AccessDenied
                | MediaStoreError::BucketNotFound
                | MediaStoreError::Infrastructure(_) => UploadError::StorageFailed(e.to_string()),
            })?;

        Ok(UploadedAsset {
            secure_url: stored.public_url,
        })
    }
}
