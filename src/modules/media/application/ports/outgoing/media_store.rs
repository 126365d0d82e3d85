use async_trait::async_trait;

/// A stored asset. The URL is permanent and publicly retrievable; replacing
/// or deleting the content that references it never removes the object.
#[derive(Debug, Clone, PartialEq)]
pub struct StoredObject {
    pub public_url: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum MediaStoreError {
    #[error("Access to the storage bucket was denied")]
    AccessDenied,

    #[error("Storage bucket not found")]
    BucketNotFound,

    #[error("Storage infrastructure error: {0}")]
    Infrastructure(String),
}

#[async_trait]
pub trait MediaStore: Send + Sync {
    async fn put_object(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, MediaStoreError>;
}
