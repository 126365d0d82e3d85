use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::OnceCell;

use crate::media::application::ports::outgoing::{MediaStore, MediaStoreError, StoredObject};

/// google-cloud-storage uses a bucket resource name format:
/// `projects/_/buckets/{bucket}`
///
/// Keeping this here makes it hard to accidentally pass a raw bucket name.
fn bucket_resource(bucket: &str) -> String {
    format!("projects/_/buckets/{}", bucket)
}

/// Uploaded objects are served straight off the bucket's public endpoint,
/// so the returned URL never expires.
fn public_url(bucket: &str, object_name: &str) -> String {
    format!("https://storage.googleapis.com/{}/{}", bucket, object_name)
}

fn map_write_error(msg: &str) -> MediaStoreError {
    let m = msg.to_lowercase();

    if m.contains("permission") || m.contains("forbidden") || m.contains("denied") {
        MediaStoreError::AccessDenied
    } else if m.contains("bucket") && (m.contains("not found") || m.contains("404")) {
        MediaStoreError::BucketNotFound
    } else {
        MediaStoreError::Infrastructure(msg.to_string())
    }
}

/// Internal seam to make the adapter testable without mocking
/// google-cloud-storage types/streams.
#[async_trait]
trait GcsClient: Send + Sync {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String>;
}

#[cfg(test)]
struct ArcGcsClient(Arc<dyn GcsClient>);

#[cfg(test)]
#[async_trait]
impl GcsClient for ArcGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        self.0
            .upload_object(bucket_resource, object_name, content_type, bytes)
            .await
    }
}

#[derive(Clone)]
pub struct GcsMediaStore {
    client: Arc<OnceCell<Box<dyn GcsClient>>>,
}

impl GcsMediaStore {
    /// Synchronous constructor; the client is initialized lazily on first use.
    pub fn new() -> Self {
        Self {
            client: Arc::new(OnceCell::new()),
        }
    }

    async fn get_client(&self) -> Result<&dyn GcsClient, Box<dyn std::error::Error + Send + Sync>> {
        self.client
            .get_or_try_init(|| async {
                let real_client = RealGcsClient::new().await?;
                Ok(Box::new(real_client) as Box<dyn GcsClient>)
            })
            .await
            .map(|boxed| &**boxed)
    }

    #[cfg(test)]
    fn with_client(client: Arc<dyn GcsClient>) -> Self {
        let once = OnceCell::new();
        let _ = once.set(Box::new(ArcGcsClient(client)) as Box<dyn GcsClient>);

        Self {
            client: Arc::new(once),
        }
    }
}

impl Default for GcsMediaStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MediaStore for GcsMediaStore {
    async fn put_object(
        &self,
        bucket: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, MediaStoreError> {
        let client = self
            .get_client()
            .await
            .map_err(|e| MediaStoreError::Infrastructure(e.to_string()))?;

        client
            .upload_object(&bucket_resource(bucket), object_name, content_type, bytes)
            .await
            .map_err(|e| map_write_error(&e))?;

        Ok(StoredObject {
            public_url: public_url(bucket, object_name),
        })
    }
}

// ============================================================================
// Real Google Cloud Storage client (google-cloud-storage)
// ============================================================================

struct RealGcsClient {
    storage: google_cloud_storage::client::Storage,
}

impl RealGcsClient {
    async fn new() -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        tracing::info!("Initializing GCS client...");

        let storage = google_cloud_storage::client::Storage::builder()
            .build()
            .await
            .map_err(|e| {
                tracing::error!("Failed to build GCS storage client: {:?}", e);
                e
            })?;

        tracing::info!("GCS storage client created");

        Ok(Self { storage })
    }
}

#[async_trait]
impl GcsClient for RealGcsClient {
    async fn upload_object(
        &self,
        bucket_resource: &str,
        object_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<(), String> {
        let payload = bytes::Bytes::from(bytes);

        self.storage
            .write_object(bucket_resource.to_string(), object_name.to_string(), payload)
            .set_content_type(content_type.to_string())
            .send_unbuffered()
            .await
            .map_err(|e| e.to_string())?;

        Ok(())
    }
}
