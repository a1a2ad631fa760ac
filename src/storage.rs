use async_trait::async_trait;
use aws_sdk_s3 as s3;
use s3::primitives::ByteStream;
use std::sync::Arc;

// 1. StorageService Contract
/// StorageService
///
/// Defines the abstract contract for all interactions with the object storage layer.
/// This trait allows us to swap the concrete implementation—from the real S3 client
/// (S3StorageClient) in production to the in-memory Mock (MockStorageService) during
/// testing—without affecting the calling handlers.
#[async_trait]
pub trait StorageService: Send + Sync {
    /// Ensures the configured bucket exists. Used primarily in the `Env::Local` setup
    /// to automatically provision the required bucket in MinIO. No-op in production.
    async fn ensure_bucket_exists(&self);

    /// Stores an object under `key` and returns the public URL it is served from.
    ///
    /// Uploads are admin-only and small (site assets), so the bytes are proxied
    /// through the application server rather than via a presigned client upload.
    /// Re-uploading an existing key overwrites it, which is how asset replacement
    /// works in the admin panel.
    ///
    /// # Arguments
    /// * `key`: The object key (path + filename) in the bucket.
    /// * `content_type`: The MIME type reported by the upload form.
    /// * `bytes`: The file contents.
    async fn upload_public(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, String>;
}

// 2. The Real Implementation (S3/MinIO/Supabase)
/// S3StorageClient
///
/// The concrete implementation using the AWS SDK for S3. Due to S3 compatibility,
/// this client transparently handles connections to:
/// - **Local:** Dockerized MinIO instance.
/// - **Production:** Supabase Storage endpoint.
///
/// The `force_path_style(true)` is critical for MinIO and Supabase compatibility,
/// and is also what makes the public URL shape `endpoint/bucket/key`.
#[derive(Clone)]
pub struct S3StorageClient {
    client: s3::Client,
    bucket_name: String,
    // Base of the public URL returned after upload (path-style).
    public_base: String,
}

impl S3StorageClient {
    /// new
    ///
    /// Constructs the S3 client using credentials and configuration from AppConfig.
    pub async fn new(
        endpoint: &str,
        region: &str,
        access_key: &str,
        secret_key: &str,
        bucket: &str,
    ) -> Self {
        let credentials =
            s3::config::Credentials::new(access_key, secret_key, None, None, "static");

        let config = s3::Config::builder()
            .credentials_provider(credentials)
            .endpoint_url(endpoint)
            .region(s3::config::Region::new(region.to_string()))
            .behavior_version_latest()
            // CRITICAL: Forces the client to use path-style addressing (e.g., http://endpoint/bucket/key)
            // which is required for MinIO and Supabase Storage API gateways.
            .force_path_style(true)
            .build();

        let client = s3::Client::from_conf(config);

        Self {
            client,
            bucket_name: bucket.to_string(),
            public_base: format!("{}/{}", endpoint.trim_end_matches('/'), bucket),
        }
    }
}

#[async_trait]
impl StorageService for S3StorageClient {
    /// ensure_bucket_exists
    ///
    /// Calls the S3 CreateBucket API. Since S3 APIs are idempotent, this only creates
    /// the bucket if it does not already exist. It's safe to call at startup.
    async fn ensure_bucket_exists(&self) {
        let _ = self
            .client
            .create_bucket()
            .bucket(&self.bucket_name)
            .send()
            .await;
    }

    /// upload_public
    ///
    /// Proxies the uploaded bytes into the bucket and returns the public URL.
    async fn upload_public(
        &self,
        key: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<String, String> {
        let sanitized_key = sanitize_key(key);

        self.client
            .put_object()
            .bucket(&self.bucket_name)
            .key(&sanitized_key)
            .content_type(content_type)
            // Assets are addressed by stable keys; let CDNs/browsers cache for an hour.
            .cache_control("max-age=3600")
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| e.to_string())?;

        Ok(format!("{}/{}", self.public_base, sanitized_key))
    }
}

/// sanitize_key
///
/// Utility function to prevent path traversal attacks by removing directory
/// navigation components (e.g., `..`, `.`) from a user-provided key segment.
fn sanitize_key(key: &str) -> String {
    key.split('/')
        .filter(|segment| !segment.is_empty() && *segment != ".." && *segment != ".")
        .collect::<Vec<_>>()
        .join("/")
}

// 3. The Mock Implementation (For Unit Tests)
/// MockStorageService
///
/// A mock implementation of `StorageService` used exclusively for unit and integration
/// testing. This allows us to test the upload handler logic without requiring a network
/// connection to S3, isolating the test boundary.
#[derive(Clone)]
pub struct MockStorageService {
    /// When true, all operations return a simulated failure.
    pub should_fail: bool,
}

impl MockStorageService {
    pub fn new() -> Self {
        Self { should_fail: false }
    }

    pub fn new_failing() -> Self {
        Self { should_fail: true }
    }
}

impl Default for MockStorageService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StorageService for MockStorageService {
    async fn ensure_bucket_exists(&self) {
        // No-op in mock environment.
    }

    async fn upload_public(
        &self,
        key: &str,
        _content_type: &str,
        _bytes: Vec<u8>,
    ) -> Result<String, String> {
        if self.should_fail {
            return Err("Mock Storage Error: Simulation requested".to_string());
        }

        let sanitized_key = sanitize_key(key);

        // Returns a deterministic, local-style URL for mock assertions.
        Ok(format!(
            "http://localhost:9000/mock-bucket/{}",
            sanitized_key
        ))
    }
}

/// StorageState
///
/// The concrete type used to share the storage service access across the application state.
pub type StorageState = Arc<dyn StorageService>;
