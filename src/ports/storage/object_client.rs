use std::path::Path;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{errors::ClientResult, models::ObjectHandle, value_objects::ObjectPath};

/// Port for the object-store client consumed by the mapping core.
///
/// Absence of a key must come back as `ClientError::NotFound` so resolution
/// can branch on it instead of failing.
#[async_trait]
pub trait ObjectClient: Send + Sync + 'static {
    /// Fetch the object at the exact key, content and metadata together.
    async fn get_object(&self, path: &ObjectPath) -> ClientResult<ObjectHandle>;

    /// List keys under a prefix. With `delimited` set, keys below the next
    /// `/` are grouped into common prefixes. The whole listing is drained and
    /// flattened before returning; no page is left behind.
    async fn list_objects(
        &self,
        container: &str,
        prefix: Option<&str>,
        delimited: bool,
    ) -> ClientResult<ObjectListing>;

    /// Upload a spooled local file to the key in a single call.
    async fn put_object(&self, path: &ObjectPath, spool: &Path) -> ClientResult<()>;

    /// Delete the object at the exact key. Whether deleting a missing key is
    /// an error is up to the backing store; S3 treats it as success.
    async fn delete_object(&self, path: &ObjectPath) -> ClientResult<()>;
}

/// A fully materialized listing result.
#[derive(Debug, Clone, Default)]
pub struct ObjectListing {
    pub objects: Vec<ObjectSummary>,
    /// Key prefixes grouped at the delimiter, without the trailing separator.
    pub common_prefixes: Vec<String>,
}

impl ObjectListing {
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty() && self.common_prefixes.is_empty()
    }
}

/// Summary row for one listed object.
#[derive(Debug, Clone)]
pub struct ObjectSummary {
    pub key: String,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub etag: Option<String>,
}
