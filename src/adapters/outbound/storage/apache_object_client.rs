use std::collections::HashMap;
use std::path::Path;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use futures::TryStreamExt;
use object_store::{
    ObjectMeta, ObjectStore as ObjectStoreBackend, PutPayload, aws::AmazonS3Builder,
    memory::InMemory, path::Path as StorePath,
};
use tracing::debug;

use crate::{
    domain::{
        errors::{ClientError, ClientResult},
        models::ObjectHandle,
        value_objects::{Credentials, ObjectPath},
    },
    ports::storage::{ObjectClient, ObjectListing, ObjectSummary},
};

/// Backend selection for `ApacheObjectClient`.
#[derive(Debug, Clone)]
pub enum ClientBackend {
    /// One in-memory store per container; for tests and demos
    InMemory,
    /// Per-container Amazon S3 clients built from one credential pair
    S3 {
        credentials: Credentials,
        region: Option<String>,
        endpoint: Option<String>,
        allow_http: bool,
    },
}

/// `ObjectClient` adapter over the Apache `object_store` crate.
///
/// Containers map to individual `object_store` instances, built on first use
/// and cached for the life of the client.
pub struct ApacheObjectClient {
    backend: ClientBackend,
    stores: RwLock<HashMap<String, Arc<dyn ObjectStoreBackend>>>,
}

impl ApacheObjectClient {
    pub fn new(backend: ClientBackend) -> Self {
        Self {
            backend,
            stores: RwLock::new(HashMap::new()),
        }
    }

    /// In-memory client for tests and examples.
    pub fn in_memory() -> Self {
        Self::new(ClientBackend::InMemory)
    }

    fn store_for(&self, container: &str) -> ClientResult<Arc<dyn ObjectStoreBackend>> {
        if let Some(store) = self.stores.read().unwrap().get(container) {
            return Ok(store.clone());
        }

        let store = self.build_store(container)?;
        let mut stores = self.stores.write().unwrap();
        Ok(stores.entry(container.to_string()).or_insert(store).clone())
    }

    fn build_store(&self, container: &str) -> ClientResult<Arc<dyn ObjectStoreBackend>> {
        match &self.backend {
            ClientBackend::InMemory => Ok(Arc::new(InMemory::new())),
            ClientBackend::S3 {
                credentials,
                region,
                endpoint,
                allow_http,
            } => {
                let mut builder = AmazonS3Builder::new()
                    .with_bucket_name(container)
                    .with_access_key_id(credentials.access_key_id())
                    .with_secret_access_key(credentials.secret_access_key());

                if let Some(region) = region {
                    builder = builder.with_region(region.clone());
                }
                if let Some(endpoint) = endpoint {
                    builder = builder.with_endpoint(endpoint.clone());
                }
                if *allow_http {
                    builder = builder.with_allow_http(true);
                }

                let store = builder.build().map_err(|e| ClientError::Configuration {
                    message: format!("failed to build S3 client for '{container}': {e}"),
                })?;

                Ok(Arc::new(store))
            }
        }
    }

    fn store_path(path: &ObjectPath) -> StorePath {
        StorePath::from(path.key())
    }

    fn convert_error(err: object_store::Error, path: &ObjectPath) -> ClientError {
        match err {
            object_store::Error::NotFound { .. } => ClientError::NotFound {
                container: path.container().to_string(),
                key: path.key().to_string(),
            },
            err => ClientError::Service {
                message: err.to_string(),
            },
        }
    }
}

#[async_trait]
impl ObjectClient for ApacheObjectClient {
    async fn get_object(&self, path: &ObjectPath) -> ClientResult<ObjectHandle> {
        let store = self.store_for(path.container())?;

        let result = store
            .get(&Self::store_path(path))
            .await
            .map_err(|e| Self::convert_error(e, path))?;

        let meta = result.meta.clone();
        let data = result
            .bytes()
            .await
            .map_err(|e| Self::convert_error(e, path))?;

        Ok(ObjectHandle {
            data,
            size: meta.size,
            last_modified: meta.last_modified,
            etag: meta.e_tag,
        })
    }

    async fn list_objects(
        &self,
        container: &str,
        prefix: Option<&str>,
        delimited: bool,
    ) -> ClientResult<ObjectListing> {
        let store = self.store_for(container)?;
        let prefix_path = prefix.map(StorePath::from);

        let service_err = |e: object_store::Error| ClientError::Service {
            message: e.to_string(),
        };

        if delimited {
            let result = store
                .list_with_delimiter(prefix_path.as_ref())
                .await
                .map_err(service_err)?;

            Ok(ObjectListing {
                objects: result.objects.into_iter().map(to_summary).collect(),
                common_prefixes: result
                    .common_prefixes
                    .into_iter()
                    .map(|p| p.to_string())
                    .collect(),
            })
        } else {
            let objects = store
                .list(prefix_path.as_ref())
                .map_ok(to_summary)
                .try_collect::<Vec<_>>()
                .await
                .map_err(service_err)?;

            Ok(ObjectListing {
                objects,
                common_prefixes: Vec::new(),
            })
        }
    }

    async fn put_object(&self, path: &ObjectPath, spool: &Path) -> ClientResult<()> {
        let store = self.store_for(path.container())?;

        let data = tokio::fs::read(spool)
            .await
            .map_err(|e| ClientError::Service {
                message: format!("failed to read spool file: {e}"),
            })?;

        debug!(
            container = path.container(),
            key = path.key(),
            bytes = data.len(),
            "uploading object"
        );

        store
            .put(&Self::store_path(path), PutPayload::from(data))
            .await
            .map_err(|e| Self::convert_error(e, path))?;

        Ok(())
    }

    async fn delete_object(&self, path: &ObjectPath) -> ClientResult<()> {
        let store = self.store_for(path.container())?;

        store
            .delete(&Self::store_path(path))
            .await
            .map_err(|e| Self::convert_error(e, path))?;

        Ok(())
    }
}

fn to_summary(meta: ObjectMeta) -> ObjectSummary {
    ObjectSummary {
        key: meta.location.to_string(),
        size: meta.size,
        last_modified: meta.last_modified,
        etag: meta.e_tag,
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    async fn put_bytes(client: &ApacheObjectClient, path: &ObjectPath, data: &[u8]) {
        let mut spool = tempfile::NamedTempFile::new().unwrap();
        spool.write_all(data).unwrap();
        spool.flush().unwrap();
        client.put_object(path, spool.path()).await.unwrap();
    }

    #[tokio::test]
    async fn get_put_delete_round_trip() {
        let client = ApacheObjectClient::in_memory();
        let path = ObjectPath::parse("bucket01/dir01/file01").unwrap();

        put_bytes(&client, &path, b"payload").await;

        let handle = client.get_object(&path).await.unwrap();
        assert_eq!(&handle.data[..], b"payload");
        assert_eq!(handle.size, 7);

        client.delete_object(&path).await.unwrap();
        assert!(matches!(
            client.get_object(&path).await,
            Err(ClientError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn missing_object_maps_to_not_found() {
        let client = ApacheObjectClient::in_memory();
        let path = ObjectPath::parse("bucket01/none").unwrap();

        match client.get_object(&path).await {
            Err(ClientError::NotFound { container, key }) => {
                assert_eq!(container, "bucket01");
                assert_eq!(key, "none");
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn delimited_listing_groups_prefixes() {
        let client = ApacheObjectClient::in_memory();
        for key in ["dir01/file01", "dir01/file02", "dir01/sub01/file03", "file04"] {
            let path = ObjectPath::from_parts("bucket01", key);
            put_bytes(&client, &path, b"x").await;
        }

        let listing = client
            .list_objects("bucket01", Some("dir01/"), true)
            .await
            .unwrap();

        let keys: Vec<_> = listing.objects.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(keys, ["dir01/file01", "dir01/file02"]);
        assert_eq!(listing.common_prefixes, ["dir01/sub01"]);

        let root = client.list_objects("bucket01", None, true).await.unwrap();
        let root_keys: Vec<_> = root.objects.iter().map(|o| o.key.as_str()).collect();
        assert_eq!(root_keys, ["file04"]);
        assert_eq!(root.common_prefixes, ["dir01"]);
    }

    #[tokio::test]
    async fn flat_listing_returns_every_descendant() {
        let client = ApacheObjectClient::in_memory();
        for key in ["dir01/file01", "dir01/sub01/file02"] {
            let path = ObjectPath::from_parts("bucket01", key);
            put_bytes(&client, &path, b"x").await;
        }

        let listing = client
            .list_objects("bucket01", Some("dir01/"), false)
            .await
            .unwrap();

        assert_eq!(listing.objects.len(), 2);
        assert!(listing.common_prefixes.is_empty());
    }

    #[tokio::test]
    async fn containers_are_isolated() {
        let client = ApacheObjectClient::in_memory();
        let path01 = ObjectPath::parse("bucket01/file01").unwrap();
        put_bytes(&client, &path01, b"one").await;

        let path02 = ObjectPath::parse("bucket02/file01").unwrap();
        assert!(matches!(
            client.get_object(&path02).await,
            Err(ClientError::NotFound { .. })
        ));
    }
}
