use std::sync::Arc;

use async_trait::async_trait;
use tracing::debug;

use crate::{
    domain::{
        errors::{ClientError, FsResult},
        models::{EntryType, ResolvedEntry},
        value_objects::ObjectPath,
    },
    ports::{services::FileSystemService, storage::ObjectClient},
    services::WriteSession,
};

/// The path-mapping core: a filesystem view over a flat key space.
#[derive(Clone)]
pub struct FileSystemServiceImpl {
    client: Arc<dyn ObjectClient>,
}

impl FileSystemServiceImpl {
    pub fn new(client: Arc<dyn ObjectClient>) -> Self {
        Self { client }
    }

    /// Probe the prefix below `path` to tell simulated folders from nothing.
    /// Any object or common prefix under the key makes it a folder.
    async fn classify_by_prefix(&self, path: &ObjectPath) -> FsResult<EntryType> {
        let prefix = path.folder_prefix();
        let listing = self
            .client
            .list_objects(path.container(), prefix.as_deref(), true)
            .await?;

        if listing.is_empty() {
            Ok(EntryType::Missing)
        } else {
            Ok(EntryType::Folder)
        }
    }
}

#[async_trait]
impl FileSystemService for FileSystemServiceImpl {
    async fn resolve(&self, path: &ObjectPath) -> FsResult<ResolvedEntry> {
        // The root marker never names an object; go straight to the probe.
        if path.is_container_root() {
            let entry_type = self.classify_by_prefix(path).await?;
            return Ok(ResolvedEntry::new(path.clone(), entry_type, None));
        }

        match self.client.get_object(path).await {
            // An object at the exact key wins, even when descendants exist
            // under the same key as a prefix.
            Ok(handle) => {
                debug!(path = %path, "resolved as file");
                Ok(ResolvedEntry::new(path.clone(), EntryType::File, Some(handle)))
            }
            Err(ClientError::NotFound { .. }) => {
                let entry_type = self.classify_by_prefix(path).await?;
                debug!(path = %path, entry_type = ?entry_type, "resolved by prefix probe");
                Ok(ResolvedEntry::new(path.clone(), entry_type, None))
            }
            Err(err) => Err(err.into()),
        }
    }

    async fn resolve_type(&self, path: &ObjectPath) -> FsResult<EntryType> {
        Ok(self.resolve(path).await?.entry_type())
    }

    async fn list_children(&self, path: &ObjectPath) -> FsResult<Vec<ObjectPath>> {
        let prefix = path.folder_prefix();
        let listing = self
            .client
            .list_objects(path.container(), prefix.as_deref(), true)
            .await?;

        let mut children =
            Vec::with_capacity(listing.objects.len() + listing.common_prefixes.len());
        for summary in listing.objects {
            children.push(ObjectPath::from_parts(path.container(), summary.key));
        }
        for common_prefix in listing.common_prefixes {
            children.push(ObjectPath::from_parts(path.container(), common_prefix));
        }

        debug!(path = %path, count = children.len(), "listed children");
        Ok(children)
    }

    async fn open_for_write(&self, path: &ObjectPath) -> FsResult<WriteSession> {
        WriteSession::create(path.clone(), self.client.clone())
    }

    async fn delete(&self, path: &ObjectPath) -> FsResult<()> {
        self.client.delete_object(path).await?;
        debug!(path = %path, "deleted");
        Ok(())
    }
}
