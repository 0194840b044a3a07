use std::io::Cursor;
use std::sync::Arc;

use bytes::Bytes;
use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::{
    domain::{
        errors::FsResult,
        models::{EntryType, ResolvedEntry},
        value_objects::ObjectPath,
    },
    ports::services::FileSystemService,
    services::WriteSession,
};

use super::file_name::FileName;

/// A per-path session over the provider file system.
///
/// The session is either unattached or holds one `ResolvedEntry`; every
/// attach re-resolves from scratch and nothing is patched in place. Callers
/// hold the session exclusively, so one path is never operated on from two
/// places at once.
pub struct S3File {
    name: FileName,
    service: Arc<dyn FileSystemService>,
    entry: Option<ResolvedEntry>,
}

impl S3File {
    pub(crate) fn new(name: FileName, service: Arc<dyn FileSystemService>) -> Self {
        Self {
            name,
            service,
            entry: None,
        }
    }

    pub fn name(&self) -> &FileName {
        &self.name
    }

    pub fn path(&self) -> &ObjectPath {
        self.name.path()
    }

    /// Resolve the path if this session is not attached yet.
    async fn attach(&mut self) -> FsResult<&ResolvedEntry> {
        let entry = match self.entry.take() {
            Some(entry) => entry,
            None => {
                let entry = self.service.resolve(self.name.path()).await?;
                debug!(path = %self.name.path(), entry_type = ?entry.entry_type(), "attached");
                entry
            }
        };
        Ok(self.entry.insert(entry))
    }

    /// Drop the attached state; the next operation re-resolves.
    pub fn detach(&mut self) {
        self.entry = None;
    }

    pub async fn file_type(&mut self) -> FsResult<EntryType> {
        Ok(self.attach().await?.entry_type())
    }

    pub async fn exists(&mut self) -> FsResult<bool> {
        Ok(self.file_type().await?.exists())
    }

    /// Immediate children; meaningful when the path resolves to a folder.
    pub async fn children(&mut self) -> FsResult<Vec<ObjectPath>> {
        self.service.list_children(self.name.path()).await
    }

    /// Full object content.
    pub async fn content(&mut self) -> FsResult<Bytes> {
        Ok(self.attach().await?.data()?.clone())
    }

    /// Seekable reader over the fetched content.
    pub async fn reader(&mut self) -> FsResult<Cursor<Bytes>> {
        Ok(Cursor::new(self.content().await?))
    }

    pub async fn content_size(&mut self) -> FsResult<u64> {
        self.attach().await?.size()
    }

    pub async fn last_modified(&mut self) -> FsResult<DateTime<Utc>> {
        self.attach().await?.last_modified()
    }

    /// Open a buffered write session for this path. The session detaches so
    /// that the next resolution sees whatever the close uploads.
    pub async fn open_output(&mut self) -> FsResult<WriteSession> {
        self.detach();
        self.service.open_for_write(self.name.path()).await
    }

    /// Delete the object at the exact key, then detach.
    pub async fn delete(&mut self) -> FsResult<()> {
        self.service.delete(self.name.path()).await?;
        self.detach();
        Ok(())
    }

    /// Folder creation is a no-op: the store has no folders, only keys.
    pub fn create_folder(&self) {
        info!(path = %self.name.path(), "create_folder requested; flat storage has no folders");
    }
}
