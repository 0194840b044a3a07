use async_trait::async_trait;

use crate::{
    domain::{
        errors::FsResult,
        models::{EntryType, ResolvedEntry},
        value_objects::ObjectPath,
    },
    services::WriteSession,
};

/// Port for the path-oriented view over flat object storage.
///
/// Content and metadata reads are served through the `ResolvedEntry`
/// returned by `resolve`; the entry owns the fetched object handle for its
/// lifetime.
#[async_trait]
pub trait FileSystemService: Send + Sync + 'static {
    /// Resolve a path into an attached entry: fetch the object at the exact
    /// key when one exists, otherwise classify the path by prefix probing.
    async fn resolve(&self, path: &ObjectPath) -> FsResult<ResolvedEntry>;

    /// Type-only resolution.
    async fn resolve_type(&self, path: &ObjectPath) -> FsResult<EntryType>;

    /// Immediate children of a simulated folder, in listing order.
    async fn list_children(&self, path: &ObjectPath) -> FsResult<Vec<ObjectPath>>;

    /// Open a buffered write session that uploads on close.
    async fn open_for_write(&self, path: &ObjectPath) -> FsResult<WriteSession>;

    /// Delete the object at the exact key.
    async fn delete(&self, path: &ObjectPath) -> FsResult<()>;
}
