use std::sync::OnceLock;

use bytes::Bytes;
use chrono::{DateTime, Utc};

use crate::domain::{
    errors::{FsError, FsResult},
    value_objects::ObjectPath,
};

/// What a path denotes in the flat namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryType {
    /// An object exists at the exact key
    File,
    /// No object at the exact key, but at least one object or common prefix
    /// exists below it
    Folder,
    /// Neither an object nor anything below the key
    Missing,
}

impl EntryType {
    pub fn exists(&self) -> bool {
        !matches!(self, EntryType::Missing)
    }

    pub fn is_file(&self) -> bool {
        matches!(self, EntryType::File)
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, EntryType::Folder)
    }
}

/// A fetched object: content and the store-reported metadata together.
#[derive(Debug, Clone)]
pub struct ObjectHandle {
    pub data: Bytes,
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub etag: Option<String>,
}

/// Size and timestamp for a resolved file.
#[derive(Debug, Clone, PartialEq)]
pub struct EntryMetadata {
    pub size: u64,
    pub last_modified: DateTime<Utc>,
    pub etag: Option<String>,
}

/// The attached state of a path session.
///
/// Constructed fresh by every resolution and dropped on detach. Fields are
/// never swapped in place, so staleness is only possible by holding an entry
/// across a detach.
#[derive(Debug)]
pub struct ResolvedEntry {
    path: ObjectPath,
    entry_type: EntryType,
    handle: Option<ObjectHandle>,
    metadata: OnceLock<EntryMetadata>,
}

impl ResolvedEntry {
    pub fn new(path: ObjectPath, entry_type: EntryType, handle: Option<ObjectHandle>) -> Self {
        Self {
            path,
            entry_type,
            handle,
            metadata: OnceLock::new(),
        }
    }

    pub fn path(&self) -> &ObjectPath {
        &self.path
    }

    pub fn entry_type(&self) -> EntryType {
        self.entry_type
    }

    pub fn handle(&self) -> Option<&ObjectHandle> {
        self.handle.as_ref()
    }

    /// Metadata for the underlying object, filled from the fetched handle on
    /// first access and memoized for the entry's lifetime.
    pub fn metadata(&self) -> FsResult<&EntryMetadata> {
        let handle = self.handle.as_ref().ok_or_else(|| FsError::NotAFile {
            path: self.path.clone(),
        })?;

        Ok(self.metadata.get_or_init(|| EntryMetadata {
            size: handle.size,
            last_modified: handle.last_modified,
            etag: handle.etag.clone(),
        }))
    }

    pub fn size(&self) -> FsResult<u64> {
        Ok(self.metadata()?.size)
    }

    pub fn last_modified(&self) -> FsResult<DateTime<Utc>> {
        Ok(self.metadata()?.last_modified)
    }

    /// Content of the underlying object.
    pub fn data(&self) -> FsResult<&Bytes> {
        self.handle
            .as_ref()
            .map(|handle| &handle.data)
            .ok_or_else(|| FsError::NotAFile {
                path: self.path.clone(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_entry() -> ResolvedEntry {
        let path = ObjectPath::parse("bucket01/file01").unwrap();
        let handle = ObjectHandle {
            data: Bytes::from_static(b"contents"),
            size: 8,
            last_modified: Utc::now(),
            etag: Some("etag01".to_string()),
        };
        ResolvedEntry::new(path, EntryType::File, Some(handle))
    }

    #[test]
    fn metadata_is_served_from_the_handle() {
        let entry = file_entry();
        let first = entry.metadata().unwrap().clone();
        assert_eq!(first.size, 8);
        assert_eq!(first.etag.as_deref(), Some("etag01"));

        // Second access returns the same memoized value.
        assert_eq!(entry.metadata().unwrap(), &first);
    }

    #[test]
    fn folder_and_missing_entries_have_no_metadata() {
        for entry_type in [EntryType::Folder, EntryType::Missing] {
            let path = ObjectPath::parse("bucket01/dir01").unwrap();
            let entry = ResolvedEntry::new(path, entry_type, None);

            assert!(matches!(entry.size(), Err(FsError::NotAFile { .. })));
            assert!(matches!(entry.data(), Err(FsError::NotAFile { .. })));
        }
    }

    #[test]
    fn entry_type_queries() {
        assert!(EntryType::File.exists());
        assert!(EntryType::Folder.exists());
        assert!(!EntryType::Missing.exists());
        assert!(EntryType::File.is_file());
        assert!(EntryType::Folder.is_folder());
    }
}
