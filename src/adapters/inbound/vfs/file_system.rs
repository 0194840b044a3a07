use std::sync::Arc;

use crate::{domain::errors::FsResult, ports::services::FileSystemService};

use super::{file::S3File, file_name::FileName};

/// One mounted provider file system: resolves URIs into per-path sessions.
pub struct S3FileSystem {
    service: Arc<dyn FileSystemService>,
}

impl S3FileSystem {
    pub fn new(service: Arc<dyn FileSystemService>) -> Self {
        Self { service }
    }

    /// Resolve a provider URI into a file session. The session starts
    /// unattached; the first operation needing remote state attaches it.
    pub fn resolve(&self, uri: &str) -> FsResult<S3File> {
        let name = FileName::parse(uri)?;
        Ok(S3File::new(name, self.service.clone()))
    }
}
