use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::{
    domain::{
        errors::{FsError, FsResult},
        value_objects::ObjectPath,
    },
    ports::storage::ObjectClient,
};

/// Buffered write session: bytes spool into an exclusively-owned local temp
/// file and reach storage in a single upload when the session is closed.
///
/// The spool file is removed when the session is dropped, so it never
/// outlives the upload attempt, successful or not.
pub struct WriteSession {
    path: ObjectPath,
    client: Arc<dyn ObjectClient>,
    spool: NamedTempFile,
}

impl WriteSession {
    pub(crate) fn create(path: ObjectPath, client: Arc<dyn ObjectClient>) -> FsResult<Self> {
        let spool = NamedTempFile::new()?;
        debug!(path = %path, spool = %spool.path().display(), "opened write session");
        Ok(Self {
            path,
            client,
            spool,
        })
    }

    pub fn path(&self) -> &ObjectPath {
        &self.path
    }

    /// Location of the local spool, for inspection before close.
    pub fn spool_path(&self) -> &Path {
        self.spool.path()
    }

    /// Flush the spool and issue the single upload. Consumes the session;
    /// the spool file is deleted whether or not the upload succeeds.
    pub async fn close(mut self) -> FsResult<()> {
        self.spool.as_file_mut().flush()?;

        let result = self.client.put_object(&self.path, self.spool.path()).await;
        debug!(path = %self.path, ok = result.is_ok(), "write session closed");

        // `self.spool` drops here, removing the temp file on either branch.
        result.map_err(|source| FsError::Upload {
            path: self.path.clone(),
            source,
        })
    }
}

impl Write for WriteSession {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.spool.as_file_mut().write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.spool.as_file_mut().flush()
    }
}
