use std::sync::Arc;

use crate::{
    adapters::outbound::storage::{ApacheObjectClient, ClientBackend},
    ports::auth::Authenticator,
    services::FileSystemServiceImpl,
};

use super::{
    capability::{CAPABILITIES, Capability},
    file_system::S3FileSystem,
};

/// Entry point for the provider adapter.
///
/// Configure an optional endpoint and region, then create file systems from
/// an authenticator's credentials:
///
/// ```no_run
/// use s3vfs::{S3FileProvider, StaticAuthenticator};
///
/// # fn main() -> Result<(), s3vfs::FsError> {
/// let mut provider = S3FileProvider::new();
/// provider.set_region("us-east-1");
///
/// let auth = StaticAuthenticator::new("access-id", "access-secret");
/// let fs = provider.create_file_system(&auth);
/// let _file = fs.resolve("s3://s3.amazonaws.com/bucket01/dir01/file01.txt")?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct S3FileProvider {
    endpoint: Option<String>,
    region: Option<String>,
    allow_http: bool,
}

impl S3FileProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the provider at an S3-compatible endpoint. Takes effect for
    /// file systems created afterwards.
    pub fn set_endpoint(&mut self, endpoint: impl Into<String>) {
        self.endpoint = Some(endpoint.into());
    }

    pub fn set_region(&mut self, region: impl Into<String>) {
        self.region = Some(region.into());
    }

    /// Allow plain-http endpoints, e.g. a local MinIO.
    pub fn set_allow_http(&mut self, allow: bool) {
        self.allow_http = allow;
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }

    pub fn region(&self) -> Option<&str> {
        self.region.as_deref()
    }

    /// The capability set this provider declares.
    pub fn capabilities() -> &'static [Capability] {
        CAPABILITIES
    }

    /// Build a file system backed by S3 using the authenticator's resolved
    /// credentials.
    pub fn create_file_system(&self, authenticator: &dyn Authenticator) -> S3FileSystem {
        let client = ApacheObjectClient::new(ClientBackend::S3 {
            credentials: authenticator.credentials(),
            region: self.region.clone(),
            endpoint: self.endpoint.clone(),
            allow_http: self.allow_http,
        });

        S3FileSystem::new(Arc::new(FileSystemServiceImpl::new(Arc::new(client))))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declares_the_full_capability_set() {
        let caps = S3FileProvider::capabilities();
        for cap in [
            Capability::GetType,
            Capability::ReadContent,
            Capability::ListChildren,
            Capability::GetLastModified,
            Capability::Create,
            Capability::Delete,
            Capability::RandomAccessRead,
            Capability::Uri,
        ] {
            assert!(caps.contains(&cap), "missing capability {cap:?}");
        }
    }

    #[test]
    fn endpoint_and_region_are_configurable() {
        let mut provider = S3FileProvider::new();
        provider.set_endpoint("http://localhost:9000");
        provider.set_region("eu-north-1");

        assert_eq!(provider.endpoint(), Some("http://localhost:9000"));
        assert_eq!(provider.region(), Some("eu-north-1"));
    }
}
