use std::sync::Arc;

use crate::{
    adapters::{
        inbound::vfs::S3FileSystem,
        outbound::storage::{ApacheObjectClient, ClientBackend},
    },
    domain::value_objects::Credentials,
    ports::{services::FileSystemService, storage::ObjectClient},
    services::FileSystemServiceImpl,
};

/// Configuration for a virtual file system instance
#[derive(Debug, Clone)]
pub struct VfsConfig {
    pub storage_backend: StorageBackend,
}

impl Default for VfsConfig {
    fn default() -> Self {
        Self {
            storage_backend: StorageBackend::InMemory,
        }
    }
}

/// Storage backend configuration
#[derive(Debug, Clone)]
pub enum StorageBackend {
    InMemory,
    S3 {
        region: Option<String>,
        endpoint: Option<String>,
        access_key: String,
        secret_key: String,
        allow_http: bool,
    },
}

/// Built services: the path-level core plus the URI-level provider surface
pub struct VfsServices {
    pub client: Arc<dyn ObjectClient>,
    pub service: Arc<dyn FileSystemService>,
    pub file_system: S3FileSystem,
}

/// Builder wiring the adapter stack together
pub struct VfsBuilder {
    config: VfsConfig,
}

impl VfsBuilder {
    pub fn new() -> Self {
        Self {
            config: VfsConfig::default(),
        }
    }

    /// Configure with custom settings
    pub fn with_config(mut self, config: VfsConfig) -> Self {
        self.config = config;
        self
    }

    /// Configure the storage backend
    pub fn with_storage_backend(mut self, backend: StorageBackend) -> Self {
        self.config.storage_backend = backend;
        self
    }

    /// Build the full stack
    pub fn build(self) -> VfsServices {
        let backend = match self.config.storage_backend {
            StorageBackend::InMemory => ClientBackend::InMemory,
            StorageBackend::S3 {
                region,
                endpoint,
                access_key,
                secret_key,
                allow_http,
            } => ClientBackend::S3 {
                credentials: Credentials::new(access_key, secret_key),
                region,
                endpoint,
                allow_http,
            },
        };

        let client: Arc<dyn ObjectClient> = Arc::new(ApacheObjectClient::new(backend));
        let service: Arc<dyn FileSystemService> =
            Arc::new(FileSystemServiceImpl::new(client.clone()));

        VfsServices {
            client,
            service: service.clone(),
            file_system: S3FileSystem::new(service),
        }
    }
}

impl Default for VfsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Application-level errors
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// In-memory file system for testing and development
pub fn create_in_memory_fs() -> VfsServices {
    VfsBuilder::new()
        .with_storage_backend(StorageBackend::InMemory)
        .build()
}

/// S3-backed file system from explicit settings
pub fn create_s3_fs(
    region: Option<String>,
    endpoint: Option<String>,
    access_key: String,
    secret_key: String,
    allow_http: bool,
) -> VfsServices {
    VfsBuilder::new()
        .with_storage_backend(StorageBackend::S3 {
            region,
            endpoint,
            access_key,
            secret_key,
            allow_http,
        })
        .build()
}

/// Build from `S3_*` environment variables. Falls back to the in-memory
/// backend when no credentials are set; a half-configured credential pair is
/// an error.
pub fn create_fs_from_env() -> Result<VfsServices, AppError> {
    let access_key = std::env::var("S3_ACCESS_KEY").ok();
    let secret_key = std::env::var("S3_SECRET_KEY").ok();

    let backend = match (access_key, secret_key) {
        (Some(access_key), Some(secret_key)) => StorageBackend::S3 {
            region: std::env::var("S3_REGION").ok(),
            endpoint: std::env::var("S3_ENDPOINT").ok(),
            access_key,
            secret_key,
            allow_http: std::env::var("S3_ALLOW_HTTP")
                .map(|v| v.to_lowercase() == "true")
                .unwrap_or(false),
        },
        (None, None) => StorageBackend::InMemory,
        _ => {
            return Err(AppError::Configuration {
                message: "S3_ACCESS_KEY and S3_SECRET_KEY must be set together".to_string(),
            });
        }
    };

    Ok(VfsBuilder::new().with_storage_backend(backend).build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_services_resolve_uris() {
        let services = create_in_memory_fs();
        let file = services
            .file_system
            .resolve("s3://local/bucket01/file01")
            .unwrap();
        assert_eq!(file.path().container(), "bucket01");
    }

    #[test]
    fn builder_defaults_to_in_memory() {
        let services = VfsBuilder::new().build();
        assert!(services.file_system.resolve("s3://local/bucket01").is_ok());
    }
}
