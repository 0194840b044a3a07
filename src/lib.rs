pub mod adapters;
pub mod app;
pub mod domain;
pub mod ports;
pub mod services;

// Re-export key types for convenience

// Domain types - value objects, models, and errors
pub use domain::{
    ClientError,
    ClientResult,
    Credentials,
    EntryMetadata,
    // Models
    EntryType,
    // Errors
    FsError,
    FsResult,
    ObjectHandle,
    // Value objects
    ObjectPath,
    ROOT_KEY,
    ResolvedEntry,
    ValidationError,
};

// Port types - interfaces for external systems
pub use ports::{Authenticator, FileSystemService, ObjectClient, ObjectListing, ObjectSummary};

// Service implementations - the mapping core
pub use services::{FileSystemServiceImpl, WriteSession};

// Application factory and configuration
pub use app::{
    AppError, StorageBackend, VfsBuilder, VfsConfig, VfsServices, create_fs_from_env,
    create_in_memory_fs, create_s3_fs,
};

// Adapter types - provider surface and storage client
pub use adapters::{
    inbound::vfs::{
        CAPABILITIES, Capability, FileName, S3File, S3FileProvider, S3FileSystem, SCHEME,
        StaticAuthenticator,
    },
    outbound::storage::{ApacheObjectClient, ClientBackend},
};

// Public facade for easy construction
pub mod prelude {
    pub use crate::{
        ApacheObjectClient, Capability, EntryType, FileSystemService, FileSystemServiceImpl,
        ObjectClient, ObjectPath, S3File, S3FileProvider, S3FileSystem, StaticAuthenticator,
        VfsBuilder, WriteSession, create_in_memory_fs,
    };
}
