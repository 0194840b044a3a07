mod auth;
mod capability;
mod file;
mod file_name;
mod file_system;
mod provider;

pub use auth::StaticAuthenticator;
pub use capability::{CAPABILITIES, Capability};
pub use file::S3File;
pub use file_name::{FileName, SCHEME};
pub use file_system::S3FileSystem;
pub use provider::S3FileProvider;
