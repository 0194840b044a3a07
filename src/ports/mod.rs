pub mod auth;
pub mod services;
pub mod storage;

// Re-export all port traits for convenience
pub use auth::Authenticator;
pub use services::FileSystemService;
pub use storage::{ObjectClient, ObjectListing, ObjectSummary};
