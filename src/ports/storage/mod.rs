mod object_client;

pub use object_client::{ObjectClient, ObjectListing, ObjectSummary};
