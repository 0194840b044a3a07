mod apache_object_client;

pub use apache_object_client::{ApacheObjectClient, ClientBackend};
