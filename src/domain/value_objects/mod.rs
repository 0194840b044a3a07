mod credentials;
mod object_path;

pub use credentials::Credentials;
pub use object_path::{ObjectPath, ROOT_KEY};
