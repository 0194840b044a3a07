use crate::domain::value_objects::Credentials;

/// Port for resolving the static credential pair handed to the storage
/// client. Only username/password-style credentials are supported: the
/// access key id and its secret.
pub trait Authenticator: Send + Sync {
    fn credentials(&self) -> Credentials;
}
