use crate::{domain::value_objects::Credentials, ports::auth::Authenticator};

/// Authenticator holding a fixed credential pair, username/password style:
/// the access key id and its secret.
#[derive(Debug, Clone)]
pub struct StaticAuthenticator {
    credentials: Credentials,
}

impl StaticAuthenticator {
    pub fn new(access_key_id: impl Into<String>, secret_access_key: impl Into<String>) -> Self {
        Self {
            credentials: Credentials::new(access_key_id, secret_access_key),
        }
    }
}

impl Authenticator for StaticAuthenticator {
    fn credentials(&self) -> Credentials {
        self.credentials.clone()
    }
}
