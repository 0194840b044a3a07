use crate::domain::{
    errors::{FsError, FsResult},
    value_objects::ObjectPath,
};

/// URI scheme handled by this provider.
///
/// Addresses are authority-qualified (`s3://<authority>/<container>/<key>`)
/// even though the store needs no per-object host; a dedicated scheme keeps
/// these URIs from being claimed by a plain HTTP resolver.
pub const SCHEME: &str = "s3";

/// A parsed provider URI: the authority plus the decoded object path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileName {
    authority: String,
    path: ObjectPath,
}

impl FileName {
    /// Parse an `s3://` URI. The container/key part is taken verbatim; no
    /// unescaping is applied.
    pub fn parse(uri: &str) -> FsResult<Self> {
        let rest = uri
            .strip_prefix(SCHEME)
            .and_then(|rest| rest.strip_prefix("://"))
            .ok_or_else(|| FsError::InvalidUri {
                uri: uri.to_string(),
                reason: format!("expected '{SCHEME}://' scheme"),
            })?;

        let (authority, path_part) = match rest.split_once('/') {
            Some((authority, path_part)) => (authority, path_part),
            None => (rest, ""),
        };

        if authority.is_empty() {
            return Err(FsError::InvalidUri {
                uri: uri.to_string(),
                reason: "missing authority".to_string(),
            });
        }

        let path = ObjectPath::parse(path_part).map_err(|_| FsError::InvalidUri {
            uri: uri.to_string(),
            reason: "missing container segment".to_string(),
        })?;

        Ok(Self {
            authority: authority.to_string(),
            path,
        })
    }

    pub fn authority(&self) -> &str {
        &self.authority
    }

    pub fn path(&self) -> &ObjectPath {
        &self.path
    }

    /// The canonical URI form of this name.
    pub fn uri(&self) -> String {
        format!("{SCHEME}://{}/{}", self.authority, self.path)
    }
}

impl std::fmt::Display for FileName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.uri())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_authority_container_and_key() {
        let name = FileName::parse("s3://s3.amazonaws.com/bucket01/dir01/file01").unwrap();
        assert_eq!(name.authority(), "s3.amazonaws.com");
        assert_eq!(name.path().container(), "bucket01");
        assert_eq!(name.path().key(), "dir01/file01");
    }

    #[test]
    fn container_root_uri() {
        let name = FileName::parse("s3://localhost:9000/bucket01").unwrap();
        assert!(name.path().is_container_root());
        assert_eq!(name.authority(), "localhost:9000");
    }

    #[test]
    fn rejects_other_schemes_and_missing_parts() {
        assert!(matches!(
            FileName::parse("http://host/bucket01/file01"),
            Err(FsError::InvalidUri { .. })
        ));
        assert!(matches!(
            FileName::parse("s3:///bucket01/file01"),
            Err(FsError::InvalidUri { .. })
        ));
        assert!(matches!(
            FileName::parse("s3://host"),
            Err(FsError::InvalidUri { .. })
        ));
        assert!(matches!(
            FileName::parse("s3://host/"),
            Err(FsError::InvalidUri { .. })
        ));
    }

    #[test]
    fn uri_round_trip() {
        let uri = "s3://s3.amazonaws.com/bucket01/dir01/file01";
        assert_eq!(FileName::parse(uri).unwrap().uri(), uri);
    }
}
