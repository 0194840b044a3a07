use crate::domain::errors::ValidationError;

/// Marker key for the container root. A path with no key segment maps to
/// this value so the container itself can be addressed like a folder.
pub const ROOT_KEY: &str = "/";

/// A decoded (container, key) pair addressing one object in flat storage.
///
/// The key keeps whatever separators the caller supplied; separators carry
/// no structural meaning to the store itself.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ObjectPath {
    container: String,
    key: String,
}

impl ObjectPath {
    /// Decode a filesystem-style path into container and key.
    ///
    /// Leading separators are stripped. A single remaining segment addresses
    /// the container root. Everything after the first separator is the key,
    /// passed through verbatim with no escaping or normalization.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let stripped = input.trim_start_matches('/');
        if stripped.is_empty() {
            return Err(ValidationError::BlankPath {
                path: input.to_string(),
            });
        }

        match stripped.split_once('/') {
            None => Ok(Self {
                container: stripped.to_string(),
                key: ROOT_KEY.to_string(),
            }),
            Some((_, "")) => Err(ValidationError::EmptyKey {
                path: input.to_string(),
            }),
            Some((container, key)) => Ok(Self {
                container: container.to_string(),
                key: key.to_string(),
            }),
        }
    }

    /// Build a path from parts already known to be valid, e.g. keys coming
    /// back from a listing.
    pub fn from_parts(container: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            container: container.into(),
            key: key.into(),
        }
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Whether this path addresses the container itself rather than a key.
    pub fn is_container_root(&self) -> bool {
        self.key == ROOT_KEY
    }

    /// The key normalized into a listing prefix: folders need a trailing
    /// separator. The container root has no prefix at all.
    pub fn folder_prefix(&self) -> Option<String> {
        if self.is_container_root() {
            return None;
        }
        if self.key.ends_with('/') {
            Some(self.key.clone())
        } else {
            Some(format!("{}/", self.key))
        }
    }

    /// Last path segment; the container name at the root.
    pub fn file_name(&self) -> &str {
        if self.is_container_root() {
            return &self.container;
        }
        let trimmed = self.key.trim_end_matches('/');
        trimmed.rsplit('/').next().unwrap_or(trimmed)
    }
}

impl std::fmt::Display for ObjectPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_container_root() {
            write!(f, "{}", self.container)
        } else {
            write!(f, "{}/{}", self.container, self.key)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_first_separator() {
        let path = ObjectPath::parse("uploadFile02/dir01/file01").unwrap();
        assert_eq!(path.container(), "uploadFile02");
        assert_eq!(path.key(), "dir01/file01");
    }

    #[test]
    fn parse_strips_leading_separators() {
        let path = ObjectPath::parse("///bucket01/a/b.txt").unwrap();
        assert_eq!(path.container(), "bucket01");
        assert_eq!(path.key(), "a/b.txt");
    }

    #[test]
    fn single_segment_is_container_root() {
        let path = ObjectPath::parse("bucket01").unwrap();
        assert_eq!(path.container(), "bucket01");
        assert_eq!(path.key(), ROOT_KEY);
        assert!(path.is_container_root());
        assert_eq!(path.folder_prefix(), None);
    }

    #[test]
    fn blank_and_trailing_slash_paths_are_invalid() {
        assert!(ObjectPath::parse("").is_err());
        assert!(ObjectPath::parse("///").is_err());
        assert!(ObjectPath::parse("bucket01/").is_err());
    }

    #[test]
    fn display_round_trips_the_stripped_input() {
        for input in ["bucket01/a/b/c.txt", "bucket01/file.txt"] {
            let path = ObjectPath::parse(input).unwrap();
            assert_eq!(path.to_string(), input);
        }
    }

    #[test]
    fn folder_prefix_gains_exactly_one_trailing_separator() {
        let path = ObjectPath::parse("bucket01/dir01").unwrap();
        assert_eq!(path.folder_prefix().as_deref(), Some("dir01/"));

        let path = ObjectPath::from_parts("bucket01", "dir01/");
        assert_eq!(path.folder_prefix().as_deref(), Some("dir01/"));
    }

    #[test]
    fn file_name_is_the_last_segment() {
        let path = ObjectPath::parse("bucket01/dir01/file01").unwrap();
        assert_eq!(path.file_name(), "file01");

        let root = ObjectPath::parse("bucket01").unwrap();
        assert_eq!(root.file_name(), "bucket01");
    }
}
