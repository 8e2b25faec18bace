//! Resource view over a graph subject
//!
//! A `Resource` is a subject URI together with its derived local name and
//! namespace. The split point is the character after the last `#`, `/`, or
//! `:` in the URI, so `urn:animals:lion` has local name `lion` and
//! namespace `urn:animals:`.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A graph subject identified by URI
///
/// Resources are cheap views; they carry no triples of their own. Use
/// `Graph::subject_triples` to enumerate a resource's statements.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Resource {
    uri: Arc<str>,
}

impl Resource {
    /// Create a resource view for a URI
    pub fn new(uri: impl AsRef<str>) -> Self {
        Self {
            uri: Arc::from(uri.as_ref()),
        }
    }

    /// The resource URI
    pub fn uri(&self) -> &str {
        &self.uri
    }

    /// Index of the first character after the namespace separator, if any
    fn split_point(&self) -> Option<usize> {
        self.uri
            .rfind(['#', '/', ':'])
            .map(|i| i + 1)
            .filter(|&i| i < self.uri.len() && i > 0)
    }

    /// Final path/fragment segment of the URI, if non-empty
    pub fn local_name(&self) -> Option<&str> {
        self.split_point().map(|i| &self.uri[i..])
    }

    /// Prefix preceding the local name (separator included), if any
    pub fn namespace(&self) -> Option<&str> {
        self.split_point().map(|i| &self.uri[..i])
    }
}

impl std::fmt::Display for Resource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}>", self.uri)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_urn_split() {
        let r = Resource::new("urn:animals:lion");
        assert_eq!(r.local_name(), Some("lion"));
        assert_eq!(r.namespace(), Some("urn:animals:"));
    }

    #[test]
    fn test_hash_split() {
        let r = Resource::new("http://www.some-ficticious-zoo.com/rdf#class");
        assert_eq!(r.local_name(), Some("class"));
        assert_eq!(
            r.namespace(),
            Some("http://www.some-ficticious-zoo.com/rdf#")
        );
    }

    #[test]
    fn test_slash_split() {
        let r = Resource::new("http://example.org/animals/lion");
        assert_eq!(r.local_name(), Some("lion"));
        assert_eq!(r.namespace(), Some("http://example.org/animals/"));
    }

    #[test]
    fn test_trailing_separator_has_no_local_name() {
        let r = Resource::new("urn:animals:");
        assert_eq!(r.local_name(), None);
        assert_eq!(r.namespace(), None);
    }

    #[test]
    fn test_no_separator() {
        let r = Resource::new("url");
        assert_eq!(r.local_name(), None);
        assert_eq!(r.namespace(), None);
    }
}
