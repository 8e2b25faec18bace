//! A single RDF statement

use crate::Term;
use serde::{Deserialize, Serialize};

/// A subject-predicate-object statement
///
/// Derived ordering is SPO lexicographic, which gives the canonical triple
/// ordering used by `Graph::sort` and the serialization layer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Triple {
    /// Subject (IRI or blank node)
    pub s: Term,
    /// Predicate (always an IRI)
    pub p: Term,
    /// Object (any term)
    pub o: Term,
}

impl Triple {
    /// Create a new triple
    pub fn new(s: Term, p: Term, o: Term) -> Self {
        Self { s, p, o }
    }

    /// Check whether the subject is the given IRI
    pub fn has_subject_iri(&self, uri: &str) -> bool {
        self.s.as_iri() == Some(uri)
    }
}

impl std::fmt::Display for Triple {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} .", self.s, self.p, self.o)
    }
}
