//! RDF graph - a queryable collection of triples
//!
//! The `Graph` type keeps a `Vec<Triple>` (bag semantics, insertion order
//! preserved). The synchronization core only ever reads it: subject
//! queries, resource enumeration, and subgraph extraction.

use crate::{Resource, Term, Triple};

/// A collection of RDF triples
///
/// # Design Decisions
///
/// - **Vec storage**: preserves duplicates and parser order. Enumeration
///   order of resources is therefore first-seen order, which callers must
///   treat as unspecified.
/// - **Read-only during passes**: the sync core holds a loaded graph as
///   shared state and never mutates it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    triples: Vec<Triple>,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a triple to the graph
    pub fn add(&mut self, triple: Triple) {
        self.triples.push(triple);
    }

    /// Add a triple by components
    pub fn add_triple(&mut self, s: Term, p: Term, o: Term) {
        self.add(Triple::new(s, p, o));
    }

    /// Get the number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// Check if the graph is empty
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Iterate over triples
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// Sort triples by SPO for canonical output
    pub fn sort(&mut self) {
        self.triples.sort();
    }

    /// Get a reference to the triples
    pub fn triples(&self) -> &[Triple] {
        &self.triples
    }

    /// All triples whose subject is the given IRI
    pub fn subject_triples<'a>(&'a self, uri: &'a str) -> impl Iterator<Item = &'a Triple> {
        self.triples.iter().filter(move |t| t.has_subject_iri(uri))
    }

    /// Whether the subject IRI has at least one statement
    pub fn has_properties(&self, uri: &str) -> bool {
        self.subject_triples(uri).next().is_some()
    }

    /// A resource view for the given URI
    ///
    /// Always succeeds; the resource may have zero properties in this graph.
    pub fn resource(&self, uri: impl AsRef<str>) -> Resource {
        Resource::new(uri)
    }

    /// All distinct IRI subjects that have at least one statement
    ///
    /// Blank-node subjects are not resources and are skipped. Order is
    /// first-seen order, which is parser-defined and must be treated as
    /// unspecified by callers.
    pub fn resources_with_any_property(&self) -> Vec<Resource> {
        let mut seen: Vec<&str> = Vec::new();
        let mut resources = Vec::new();
        for triple in &self.triples {
            if let Some(uri) = triple.s.as_iri() {
                if !seen.contains(&uri) {
                    seen.push(uri);
                    resources.push(Resource::new(uri));
                }
            }
        }
        resources
    }

    /// Extract the subgraph of all statements with the given subject IRI
    ///
    /// Predicate and object are unconstrained (wildcard match).
    pub fn subgraph(&self, uri: &str) -> Graph {
        Graph {
            triples: self.subject_triples(uri).cloned().collect(),
        }
    }
}

impl IntoIterator for Graph {
    type Item = Triple;
    type IntoIter = std::vec::IntoIter<Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.into_iter()
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = std::slice::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl FromIterator<Triple> for Graph {
    fn from_iter<T: IntoIterator<Item = Triple>>(iter: T) -> Self {
        Graph {
            triples: iter.into_iter().collect(),
        }
    }
}

impl Extend<Triple> for Graph {
    fn extend<T: IntoIterator<Item = Triple>>(&mut self, iter: T) {
        self.triples.extend(iter);
    }
}
