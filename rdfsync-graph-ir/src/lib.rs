//! RDF graph intermediate representation for rdfsync
//!
//! This crate provides the read-only triple model the synchronization core
//! operates on: terms, triples, a queryable graph, and the `Resource` view
//! (a subject URI plus its derived local name and namespace).
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - IRIs are stored in expanded form; prefix
//!    compaction is a concern of serialization formats, not of this IR.
//!
//! 2. **Explicit term discriminator** - An object is an IRI reference, a
//!    blank node, or a literal, and callers match on the enum rather than
//!    probing with runtime checks.
//!
//! 3. **Bag semantics** - `Graph` keeps a `Vec<Triple>` and preserves
//!    duplicates and insertion order. Call `sort()` for canonical SPO
//!    ordering before serializing.
//!
//! # Example
//!
//! ```
//! use rdfsync_graph_ir::{Graph, Term};
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::iri("urn:animals:lion"),
//!     Term::iri("http://www.some-ficticious-zoo.com/rdf#species"),
//!     Term::string("Panthera leo"),
//! );
//!
//! let lion = graph.resource("urn:animals:lion");
//! assert_eq!(lion.local_name(), Some("lion"));
//! assert_eq!(lion.namespace(), Some("urn:animals:"));
//! ```

mod graph;
mod resource;
mod term;
mod triple;
pub mod vocab;

pub use graph::Graph;
pub use resource::Resource;
pub use term::{BlankId, Term};
pub use triple::Triple;
