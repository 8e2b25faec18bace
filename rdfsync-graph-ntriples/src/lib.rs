//! N-Triples codec for rdfsync
//!
//! N-Triples is the graph's native exchange format: one statement per
//! line, fully expanded IRIs, no prefix machinery. This crate parses byte
//! streams into `rdfsync_graph_ir::Graph` values and formats graphs back
//! out in canonical (SPO-sorted) form.
//!
//! # Example
//!
//! ```
//! use rdfsync_graph_ntriples::{format, parse};
//!
//! let doc = r#"
//! <urn:animals:lion> <urn:zoo:species> "Panthera leo" .
//! <urn:animals:lion> <urn:zoo:class> "Mammal" .
//! "#;
//!
//! let graph = parse(doc).unwrap();
//! assert_eq!(graph.len(), 2);
//!
//! // Canonical output is SPO-sorted
//! let out = format(&graph);
//! assert!(out.starts_with("<urn:animals:lion> <urn:zoo:class>"));
//! ```

mod error;
mod formatter;
mod parser;

pub use error::{NtriplesError, Result};
pub use formatter::format;
pub use parser::parse;
