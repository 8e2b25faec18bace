//! Synchronizes a structured content repository with an RDF source graph
//!
//! The core projects graph resources into typed, keyed attribute records,
//! reconciles graph state against repository state, and prunes records
//! whose source resource has disappeared. Graph loading and repository
//! storage are external collaborators behind the [`GraphSource`] and
//! [`ContentRepository`] traits.
//!
//! # Passes
//!
//! An external scheduler drives two independent passes against an opened
//! provider: [`RdfContentProvider::synchronize`] (additions and updates)
//! and [`RdfContentProvider::housekeep`] (orphan removal). Passes must not
//! overlap on one instance; the core takes no locks of its own.
//!
//! # Example
//!
//! ```
//! use rdfsync_graph_ir::{Graph, Term};
//! use rdfsync_provider::{
//!     ContentRepository, MemoryContentRepository, RdfContentProvider, SourceConfig,
//!     StaticGraphSource,
//! };
//!
//! let mut graph = Graph::new();
//! graph.add_triple(
//!     Term::iri("urn:animals:lion"),
//!     Term::iri("http://www.some-ficticious-zoo.com/rdf#species"),
//!     Term::string("Panthera leo"),
//! );
//!
//! let config = SourceConfig::new("Animal", "urn:example:model");
//! let mut provider = RdfContentProvider::new("zoo", config);
//! provider.open(&StaticGraphSource::new(graph)).unwrap();
//!
//! let repo = MemoryContentRepository::new();
//! provider.synchronize(&repo).unwrap();
//! assert!(repo.exists("zoo", "urn:animals:lion").unwrap());
//! ```

mod config;
mod error;
mod normalize;
mod project;
mod provider;
mod record;
mod repository;
pub mod sync;

pub use config::SourceConfig;
pub use error::{GraphLoadError, ProviderError, RepositoryError, Result};
pub use normalize::NamingPolicy;
pub use project::{Projection, Projector};
pub use provider::{GraphSource, NtriplesFileSource, RdfContentProvider, StaticGraphSource};
pub use record::{Attribute, AttributeKind, ContentRecord};
pub use repository::{ContentRepository, MemoryContentRepository, RepoResult};
