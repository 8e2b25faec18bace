//! Provider lifecycle and per-record operations
//!
//! The host scheduler owns the call cadence: `open` loads the graph once,
//! `synchronize` and `housekeep` are independent passes against the loaded
//! graph, `close` drops it. Overlapping passes on one instance are not
//! supported; the caller serializes them (the core takes no locks).

use crate::config::SourceConfig;
use crate::error::{GraphLoadError, ProviderError, Result};
use crate::project::{Projection, Projector};
use crate::repository::ContentRepository;
use crate::sync;
use rdfsync_graph_ir::Graph;
use std::fmt::Debug;
use tracing::{debug, error};

/// Collaborator that materializes the source graph
///
/// Loading and query execution are outside this core; implementations wrap
/// whatever transport the deployment uses. `StaticGraphSource` and
/// `NtriplesFileSource` cover embedding and tests.
pub trait GraphSource: Debug {
    /// Load a graph document from a URL
    fn load_document(&self, url: &str) -> std::result::Result<Graph, GraphLoadError>;

    /// Derive a graph by executing a query against an endpoint
    fn load_query(&self, endpoint: &str, query: &str)
        -> std::result::Result<Graph, GraphLoadError>;
}

/// Graph source that always returns a pre-built graph
///
/// Useful for embedding and tests; `load_query` returns the same graph and
/// ignores the query text.
#[derive(Clone, Debug, Default)]
pub struct StaticGraphSource {
    graph: Graph,
}

impl StaticGraphSource {
    /// Wrap a pre-built graph
    pub fn new(graph: Graph) -> Self {
        Self { graph }
    }
}

impl GraphSource for StaticGraphSource {
    fn load_document(&self, _url: &str) -> std::result::Result<Graph, GraphLoadError> {
        Ok(self.graph.clone())
    }

    fn load_query(
        &self,
        _endpoint: &str,
        _query: &str,
    ) -> std::result::Result<Graph, GraphLoadError> {
        Ok(self.graph.clone())
    }
}

/// Graph source that reads N-Triples documents from the filesystem
///
/// The `url` passed to `load_document` is used as a path, with a leading
/// `file:` scheme stripped if present.
#[derive(Clone, Debug, Default)]
pub struct NtriplesFileSource;

impl GraphSource for NtriplesFileSource {
    fn load_document(&self, url: &str) -> std::result::Result<Graph, GraphLoadError> {
        let path = url.strip_prefix("file:").unwrap_or(url);
        let text = std::fs::read_to_string(path)
            .map_err(|e| GraphLoadError::new(format!("{path}: {e}")))?;
        rdfsync_graph_ntriples::parse(&text).map_err(|e| GraphLoadError::new(e.to_string()))
    }

    fn load_query(
        &self,
        endpoint: &str,
        _query: &str,
    ) -> std::result::Result<Graph, GraphLoadError> {
        Err(GraphLoadError::new(format!(
            "file source cannot execute queries against {endpoint}"
        )))
    }
}

/// Graph state held for the lifetime of an opened provider
#[derive(Debug)]
struct LoadedGraph {
    graph: Graph,
    /// Millisecond timestamp taken when the graph was loaded
    modified: i64,
}

/// A content provider backed by an RDF source graph
///
/// Single-threaded by contract: the graph is loaded once at `open` and
/// held read-only; no pass mutates it.
#[derive(Debug)]
pub struct RdfContentProvider {
    name: String,
    config: SourceConfig,
    state: Option<LoadedGraph>,
}

impl RdfContentProvider {
    /// Create a closed provider instance
    pub fn new(name: impl Into<String>, config: SourceConfig) -> Self {
        Self {
            name: name.into(),
            config,
            state: None,
        }
    }

    /// The provider name records are stamped with
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The active configuration
    pub fn config(&self) -> &SourceConfig {
        &self.config
    }

    /// Whether a graph is currently loaded
    pub fn is_open(&self) -> bool {
        self.state.is_some()
    }

    /// Validate configuration and load the source graph
    ///
    /// With `sparqlQuery` configured the graph is derived from executing
    /// the query against `modelURL` as an endpoint; otherwise `modelURL`
    /// is loaded as a document. Failure here is fatal for the instance:
    /// the provider cannot operate without a graph.
    pub fn open(&mut self, source: &dyn GraphSource) -> Result<()> {
        debug!(provider = %self.name, "opening provider");
        self.config.validate()?;

        let graph = match &self.config.sparql_query {
            Some(query) => source.load_query(&self.config.model_url, query)?,
            None => source.load_document(&self.config.model_url)?,
        };

        let modified = chrono::Utc::now().timestamp_millis();
        debug!(triples = graph.len(), modified, "graph loaded");
        self.state = Some(LoadedGraph { graph, modified });
        Ok(())
    }

    /// Drop the loaded graph
    ///
    /// Infallible: the graph is held in memory and dropping it cannot
    /// fail, so unlike `open` there is no error to surface.
    pub fn close(&mut self) {
        debug!(provider = %self.name, "closing provider");
        self.state = None;
    }

    fn state(&self) -> Result<&LoadedGraph> {
        self.state.as_ref().ok_or(ProviderError::NotOpen)
    }

    fn projector(&self) -> Projector {
        Projector::new(self.config.naming, &self.name, &self.config.content_type)
    }

    /// Run a synchronization pass against the repository
    ///
    /// A repository error aborts the remainder of the pass and is
    /// surfaced as the returned error; already-applied changes stand.
    pub fn synchronize(&self, repo: &dyn ContentRepository) -> Result<()> {
        let state = self.state()?;
        debug!(provider = %self.name, "starting synchronization");

        let result = sync::synchronize(&state.graph, state.modified, &self.projector(), repo);
        if let Err(e) = &result {
            error!(provider = %self.name, "unable to complete synchronization: {e}");
        }

        debug!(provider = %self.name, "finished synchronization");
        result
    }

    /// Run a housekeeping pass against the repository
    ///
    /// Same failure semantics as `synchronize`.
    pub fn housekeep(&self, repo: &dyn ContentRepository) -> Result<()> {
        let state = self.state()?;
        debug!(provider = %self.name, "starting housekeeping");

        let result = sync::housekeep(&state.graph, &self.name, repo);
        if let Err(e) = &result {
            error!(provider = %self.name, "unable to complete housekeeping: {e}");
        }

        debug!(provider = %self.name, "finished housekeeping");
        result
    }

    /// Project the resource at `url` from the loaded graph
    pub fn project(&self, url: &str) -> Result<Projection> {
        let state = self.state()?;
        let resource = state.graph.resource(url);
        Ok(self
            .projector()
            .project(&state.graph, &resource, state.modified))
    }

    /// Construct a record from an inbound graph fragment
    ///
    /// The bytes are parsed as a transient N-Triples graph and its first
    /// resource with at least one property is projected against that
    /// transient graph. Callers must not assume a stream holds more than
    /// one logical resource. Does not require an open provider.
    pub fn project_from_bytes(&self, bytes: &[u8]) -> Result<Projection> {
        let text = std::str::from_utf8(bytes)?;
        let graph = rdfsync_graph_ntriples::parse(text)?;

        let resource = graph
            .resources_with_any_property()
            .into_iter()
            .next()
            .ok_or(ProviderError::EmptyGraph)?;

        let modified = self
            .state
            .as_ref()
            .map(|s| s.modified)
            .unwrap_or_else(|| chrono::Utc::now().timestamp_millis());
        Ok(self.projector().project(&graph, &resource, modified))
    }

    /// Export a record's sub-graph as canonical N-Triples bytes
    ///
    /// Selects every statement whose subject is the record's URL, with
    /// predicate and object unconstrained: the raw underlying statements,
    /// not the projected attribute view.
    pub fn export_subgraph(&self, record: &crate::record::ContentRecord) -> Result<Vec<u8>> {
        let state = self.state()?;
        let subgraph = state.graph.subgraph(&record.url);
        Ok(rdfsync_graph_ntriples::format(&subgraph).into_bytes())
    }
}
