//! Error types for the provider core

use thiserror::Error;

/// Error raised by a repository backend
///
/// Backends differ (network stores, embedded stores, test doubles), so the
/// repository boundary carries an opaque message rather than a backend enum.
#[derive(Debug, Error)]
#[error("Repository error: {message}")]
pub struct RepositoryError {
    message: String,
}

impl RepositoryError {
    /// Create a repository error from a backend message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error raised by a graph source while loading
#[derive(Debug, Error)]
#[error("Graph load error: {message}")]
pub struct GraphLoadError {
    message: String,
}

impl GraphLoadError {
    /// Create a graph load error from a collaborator message
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Errors from provider operations
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The source graph could not be loaded; fatal at open
    #[error(transparent)]
    GraphLoad(#[from] GraphLoadError),

    /// An inbound byte stream could not be parsed as a graph
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    /// An inbound graph fragment holds no resource with any property
    #[error("Parsed graph contains no resource with properties")]
    EmptyGraph,

    /// A repository call failed; the running pass did not complete
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An operation that needs a loaded graph was called before `open`
    #[error("Provider has no loaded graph (not opened)")]
    NotOpen,
}

impl From<rdfsync_graph_ntriples::NtriplesError> for ProviderError {
    fn from(e: rdfsync_graph_ntriples::NtriplesError) -> Self {
        ProviderError::MalformedInput(e.to_string())
    }
}

impl From<std::str::Utf8Error> for ProviderError {
    fn from(e: std::str::Utf8Error) -> Self {
        ProviderError::MalformedInput(e.to_string())
    }
}

/// Result type for provider operations
pub type Result<T> = std::result::Result<T, ProviderError>;
