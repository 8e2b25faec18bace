//! Error types for N-Triples parsing

/// Error type for N-Triples operations
#[derive(Debug, thiserror::Error)]
pub enum NtriplesError {
    /// Malformed statement (unexpected character or truncated term)
    #[error("Syntax error at line {line}: {message}")]
    Syntax { line: usize, message: String },

    /// Invalid escape sequence inside a literal or IRI
    #[error("Invalid escape sequence at line {line}: {message}")]
    InvalidEscape { line: usize, message: String },
}

/// Result type for N-Triples operations
pub type Result<T> = std::result::Result<T, NtriplesError>;

impl NtriplesError {
    /// Create a syntax error
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::Syntax {
            line,
            message: message.into(),
        }
    }

    /// Create an escape error
    pub fn escape(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidEscape {
            line,
            message: message.into(),
        }
    }
}
