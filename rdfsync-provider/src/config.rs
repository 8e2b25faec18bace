//! Provider configuration
//!
//! Field names on the wire match the recognized option names of the host
//! configuration (`content-type`, `modelURL`, `sparqlQuery`).

use crate::error::{ProviderError, Result};
use crate::normalize::NamingPolicy;
use serde::{Deserialize, Serialize};

/// Configuration of one graph-backed provider instance
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Content type assigned to every produced record
    #[serde(rename = "content-type")]
    pub content_type: String,

    /// Source of the graph: a document URL, or the query endpoint when
    /// `sparqlQuery` is present
    #[serde(rename = "modelURL")]
    pub model_url: String,

    /// Optional query; when present the graph is derived from executing it
    /// against `modelURL` as a query endpoint
    #[serde(rename = "sparqlQuery", default)]
    pub sparql_query: Option<String>,

    /// Attribute naming policy (defaults to uppercase folding)
    #[serde(default)]
    pub naming: NamingPolicy,
}

impl SourceConfig {
    /// Create a document-backed configuration
    pub fn new(content_type: impl Into<String>, model_url: impl Into<String>) -> Self {
        Self {
            content_type: content_type.into(),
            model_url: model_url.into(),
            sparql_query: None,
            naming: NamingPolicy::default(),
        }
    }

    /// Set the query for endpoint-backed graphs
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.sparql_query = Some(query.into());
        self
    }

    /// Set the naming policy
    pub fn with_naming(mut self, naming: NamingPolicy) -> Self {
        self.naming = naming;
        self
    }

    /// Check that the required options are present
    pub fn validate(&self) -> Result<()> {
        if self.content_type.is_empty() {
            return Err(ProviderError::Config("content-type is required".into()));
        }
        if self.model_url.is_empty() {
            return Err(ProviderError::Config("modelURL is required".into()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_requires_content_type() {
        let config = SourceConfig::new("", "file:animals.nt");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_requires_model_url() {
        let config = SourceConfig::new("Animal", "");
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{
            "content-type": "Animal",
            "modelURL": "http://zoo.example/animals.nt",
            "sparqlQuery": "SELECT * WHERE { ?s ?p ?o }"
        }"#;
        let config: SourceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.content_type, "Animal");
        assert_eq!(config.model_url, "http://zoo.example/animals.nt");
        assert!(config.sparql_query.is_some());
        assert_eq!(config.naming, NamingPolicy::UpperAsciiFolded);
        config.validate().unwrap();
    }

    #[test]
    fn test_naming_policy_wire_form() {
        let json = r#"{
            "content-type": "Animal",
            "modelURL": "file:animals.nt",
            "naming": "raw"
        }"#;
        let config: SourceConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.naming, NamingPolicy::Raw);
    }
}
