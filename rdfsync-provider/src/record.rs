//! Projected record model
//!
//! A `ContentRecord` is the attribute-bearing unit stored in the
//! repository, one per non-skipped resource. Records are built transiently
//! on every pass and never mutated in place; a changed resource produces a
//! brand-new record that replaces the old one.

use serde::{Deserialize, Serialize};

/// Value kind of an attribute
///
/// The projector emits `Text` only; numeric/date inference is deferred to
/// downstream configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AttributeKind {
    #[default]
    Text,
    Number,
    Boolean,
    Date,
}

/// A typed, keyed attribute of a record
///
/// Names are unique per record by convention only: multi-valued predicates
/// produce repeated same-named attributes and the projector does not
/// de-duplicate them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
    pub kind: AttributeKind,
    pub is_key: bool,
}

impl Attribute {
    /// Create a text attribute
    pub fn text(name: impl Into<String>, value: impl Into<String>, is_key: bool) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            kind: AttributeKind::Text,
            is_key,
        }
    }
}

/// The projected, attribute-bearing unit stored in the repository
///
/// Identity is `(provider, url)`; `url` is the source resource URI.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentRecord {
    /// Source resource URI; the record's identity within a provider
    pub url: String,
    /// Name of the provider that produced this record
    pub provider: String,
    /// Content type assigned by configuration
    pub content_type: String,
    /// Attributes in projection order
    pub attributes: Vec<Attribute>,
    /// Millisecond timestamp of the graph state this record was built from
    pub modification_date: i64,
}

impl ContentRecord {
    /// Create an empty record
    pub fn new(
        url: impl Into<String>,
        provider: impl Into<String>,
        content_type: impl Into<String>,
        modification_date: i64,
    ) -> Self {
        Self {
            url: url.into(),
            provider: provider.into(),
            content_type: content_type.into(),
            attributes: Vec::new(),
            modification_date,
        }
    }

    /// Append an attribute (no de-duplication)
    pub fn push_attribute(&mut self, attribute: Attribute) {
        self.attributes.push(attribute);
    }

    /// First attribute whose name matches, ASCII case-insensitively
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes
            .iter()
            .find(|a| a.name.eq_ignore_ascii_case(name))
    }

    /// All attributes with a matching name, ASCII case-insensitively
    pub fn attributes_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Attribute> {
        self.attributes
            .iter()
            .filter(move |a| a.name.eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_lookup_is_case_insensitive() {
        let mut record = ContentRecord::new("urn:s", "provider", "Animal", 0);
        record.push_attribute(Attribute::text("name", "Lion", true));

        assert!(record.attribute("NAME").is_some());
        assert!(record.attribute("Name").is_some());
        assert!(record.attribute("SPECIES").is_none());
    }

    #[test]
    fn test_repeated_names_are_kept() {
        let mut record = ContentRecord::new("urn:s", "provider", "Animal", 0);
        record.push_attribute(Attribute::text("KIN", "urn:animals:tiger", false));
        record.push_attribute(Attribute::text("KIN", "urn:animals:leopard", false));

        assert_eq!(record.attributes.len(), 2);
        assert_eq!(record.attributes_named("kin").count(), 2);
        assert_eq!(record.attribute("KIN").unwrap().value, "urn:animals:tiger");
    }
}
