//! Attribute name normalization policies
//!
//! Two policies exist in this domain: pass predicate local names through
//! unchanged, or fold them into an uppercase ASCII character class. The
//! policy is a configuration choice and also decides how the `type`
//! predicate is recognized and which names the synthesized attributes get.

use serde::{Deserialize, Serialize};

/// How raw predicate local names become attribute names
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamingPolicy {
    /// Pass the predicate local name through unchanged
    Raw,

    /// Uppercase, `' '` to `_`, fold Ä/Ö/Ü/ß to AE/OE/UE/SS, strip
    /// everything outside `[A-Z0-9\-_.]`
    #[default]
    UpperAsciiFolded,
}

impl NamingPolicy {
    /// Normalize a raw predicate local name to an attribute name
    ///
    /// Pure, total, and idempotent: normalizing an already-normalized name
    /// is the identity under both policies.
    pub fn normalize(&self, raw: &str) -> String {
        match self {
            NamingPolicy::Raw => raw.to_string(),
            NamingPolicy::UpperAsciiFolded => {
                let mut out = String::with_capacity(raw.len());
                for c in raw.chars() {
                    // char::to_uppercase already maps ß to SS
                    for u in c.to_uppercase() {
                        match u {
                            'Ä' => out.push_str("AE"),
                            'Ö' => out.push_str("OE"),
                            'Ü' => out.push_str("UE"),
                            ' ' => out.push('_'),
                            'A'..='Z' | '0'..='9' | '-' | '_' | '.' => out.push(u),
                            _ => {}
                        }
                    }
                }
                out
            }
        }
    }

    /// Whether a normalized attribute name identifies the `type` predicate
    ///
    /// A single comparison, consistent with the naming policy: exact match
    /// against `TYPE` when folding, ASCII case-insensitive otherwise.
    pub fn is_type_predicate(&self, normalized: &str) -> bool {
        match self {
            NamingPolicy::Raw => normalized.eq_ignore_ascii_case("type"),
            NamingPolicy::UpperAsciiFolded => normalized == "TYPE",
        }
    }

    /// Name of the synthesized resource-name attribute
    pub fn name_attribute(&self) -> &'static str {
        match self {
            NamingPolicy::Raw => "Name",
            NamingPolicy::UpperAsciiFolded => "NAME",
        }
    }

    /// Name of the synthesized namespace attribute
    pub fn namespace_attribute(&self) -> &'static str {
        match self {
            NamingPolicy::Raw => "RDFNamespace",
            NamingPolicy::UpperAsciiFolded => "RDFNAMESPACE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_is_identity() {
        let p = NamingPolicy::Raw;
        assert_eq!(p.normalize("species"), "species");
        assert_eq!(p.normalize("Größe"), "Größe");
    }

    #[test]
    fn test_upper_folds_case_and_spaces() {
        let p = NamingPolicy::UpperAsciiFolded;
        assert_eq!(p.normalize("species"), "SPECIES");
        assert_eq!(p.normalize("body weight"), "BODY_WEIGHT");
    }

    #[test]
    fn test_upper_folds_diacritics() {
        let p = NamingPolicy::UpperAsciiFolded;
        assert_eq!(p.normalize("Größe"), "GROESSE");
        assert_eq!(p.normalize("ähnlich"), "AEHNLICH");
        assert_eq!(p.normalize("über"), "UEBER");
    }

    #[test]
    fn test_upper_strips_outside_class() {
        let p = NamingPolicy::UpperAsciiFolded;
        assert_eq!(p.normalize("has+value!"), "HASVALUE");
        assert_eq!(p.normalize("dc.title-v2_x"), "DC.TITLE-V2_X");
        assert_eq!(p.normalize("é"), "");
    }

    #[test]
    fn test_normalize_idempotent() {
        for raw in ["species", "body weight", "Größe", "has+value!", "", "ß"] {
            for p in [NamingPolicy::Raw, NamingPolicy::UpperAsciiFolded] {
                let once = p.normalize(raw);
                assert_eq!(p.normalize(&once), once, "policy {:?} input {:?}", p, raw);
            }
        }
    }

    #[test]
    fn test_type_predicate_matching() {
        assert!(NamingPolicy::Raw.is_type_predicate("type"));
        assert!(NamingPolicy::Raw.is_type_predicate("Type"));
        assert!(!NamingPolicy::Raw.is_type_predicate("prototype"));

        assert!(NamingPolicy::UpperAsciiFolded.is_type_predicate("TYPE"));
        assert!(!NamingPolicy::UpperAsciiFolded.is_type_predicate("type"));
    }

    #[test]
    fn test_synthesized_names_follow_policy() {
        assert_eq!(NamingPolicy::UpperAsciiFolded.name_attribute(), "NAME");
        assert_eq!(
            NamingPolicy::UpperAsciiFolded.namespace_attribute(),
            "RDFNAMESPACE"
        );
        assert_eq!(NamingPolicy::Raw.name_attribute(), "Name");
        assert_eq!(NamingPolicy::Raw.namespace_attribute(), "RDFNamespace");
    }
}
