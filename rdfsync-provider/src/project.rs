//! Record projection
//!
//! Turns one graph resource into a candidate repository record, or a
//! `Skip` signal for structurally excluded resources (those whose `type`
//! value carries the `Seq` sequence marker).

use crate::normalize::NamingPolicy;
use crate::record::{Attribute, AttributeKind, ContentRecord};
use rdfsync_graph_ir::{Graph, Resource};

/// Outcome of projecting a resource
///
/// `Skip` is a normal control outcome, not an error: the resource must not
/// produce a record, and nothing accumulated for it survives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Projection {
    /// The resource projects to this record
    Record(ContentRecord),
    /// The resource is structurally excluded (sequence marker)
    Skip,
}

impl Projection {
    /// Whether this is the skip outcome
    pub fn is_skip(&self) -> bool {
        matches!(self, Projection::Skip)
    }

    /// Unwrap into a record, if any
    pub fn into_record(self) -> Option<ContentRecord> {
        match self {
            Projection::Record(record) => Some(record),
            Projection::Skip => None,
        }
    }
}

/// Projects graph resources into repository records
///
/// One projector serves both naming policies; the policy decides attribute
/// naming, `type` recognition, and the synthesized attribute names.
#[derive(Clone, Debug)]
pub struct Projector {
    policy: NamingPolicy,
    provider: String,
    content_type: String,
}

impl Projector {
    /// Create a projector for one provider instance
    pub fn new(
        policy: NamingPolicy,
        provider: impl Into<String>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            policy,
            provider: provider.into(),
            content_type: content_type.into(),
        }
    }

    /// The provider name records are stamped with
    pub fn provider(&self) -> &str {
        &self.provider
    }

    /// Project one resource against the graph
    ///
    /// Walks every statement with the resource as subject, in graph
    /// iteration order. A `type` value ending in `"Seq"` short-circuits to
    /// `Skip`, discarding all attributes accumulated so far. Afterwards a
    /// `NAME` attribute is synthesized from the resource local name when no
    /// name-attribute was projected, and a namespace attribute is added
    /// when the resource has one.
    pub fn project(
        &self,
        graph: &Graph,
        resource: &Resource,
        modification_date: i64,
    ) -> Projection {
        let mut record = ContentRecord::new(
            resource.uri(),
            &self.provider,
            &self.content_type,
            modification_date,
        );

        for triple in graph.subject_triples(resource.uri()) {
            let local = match triple.p.as_iri() {
                Some(iri) => Resource::new(iri).local_name().unwrap_or("").to_string(),
                None => String::new(),
            };
            let name = self.policy.normalize(&local);
            let value = triple.o.object_text();
            let is_key = triple.o.is_literal();

            if self.policy.is_type_predicate(&name) && value.ends_with("Seq") {
                return Projection::Skip;
            }

            record.push_attribute(Attribute {
                name,
                value,
                kind: AttributeKind::Text,
                is_key,
            });
        }

        if record.attribute(self.policy.name_attribute()).is_none() {
            if let Some(local) = resource.local_name() {
                record.push_attribute(Attribute::text(self.policy.name_attribute(), local, true));
            }
        }

        if let Some(namespace) = resource.namespace() {
            record.push_attribute(Attribute::text(
                self.policy.namespace_attribute(),
                namespace,
                false,
            ));
        }

        Projection::Record(record)
    }
}
