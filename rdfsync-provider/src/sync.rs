//! Synchronization and housekeeping passes
//!
//! Two independent passes reconcile repository state against graph state:
//! `synchronize` walks graph resources and issues add/update calls,
//! `housekeep` walks stored records and removes those whose resource has
//! vanished. A repository failure aborts the remainder of the running
//! pass; resources not yet visited stay unsynchronized until the next
//! invocation.

use crate::error::Result;
use crate::project::{Projection, Projector};
use crate::repository::ContentRepository;
use rdfsync_graph_ir::Graph;
use tracing::debug;

/// Reconcile the repository with the graph (additions and updates)
///
/// For every resource with at least one property: a missing record is
/// projected and added (unless the projection skips); an existing record
/// is re-projected and updated only when the graph's modification
/// timestamp is strictly newer than the stored record's. When a
/// re-projection skips, the existing record is deliberately left in place,
/// stale.
pub fn synchronize(
    graph: &Graph,
    modified: i64,
    projector: &Projector,
    repo: &dyn ContentRepository,
) -> Result<()> {
    let provider = projector.provider();

    for resource in graph.resources_with_any_property() {
        let url = resource.uri();

        if repo.exists(provider, url)? {
            let Some(existing) = repo.get(provider, url)? else {
                // Removed between exists and get; the next pass will add it
                continue;
            };
            if modified > existing.modification_date {
                match projector.project(graph, &resource, modified) {
                    Projection::Record(record) => {
                        debug!(url, "updating record");
                        repo.update(&record)?;
                    }
                    Projection::Skip => {
                        debug!(url, "re-projection skipped; record left unchanged");
                    }
                }
            }
        } else {
            match projector.project(graph, &resource, modified) {
                Projection::Record(record) => {
                    debug!(url, "adding record");
                    repo.add(&record)?;
                }
                Projection::Skip => {
                    debug!(url, "projection skipped");
                }
            }
        }
    }

    Ok(())
}

/// Remove repository records whose resource vanished from the graph
///
/// A record is removed exactly when its resource has zero properties in
/// the graph (absent or genuinely empty). Records whose resource still has
/// properties are never touched here, even if their content changed.
pub fn housekeep(graph: &Graph, provider: &str, repo: &dyn ContentRepository) -> Result<()> {
    for record in repo.list_all(provider)? {
        if !graph.has_properties(&record.url) {
            debug!(url = %record.url, "removing orphaned record");
            repo.remove(provider, &record.url)?;
        }
    }

    Ok(())
}
