//! Caller-owned status snapshots for clear-analysis rollback.
//!
//! The engine holds no baseline of its own: the caller snapshots before a
//! run and restores afterward if it wants the pre-analysis picture back.

use cascade_core::types::{NodeId, SystemStatus};
use rustc_hash::FxHashMap;

use crate::graph::SystemGraph;

/// Capture every node's current status.
pub fn snapshot_statuses(graph: &SystemGraph) -> FxHashMap<NodeId, SystemStatus> {
    graph.nodes().map(|n| (n.id, n.status)).collect()
}

/// Copy statuses back verbatim. Ids no longer present in the graph are
/// skipped without complaint.
pub fn restore_statuses(graph: &mut SystemGraph, snapshot: &FxHashMap<NodeId, SystemStatus>) {
    for (&id, &status) in snapshot {
        if let Some(node) = graph.node_mut(id) {
            node.status = status;
        }
    }
}
