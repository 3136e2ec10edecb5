//! Graph node and edge types.

use cascade_core::types::{DependencyStrength, FailureMode, NodeId, SystemKind, SystemStatus};
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

/// A subsystem in the dependency graph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemNode {
    /// Arena id, unique within one graph.
    pub id: NodeId,
    /// Display name.
    pub name: String,
    /// Subsystem category. Informational only.
    pub kind: SystemKind,
    /// Redundancy group label, e.g. "ELEC_BUS_A" or "HYD_SYS_1".
    /// Empty or whitespace means non-redundant.
    pub redundancy_group: String,
    /// Current health status.
    pub status: SystemStatus,
    /// Failure-mode tag. Never consulted by propagation.
    pub failure_mode: FailureMode,
    /// Ids this node depends on: an edge `self -> other` exists for each.
    pub depends_on: FxHashSet<NodeId>,
    /// Ids that depend on this node (inverse adjacency).
    /// Invariant: mutual dual of `depends_on` across the whole graph.
    pub dependents: FxHashSet<NodeId>,
}

impl SystemNode {
    pub(crate) fn new(id: NodeId, name: String) -> Self {
        Self {
            id,
            name,
            kind: SystemKind::default(),
            redundancy_group: String::new(),
            status: SystemStatus::default(),
            failure_mode: FailureMode::default(),
            depends_on: FxHashSet::default(),
            dependents: FxHashSet::default(),
        }
    }

    pub fn is_failed(&self) -> bool {
        self.status == SystemStatus::Failed
    }
}

/// A directed dependency: `from` depends on `to`, so a failure of `to`
/// can affect `from` with magnitude `strength`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub from: NodeId,
    pub to: NodeId,
    pub strength: DependencyStrength,
}
