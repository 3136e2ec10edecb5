//! Redundancy group health, rebuilt from scratch for every analysis run.

use cascade_core::types::SystemStatus;
use rustc_hash::FxHashMap;

use crate::graph::{SystemGraph, SystemNode};

/// Member tally for one redundancy group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GroupHealth {
    pub total: usize,
    pub failed: usize,
}

/// Read-only per-group summary derived from current node statuses.
/// Group labels are trimmed; blank labels never form a group.
#[derive(Debug, Clone, Default)]
pub struct RedundancyIndex {
    groups: FxHashMap<String, GroupHealth>,
}

impl RedundancyIndex {
    pub fn build(graph: &SystemGraph) -> Self {
        let mut groups: FxHashMap<String, GroupHealth> = FxHashMap::default();
        for node in graph.nodes() {
            let label = node.redundancy_group.trim();
            if label.is_empty() {
                continue;
            }
            let health = groups.entry(label.to_string()).or_default();
            health.total += 1;
            if node.status == SystemStatus::Failed {
                health.failed += 1;
            }
        }
        Self { groups }
    }

    pub fn group(&self, label: &str) -> Option<GroupHealth> {
        self.groups.get(label.trim()).copied()
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Whether a failure of `node` counts at full force.
    ///
    /// Ungrouped nodes are always fully failed once they fail. An unknown
    /// label gets the same answer rather than suppressing the cascade.
    /// Otherwise the group dampens the effect until every member is Failed.
    pub fn is_group_fully_failed(&self, node: &SystemNode) -> bool {
        let label = node.redundancy_group.trim();
        if label.is_empty() {
            return true;
        }
        match self.groups.get(label) {
            Some(health) => health.failed >= health.total,
            None => true,
        }
    }
}
