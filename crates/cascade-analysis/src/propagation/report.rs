//! Analysis run summary.

use cascade_core::types::NodeId;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Result of one propagation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PropagationReport {
    /// One line per affected node, sorted lexicographically for
    /// deterministic, diff-friendly display.
    pub explanations: Vec<String>,
    /// Cause line keyed by node id (seeds included).
    pub causes: FxHashMap<NodeId, String>,
    /// Nodes that were Failed when the run started.
    pub seed_count: usize,
    /// Status escalations applied during the run.
    pub statuses_changed: usize,
    /// Worklist dequeues processed before convergence.
    pub steps: usize,
}

impl PropagationReport {
    /// True when the run found seeds but nothing downstream moved.
    pub fn is_contained(&self) -> bool {
        self.statuses_changed == 0
    }
}
