//! Worklist BFS cascade from failed seeds.
//!
//! Termination: a node re-enters the queue only while not already pending,
//! and any re-processing happens only after its status strictly worsened.
//! The lattice has height 3, so status-change events are bounded by
//! 3 * |nodes|, which bounds total enqueues.

use std::collections::VecDeque;

use cascade_core::config::PropagationConfig;
use cascade_core::errors::AnalysisError;
use cascade_core::types::{DependencyStrength, NodeId, SystemStatus};
use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, warn};

use crate::graph::SystemGraph;

use super::explanation::ExplanationRecorder;
use super::redundancy::RedundancyIndex;
use super::report::PropagationReport;

/// Run one failure-propagation pass over the graph.
///
/// Seeds are the nodes currently in Failed status. Statuses only move
/// upward through the lattice; re-running a converged graph changes
/// nothing. Fails with [`AnalysisError::NoFailedSeeds`] — and performs
/// zero mutation — when no node is Failed.
pub fn run_propagation(
    graph: &mut SystemGraph,
    config: &PropagationConfig,
) -> Result<PropagationReport, AnalysisError> {
    let seeds: SmallVec<[NodeId; 8]> = graph
        .nodes()
        .filter(|n| n.status == SystemStatus::Failed)
        .map(|n| n.id)
        .collect();
    if seeds.is_empty() {
        return Err(AnalysisError::NoFailedSeeds);
    }

    // Group health is a snapshot taken at run start; failures applied
    // mid-run do not feed back into the dampening decision.
    let index = RedundancyIndex::build(graph);
    let mut recorder = ExplanationRecorder::new(config.explanation_policy);

    let mut queue: VecDeque<NodeId> = VecDeque::with_capacity(seeds.len());
    let mut pending: FxHashSet<NodeId> = FxHashSet::default();
    for &id in &seeds {
        if let Some(node) = graph.node(id) {
            recorder.record_seed(id, &node.name);
        }
        queue.push_back(id);
        pending.insert(id);
    }
    debug!(seeds = seeds.len(), groups = index.len(), "starting cascade");

    let mut statuses_changed = 0usize;
    let mut steps = 0usize;

    while let Some(current_id) = queue.pop_front() {
        pending.remove(&current_id);
        steps += 1;

        let Some(current) = graph.node(current_id) else {
            warn!(node = %current_id, "queued node missing from arena; skipping");
            continue;
        };
        // Only an actually failed dependency contributes to the cascade; a
        // node that was merely degraded during this pass does not propagate.
        if current.status != SystemStatus::Failed {
            continue;
        }

        let current_name = current.name.clone();
        let group_fully_failed = index.is_group_fully_failed(current);
        let dependents: SmallVec<[NodeId; 8]> = current.dependents.iter().copied().collect();

        for dependent_id in dependents {
            let Some(edge) = graph.edge(dependent_id, current_id) else {
                // Adjacency lists an edge the index does not know about.
                // Partial analysis beats aborting, so skip it.
                warn!(from = %dependent_id, to = %current_id, "dangling edge reference; skipping");
                continue;
            };
            let strength = edge.strength;

            let Some(dependent) = graph.node_mut(dependent_id) else {
                warn!(node = %dependent_id, "dangling dependent reference; skipping");
                continue;
            };
            let before = dependent.status;
            let proposed = propose(before, strength, group_fully_failed);
            if proposed <= before {
                continue;
            }

            dependent.status = proposed;
            statuses_changed += 1;
            recorder.record_cascade(dependent_id, &dependent.name, proposed, strength, &current_name);
            debug!(
                node = %dependent_id,
                before = before.name(),
                after = proposed.name(),
                strength = strength.label(),
                "status escalated"
            );

            if pending.insert(dependent_id) {
                queue.push_back(dependent_id);
            }
        }
    }

    let seed_count = seeds.len();
    let (explanations, causes) = recorder.finish();
    debug!(steps, statuses_changed, "cascade converged");
    Ok(PropagationReport {
        explanations,
        causes,
        seed_count,
        statuses_changed,
        steps,
    })
}

/// Worst-status rule for one failed dependency acting on a dependent whose
/// status is `before`, through an edge of `strength`. The caller applies
/// the result only when it is strictly worse.
fn propose(
    before: SystemStatus,
    strength: DependencyStrength,
    group_fully_failed: bool,
) -> SystemStatus {
    match strength {
        DependencyStrength::Critical => {
            // Redundancy-aware: a surviving group member caps the effect.
            if group_fully_failed {
                SystemStatus::Failed
            } else {
                SystemStatus::Degraded
            }
        }
        DependencyStrength::Major | DependencyStrength::Minor => {
            if before == SystemStatus::Nominal {
                SystemStatus::Degraded
            } else {
                before
            }
        }
        DependencyStrength::Informational => before,
    }
}
