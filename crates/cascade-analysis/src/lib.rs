//! cascade-analysis: failure-propagation analysis for interdependent systems.
//!
//! Models a directed graph of subsystems ("Avionics depends on Electrical")
//! and computes how a failure cascades to dependents:
//! - Graph: arena-backed nodes with dual adjacency sets and an
//!   ordered-pair edge index
//! - Propagation: redundancy-aware worst-status worklist BFS producing
//!   updated statuses plus one human-readable cause per affected node
//!
//! The engine consumes a graph and the set of nodes already marked Failed;
//! it exposes no rendering or editing concepts of its own.

pub mod graph;
pub mod propagation;

// Re-exports for convenience
pub use graph::{DependencyEdge, SystemGraph, SystemNode};
pub use propagation::{
    restore_statuses, run_propagation, snapshot_statuses, PropagationReport, RedundancyIndex,
};
