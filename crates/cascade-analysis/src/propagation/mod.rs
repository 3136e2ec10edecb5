//! Failure propagation — redundancy-aware worst-status cascade.
//!
//! A worklist BFS starts from every node already marked Failed, walks
//! inverse adjacency (dependents), escalates statuses per edge strength,
//! and records one human-readable cause per changed node.

pub mod baseline;
pub mod engine;
pub mod explanation;
pub mod redundancy;
pub mod report;

pub use baseline::{restore_statuses, snapshot_statuses};
pub use engine::run_propagation;
pub use explanation::ExplanationRecorder;
pub use redundancy::{GroupHealth, RedundancyIndex};
pub use report::PropagationReport;
