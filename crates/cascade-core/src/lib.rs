//! cascade-core: shared foundation for the Cascade failure-propagation engine.
//!
//! This crate provides the pieces every other Cascade crate builds on:
//! - Types: node identity, the status lattice, dependency strengths,
//!   subsystem categories, failure-mode tags
//! - Errors: one `thiserror` enum per subsystem
//! - Config: propagation tuning, TOML-loadable
//! - Trace: opt-in `tracing` subscriber setup

pub mod config;
pub mod errors;
pub mod trace;
pub mod types;

// Re-exports for convenience
pub use config::{ExplanationPolicy, PropagationConfig};
pub use errors::{AnalysisError, ConfigError, GraphError};
pub use types::{DependencyStrength, FailureMode, NodeId, SystemKind, SystemStatus};
