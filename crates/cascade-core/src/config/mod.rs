//! Configuration.

pub mod propagation_config;

pub use propagation_config::{ExplanationPolicy, PropagationConfig};
