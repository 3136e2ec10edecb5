//! Error handling for Cascade.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod analysis_error;
pub mod config_error;
pub mod graph_error;

pub use analysis_error::AnalysisError;
pub use config_error::ConfigError;
pub use graph_error::GraphError;
