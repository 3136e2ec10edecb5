//! Propagation-run errors.

/// Errors that abort a propagation run before any mutation happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AnalysisError {
    /// No node is currently Failed, so there is nothing to cascade from.
    /// Recoverable: the caller reports it and the graph is untouched.
    #[error("no failed systems to seed the cascade")]
    NoFailedSeeds,
}
