//! Graph mutation errors.

use crate::types::NodeId;

/// Rejected graph mutations. Every rejection leaves the graph unchanged,
/// so callers wanting the forgiving editing-surface behavior can simply
/// ignore the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("self-loop rejected on {id}")]
    SelfLoop { id: NodeId },

    #[error("duplicate edge rejected: {from} -> {to} already exists")]
    DuplicateEdge { from: NodeId, to: NodeId },

    #[error("unknown node {id}")]
    UnknownNode { id: NodeId },

    #[error("no edge {from} -> {to}")]
    UnknownEdge { from: NodeId, to: NodeId },
}
