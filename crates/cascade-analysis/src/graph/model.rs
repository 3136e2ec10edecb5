//! Arena-backed dependency graph.
//!
//! Adjacency invariant: for every edge `(from, to)` in the index,
//! `from.depends_on` contains `to` and `to.dependents` contains `from`.
//! Edge add and node removal update the index and both adjacency sides
//! within a single call, so the graph is never observable half-linked.

use cascade_core::errors::GraphError;
use cascade_core::types::{DependencyStrength, FailureMode, NodeId, SystemKind, SystemStatus};
use rustc_hash::FxHashMap;

use super::types::{DependencyEdge, SystemNode};

/// The system dependency graph: node arena plus an edge index keyed by
/// the ordered pair `(from, to)`.
#[derive(Debug, Clone, Default)]
pub struct SystemGraph {
    nodes: FxHashMap<NodeId, SystemNode>,
    edges: FxHashMap<(NodeId, NodeId), DependencyEdge>,
    next_id: u32,
}

impl SystemGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Insert a node with default kind, group, status, and failure mode.
    /// Ids are handed out by a monotonic counter and never reused.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let id = NodeId(self.next_id);
        self.next_id += 1;
        self.nodes.insert(id, SystemNode::new(id, name.into()));
        id
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn node(&self, id: NodeId) -> Option<&SystemNode> {
        self.nodes.get(&id)
    }

    pub fn node_mut(&mut self, id: NodeId) -> Option<&mut SystemNode> {
        self.nodes.get_mut(&id)
    }

    pub fn nodes(&self) -> impl Iterator<Item = &SystemNode> {
        self.nodes.values()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.keys().copied()
    }

    /// Create the edge `from -> to` ("from depends on to").
    ///
    /// Rejections never touch the graph: self-loops, unknown endpoints,
    /// and duplicate ordered pairs (first writer keeps its strength).
    /// A reverse edge between the same two nodes is a distinct edge and
    /// is permitted.
    pub fn add_edge(
        &mut self,
        from: NodeId,
        to: NodeId,
        strength: DependencyStrength,
    ) -> Result<(), GraphError> {
        if from == to {
            return Err(GraphError::SelfLoop { id: from });
        }
        if !self.nodes.contains_key(&from) {
            return Err(GraphError::UnknownNode { id: from });
        }
        if !self.nodes.contains_key(&to) {
            return Err(GraphError::UnknownNode { id: to });
        }
        if self.edges.contains_key(&(from, to)) {
            return Err(GraphError::DuplicateEdge { from, to });
        }

        self.edges.insert((from, to), DependencyEdge { from, to, strength });
        if let Some(node) = self.nodes.get_mut(&from) {
            node.depends_on.insert(to);
        }
        if let Some(node) = self.nodes.get_mut(&to) {
            node.dependents.insert(from);
        }
        Ok(())
    }

    /// O(1) ordered-pair lookup, used to recover strength during propagation.
    pub fn edge(&self, from: NodeId, to: NodeId) -> Option<&DependencyEdge> {
        self.edges.get(&(from, to))
    }

    pub fn edges(&self) -> impl Iterator<Item = &DependencyEdge> {
        self.edges.values()
    }

    pub fn set_strength(
        &mut self,
        from: NodeId,
        to: NodeId,
        strength: DependencyStrength,
    ) -> Result<(), GraphError> {
        match self.edges.get_mut(&(from, to)) {
            Some(edge) => {
                edge.strength = strength;
                Ok(())
            }
            None => Err(GraphError::UnknownEdge { from, to }),
        }
    }

    /// Remove a node, every edge where it appears on either end, and its id
    /// from every other node's adjacency sets. One logical operation.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if self.nodes.remove(&id).is_none() {
            return false;
        }
        self.edges.retain(|&(from, to), _| from != id && to != id);
        for node in self.nodes.values_mut() {
            node.depends_on.remove(&id);
            node.dependents.remove(&id);
        }
        true
    }

    pub fn set_status(&mut self, id: NodeId, status: SystemStatus) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode { id })?;
        node.status = status;
        Ok(())
    }

    pub fn set_kind(&mut self, id: NodeId, kind: SystemKind) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode { id })?;
        node.kind = kind;
        Ok(())
    }

    pub fn set_failure_mode(&mut self, id: NodeId, mode: FailureMode) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode { id })?;
        node.failure_mode = mode;
        Ok(())
    }

    pub fn set_redundancy_group(
        &mut self,
        id: NodeId,
        label: impl Into<String>,
    ) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode { id })?;
        node.redundancy_group = label.into();
        Ok(())
    }

    pub fn rename(&mut self, id: NodeId, name: impl Into<String>) -> Result<(), GraphError> {
        let node = self.nodes.get_mut(&id).ok_or(GraphError::UnknownNode { id })?;
        node.name = name.into();
        Ok(())
    }
}
