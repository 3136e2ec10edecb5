//! System dependency graph — arena-backed nodes, dual adjacency sets,
//! ordered-pair edge index.

pub mod model;
pub mod sample;
pub mod types;

pub use model::SystemGraph;
pub use sample::{example_graph, ExampleGraph};
pub use types::{DependencyEdge, SystemNode};
