//! Canned demo graph used by docs and tests.

use cascade_core::types::{DependencyStrength, NodeId, SystemKind};

use super::model::SystemGraph;

/// The five-system demo graph and its node ids.
#[derive(Debug)]
pub struct ExampleGraph {
    pub graph: SystemGraph,
    pub electrical: NodeId,
    pub avionics: NodeId,
    pub autopilot: NodeId,
    pub hydraulics: NodeId,
    pub flight_controls: NodeId,
}

/// Build the demo graph: avionics and flight controls hang off the
/// electrical bus, autopilot hangs off avionics, flight controls also
/// depend on hydraulics. All edges Major.
pub fn example_graph() -> ExampleGraph {
    let mut graph = SystemGraph::new();

    let electrical = graph.add_node("Electrical");
    let avionics = graph.add_node("Avionics");
    let autopilot = graph.add_node("Autopilot");
    let hydraulics = graph.add_node("Hydraulics");
    let flight_controls = graph.add_node("Flight Controls");

    let _ = graph.set_kind(electrical, SystemKind::Electrical);
    let _ = graph.set_kind(avionics, SystemKind::Avionics);
    let _ = graph.set_kind(autopilot, SystemKind::Autopilot);
    let _ = graph.set_kind(hydraulics, SystemKind::Hydraulics);
    let _ = graph.set_kind(flight_controls, SystemKind::FlightControls);

    // Ids are fresh, so none of these can be rejected.
    let _ = graph.add_edge(avionics, electrical, DependencyStrength::Major);
    let _ = graph.add_edge(autopilot, avionics, DependencyStrength::Major);
    let _ = graph.add_edge(flight_controls, hydraulics, DependencyStrength::Major);
    let _ = graph.add_edge(flight_controls, electrical, DependencyStrength::Major);

    ExampleGraph {
        graph,
        electrical,
        avionics,
        autopilot,
        hydraulics,
        flight_controls,
    }
}
