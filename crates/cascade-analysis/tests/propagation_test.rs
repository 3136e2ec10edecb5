//! Cascade engine behavior: seeds, strength table, dampening, convergence.

use cascade_analysis::graph::SystemGraph;
use cascade_analysis::propagation::{
    restore_statuses, run_propagation, snapshot_statuses,
};
use cascade_core::config::PropagationConfig;
use cascade_core::errors::AnalysisError;
use cascade_core::types::{DependencyStrength, NodeId, SystemStatus};

fn config() -> PropagationConfig {
    PropagationConfig::default()
}

fn status_of(g: &SystemGraph, id: NodeId) -> SystemStatus {
    g.node(id).unwrap().status
}

/// A depends on B (Critical), B depends on C (Critical), no groups.
fn critical_chain() -> (SystemGraph, NodeId, NodeId, NodeId) {
    let mut g = SystemGraph::new();
    let a = g.add_node("A");
    let b = g.add_node("B");
    let c = g.add_node("C");
    g.add_edge(a, b, DependencyStrength::Critical).unwrap();
    g.add_edge(b, c, DependencyStrength::Critical).unwrap();
    (g, a, b, c)
}

#[test]
fn no_failed_seeds_is_an_error_and_a_no_op() {
    let (mut g, a, b, c) = critical_chain();
    g.set_status(b, SystemStatus::Degraded).unwrap();

    let err = run_propagation(&mut g, &config()).unwrap_err();
    assert_eq!(err, AnalysisError::NoFailedSeeds);

    assert_eq!(status_of(&g, a), SystemStatus::Nominal);
    assert_eq!(status_of(&g, b), SystemStatus::Degraded);
    assert_eq!(status_of(&g, c), SystemStatus::Nominal);
}

#[test]
fn critical_chain_cascades_to_failure() {
    let (mut g, a, b, c) = critical_chain();
    g.set_status(c, SystemStatus::Failed).unwrap();

    let report = run_propagation(&mut g, &config()).unwrap();

    assert_eq!(status_of(&g, b), SystemStatus::Failed);
    assert_eq!(status_of(&g, a), SystemStatus::Failed);
    assert_eq!(report.seed_count, 1);
    assert_eq!(report.statuses_changed, 2);
    assert_eq!(
        report.explanations,
        vec![
            "A FAILED due to CRITICAL dependency on B.".to_string(),
            "B FAILED due to CRITICAL dependency on C.".to_string(),
            "C is FAILED (source).".to_string(),
        ]
    );
}

#[test]
fn degraded_nodes_do_not_propagate() {
    // A depends on B (Critical), B depends on C (Major). C's failure only
    // degrades B, and a degraded B must not touch A.
    let mut g = SystemGraph::new();
    let a = g.add_node("A");
    let b = g.add_node("B");
    let c = g.add_node("C");
    g.add_edge(a, b, DependencyStrength::Critical).unwrap();
    g.add_edge(b, c, DependencyStrength::Major).unwrap();
    g.set_status(c, SystemStatus::Failed).unwrap();

    let report = run_propagation(&mut g, &config()).unwrap();

    assert_eq!(status_of(&g, b), SystemStatus::Degraded);
    assert_eq!(status_of(&g, a), SystemStatus::Nominal);
    assert!(report
        .explanations
        .contains(&"B degraded due to MAJOR dependency on C.".to_string()));
    assert!(!report.causes.contains_key(&a));
}

#[test]
fn minor_edge_degrades_nominal_only() {
    let mut g = SystemGraph::new();
    let a = g.add_node("A");
    let b = g.add_node("B");
    g.add_edge(a, b, DependencyStrength::Minor).unwrap();
    g.set_status(b, SystemStatus::Failed).unwrap();

    run_propagation(&mut g, &config()).unwrap();
    assert_eq!(status_of(&g, a), SystemStatus::Degraded);
}

#[test]
fn informational_edge_never_changes_status() {
    let mut g = SystemGraph::new();
    let a = g.add_node("A");
    let b = g.add_node("B");
    g.add_edge(a, b, DependencyStrength::Informational).unwrap();
    g.set_status(b, SystemStatus::Failed).unwrap();

    let report = run_propagation(&mut g, &config()).unwrap();

    assert_eq!(status_of(&g, a), SystemStatus::Nominal);
    assert!(report.is_contained());
    // Only the seed line remains.
    assert_eq!(report.explanations, vec!["B is FAILED (source).".to_string()]);
}

#[test]
fn seed_with_no_dependents_is_contained() {
    let mut g = SystemGraph::new();
    let a = g.add_node("Isolated");
    g.set_status(a, SystemStatus::Failed).unwrap();

    let report = run_propagation(&mut g, &config()).unwrap();
    assert!(report.is_contained());
    assert_eq!(report.seed_count, 1);
}

#[test]
fn redundancy_dampens_critical_to_degraded() {
    let mut g = SystemGraph::new();
    let bus_a = g.add_node("Bus A");
    let bus_b = g.add_node("Bus B");
    let avionics = g.add_node("Avionics");
    g.set_redundancy_group(bus_a, "ELEC_BUS").unwrap();
    g.set_redundancy_group(bus_b, "ELEC_BUS").unwrap();
    g.add_edge(avionics, bus_a, DependencyStrength::Critical).unwrap();
    g.set_status(bus_a, SystemStatus::Failed).unwrap();

    let report = run_propagation(&mut g, &config()).unwrap();

    assert_eq!(status_of(&g, avionics), SystemStatus::Degraded);
    assert!(report
        .explanations
        .contains(&"Avionics degraded due to CRITICAL dependency on Bus A.".to_string()));
}

#[test]
fn fully_failed_group_escalates_critical_to_failed() {
    let mut g = SystemGraph::new();
    let bus_a = g.add_node("Bus A");
    let bus_b = g.add_node("Bus B");
    let avionics = g.add_node("Avionics");
    g.set_redundancy_group(bus_a, "ELEC_BUS").unwrap();
    g.set_redundancy_group(bus_b, "ELEC_BUS").unwrap();
    g.add_edge(avionics, bus_a, DependencyStrength::Critical).unwrap();
    g.set_status(bus_a, SystemStatus::Failed).unwrap();
    g.set_status(bus_b, SystemStatus::Failed).unwrap();

    run_propagation(&mut g, &config()).unwrap();
    assert_eq!(status_of(&g, avionics), SystemStatus::Failed);
}

#[test]
fn cause_is_overwritten_when_status_worsens_later() {
    // D is first degraded by the Minor edge onto the seed, then fails when
    // C (failed via Critical) reaches it. The last applied change wins.
    let mut g = SystemGraph::new();
    let b = g.add_node("B");
    let c = g.add_node("C");
    let d = g.add_node("D");
    g.add_edge(d, b, DependencyStrength::Minor).unwrap();
    g.add_edge(c, b, DependencyStrength::Critical).unwrap();
    g.add_edge(d, c, DependencyStrength::Critical).unwrap();
    g.set_status(b, SystemStatus::Failed).unwrap();

    let report = run_propagation(&mut g, &config()).unwrap();

    assert_eq!(status_of(&g, d), SystemStatus::Failed);
    assert_eq!(
        report.causes.get(&d).map(String::as_str),
        Some("D FAILED due to CRITICAL dependency on C.")
    );
}

#[test]
fn monotonicity_over_a_mixed_graph() {
    let mut g = SystemGraph::new();
    let a = g.add_node("A");
    let b = g.add_node("B");
    let c = g.add_node("C");
    let d = g.add_node("D");
    g.add_edge(a, b, DependencyStrength::Critical).unwrap();
    g.add_edge(b, c, DependencyStrength::Major).unwrap();
    g.add_edge(d, c, DependencyStrength::Informational).unwrap();
    g.set_status(c, SystemStatus::Failed).unwrap();
    g.set_status(a, SystemStatus::Degraded).unwrap();

    let before = snapshot_statuses(&g);
    run_propagation(&mut g, &config()).unwrap();

    for node in g.nodes() {
        assert!(node.status >= before[&node.id], "status regressed on {}", node.name);
    }
}

#[test]
fn rerun_after_convergence_changes_nothing() {
    let (mut g, _, _, c) = critical_chain();
    g.set_status(c, SystemStatus::Failed).unwrap();

    run_propagation(&mut g, &config()).unwrap();
    let statuses = snapshot_statuses(&g);

    // Seeds are re-collected from the graph, so the converged Failed set
    // all seeds the second run; with nothing left to apply, only the
    // fixed source lines come back.
    let second = run_propagation(&mut g, &config()).unwrap();
    assert_eq!(snapshot_statuses(&g), statuses);
    assert_eq!(second.statuses_changed, 0);
    assert_eq!(second.seed_count, 3);
    assert_eq!(
        second.explanations,
        vec![
            "A is FAILED (source).".to_string(),
            "B is FAILED (source).".to_string(),
            "C is FAILED (source).".to_string(),
        ]
    );
}

#[test]
fn snapshot_restore_round_trip() {
    let (mut g, a, b, c) = critical_chain();
    g.set_status(c, SystemStatus::Failed).unwrap();

    let baseline = snapshot_statuses(&g);
    run_propagation(&mut g, &config()).unwrap();
    assert_eq!(status_of(&g, a), SystemStatus::Failed);

    restore_statuses(&mut g, &baseline);
    assert_eq!(status_of(&g, a), SystemStatus::Nominal);
    assert_eq!(status_of(&g, b), SystemStatus::Nominal);
    assert_eq!(status_of(&g, c), SystemStatus::Failed);
}

#[test]
fn restore_skips_ids_no_longer_present() {
    let (mut g, a, _, c) = critical_chain();
    g.set_status(c, SystemStatus::Failed).unwrap();

    let baseline = snapshot_statuses(&g);
    run_propagation(&mut g, &config()).unwrap();
    g.remove_node(c);

    restore_statuses(&mut g, &baseline);
    assert_eq!(status_of(&g, a), SystemStatus::Nominal);
}

#[test]
fn multiple_preexisting_failures_all_seed() {
    let mut g = SystemGraph::new();
    let a = g.add_node("A");
    let b = g.add_node("B");
    let c = g.add_node("C");
    g.add_edge(a, b, DependencyStrength::Critical).unwrap();
    g.set_status(b, SystemStatus::Failed).unwrap();
    g.set_status(c, SystemStatus::Failed).unwrap();

    let report = run_propagation(&mut g, &config()).unwrap();

    assert_eq!(report.seed_count, 2);
    assert!(report
        .explanations
        .contains(&"B is FAILED (source).".to_string()));
    assert!(report
        .explanations
        .contains(&"C is FAILED (source).".to_string()));
    assert_eq!(status_of(&g, a), SystemStatus::Failed);
}

#[test]
fn explanations_are_sorted_lexicographically() {
    let mut g = SystemGraph::new();
    let z = g.add_node("Zulu");
    let a = g.add_node("Alpha");
    let m = g.add_node("Mike");
    g.add_edge(z, m, DependencyStrength::Critical).unwrap();
    g.add_edge(a, m, DependencyStrength::Critical).unwrap();
    g.set_status(m, SystemStatus::Failed).unwrap();

    let report = run_propagation(&mut g, &config()).unwrap();
    let mut sorted = report.explanations.clone();
    sorted.sort();
    assert_eq!(report.explanations, sorted);
    assert_eq!(report.explanations.len(), 3);
}

#[test]
fn cycles_converge() {
    // A and B depend on each other; C kicks the cycle off.
    let mut g = SystemGraph::new();
    let a = g.add_node("A");
    let b = g.add_node("B");
    let c = g.add_node("C");
    g.add_edge(a, b, DependencyStrength::Critical).unwrap();
    g.add_edge(b, a, DependencyStrength::Critical).unwrap();
    g.add_edge(b, c, DependencyStrength::Critical).unwrap();
    g.set_status(c, SystemStatus::Failed).unwrap();

    let report = run_propagation(&mut g, &config()).unwrap();

    assert_eq!(status_of(&g, a), SystemStatus::Failed);
    assert_eq!(status_of(&g, b), SystemStatus::Failed);
    // Bounded by the lattice height: no runaway re-queuing.
    assert!(report.steps <= 3 * g.len());
}
