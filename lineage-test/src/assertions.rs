//! Custom assertions for testing
//!
//! Structural checks on networks produced by the construction pipeline.

use lineage_network::{ClusterNetwork, Network};

/// Assert that two floats agree to within 1e-9
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "Expected {} but got {} (difference {:e})",
        expected,
        actual,
        (actual - expected).abs()
    );
}

pub fn assert_acyclic(network: &Network) {
    assert!(
        network.validate_acyclic().is_ok(),
        "Network contains a directed cycle:\n{}",
        network
    );
}

/// Assert that every multi-parent node is a hub, every hub has exactly one
/// child, and reticulate edges are exactly the in-edges of hubs
pub fn assert_converted(network: &Network) {
    for node in network.nodes() {
        let v = node.id();
        if node.is_hub() {
            assert_eq!(network.out_degree(v), 1, "Hub {} must have one child", v);
        } else {
            assert!(
                network.in_degree(v) <= 1,
                "Node {} has {} parents but is not a hub",
                v,
                network.in_degree(v)
            );
        }
    }

    for (e, edge) in network.edges() {
        let into_hub = network
            .node(edge.target())
            .map(|n| n.is_hub())
            .unwrap_or(false);
        assert_eq!(
            edge.is_reticulate(),
            into_hub,
            "Edge {} ({}) is reticulate={} but targets hub={}",
            e,
            edge,
            edge.is_reticulate(),
            into_hub
        );
    }
}

/// Assert that the in-edge confidences of every hub sum to the average
/// confidence below it, or are all zero
pub fn assert_shares_balanced(built: &ClusterNetwork) {
    for hub in &built.hubs {
        let confidences: Vec<f64> = built
            .network
            .in_edges(*hub)
            .iter()
            .map(|e| built.network.edge(*e).confidence())
            .collect();
        let total: f64 = confidences.iter().sum();

        if confidences.iter().all(|c| *c == 0.0) {
            continue;
        }
        assert_close(total, built.confidence.average_below(*hub));
    }
}
