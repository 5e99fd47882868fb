//! Serializable view of a finished network

use crate::graph::NodeKind;
use crate::network::Network;
use lineage_core::{MutationGroup, NodeId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub id: NodeId,
    pub label: Vec<MutationGroup>,
    pub confidence: f64,
    pub kind: NodeKind,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EdgeSnapshot {
    pub source: NodeId,
    pub target: NodeId,
    pub confidence: f64,
    pub reticulate: bool,
}

/// Nodes in id order and live edges grouped by source id, each group in
/// adjacency order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub root: NodeId,
    pub nodes: Vec<NodeSnapshot>,
    pub edges: Vec<EdgeSnapshot>,
}

impl NetworkSnapshot {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn reticulate_edges(&self) -> impl Iterator<Item = &EdgeSnapshot> {
        self.edges.iter().filter(|e| e.reticulate)
    }
}

impl Network {
    pub fn snapshot(&self) -> NetworkSnapshot {
        NetworkSnapshot::from(self)
    }
}

impl From<&Network> for NetworkSnapshot {
    fn from(network: &Network) -> Self {
        let nodes = network
            .nodes()
            .map(|n| NodeSnapshot {
                id: n.id(),
                label: n.label().to_vec(),
                confidence: n.confidence(),
                kind: n.kind(),
            })
            .collect();
        let edges = network
            .edges()
            .map(|(_, e)| EdgeSnapshot {
                source: e.source(),
                target: e.target(),
                confidence: e.confidence(),
                reticulate: e.is_reticulate(),
            })
            .collect();

        Self {
            root: network.root(),
            nodes,
            edges,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reticulate::ReticulateConverter;
    use lineage_core::ClusterId;
    use pretty_assertions::assert_eq;

    fn merged() -> Network {
        let mut net = Network::new();
        for i in 0..4 {
            net.add_node(0.5, NodeKind::Cluster(ClusterId(i)));
        }
        for (s, t) in [(0, 1), (0, 2), (1, 3), (2, 3)] {
            net.add_edge(NodeId(s), NodeId(t)).unwrap();
        }
        ReticulateConverter::default().convert(&mut net).unwrap();
        net
    }

    #[test]
    fn test_snapshot_lists_live_edges_by_source() {
        let snapshot = merged().snapshot();

        assert_eq!(snapshot.root, NodeId(0));
        assert_eq!(snapshot.nodes.len(), 5);
        assert_eq!(snapshot.nodes[4].kind, NodeKind::Hub);

        let pairs: Vec<(usize, usize)> = snapshot
            .edges
            .iter()
            .map(|e| (e.source.index(), e.target.index()))
            .collect();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (1, 4), (2, 4), (4, 3)]);
        assert_eq!(snapshot.reticulate_edges().count(), 2);
    }

    #[test]
    fn test_snapshot_json_shape() {
        let snapshot = merged().snapshot();
        let value: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(value["root"], 0);
        assert_eq!(value["nodes"][4]["kind"]["type"], "hub");
        assert_eq!(value["nodes"][1]["kind"]["cluster"], 1);
        assert_eq!(value["edges"][2]["reticulate"], true);

        let back = NetworkSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
        assert_eq!(back, snapshot);
    }
}
