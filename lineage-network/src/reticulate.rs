//! Split multi-parent nodes into explicit reticulation hubs

use crate::graph::NodeKind;
use crate::network::Network;
use lineage_core::{EdgeConfidence, LineageResult, NetworkConfig, NodeId};
use tracing::{debug, info};

/// Rewrites every non-hub node with in-degree > 1 so that all of its parents
/// feed a new hub node, which becomes the node's only parent:
///
/// ```text
///   p1   p2          p1   p2
///    \   /            \   /     (reticulate)
///     v        =>      hub
///                       |
///                       v
/// ```
///
/// Hubs are never split again, so converting an already converted network
/// changes nothing. The `hub -> v` edge carries `v`'s confidence, or 1.0 under
/// `EdgeConfidence::Unit`.
#[derive(Debug, Default)]
pub struct ReticulateConverter {
    edge_confidence: EdgeConfidence,
}

impl ReticulateConverter {
    pub fn new(config: &NetworkConfig) -> Self {
        Self {
            edge_confidence: config.edge_confidence,
        }
    }

    /// Convert in place and return the hubs created, in creation order
    pub fn convert(&self, network: &mut Network) -> LineageResult<Vec<NodeId>> {
        let targets: Vec<NodeId> = network
            .nodes()
            .filter(|n| !n.is_hub())
            .map(|n| n.id())
            .filter(|v| network.in_degree(*v) > 1)
            .collect();

        let mut hubs = Vec::with_capacity(targets.len());
        for v in targets {
            let hub = network.add_node(1.0, NodeKind::Hub);
            let in_edges: Vec<_> = network.in_edges(v).to_vec();

            for e in &in_edges {
                let (parent, confidence) = {
                    let edge = network.edge(*e);
                    (edge.source(), edge.confidence())
                };
                let new_edge = network.add_edge(parent, hub)?;
                network.set_edge_confidence(new_edge, confidence);
                network.mark_reticulate(new_edge);
            }

            let hub_edge = network.add_edge(hub, v)?;
            if self.edge_confidence == EdgeConfidence::Cluster {
                if let Some(node) = network.node(v) {
                    let confidence = node.confidence();
                    network.set_edge_confidence(hub_edge, confidence);
                }
            }

            for e in &in_edges {
                let parent = network.edge(*e).source();
                network.remove_edge(parent, v)?;
            }

            debug!(
                "Node {} split: hub {} absorbs {} parents",
                v,
                hub,
                in_edges.len()
            );
            hubs.push(hub);
        }

        info!("Converted Hasse diagram: {} reticulation hubs", hubs.len());
        Ok(hubs)
    }
}
