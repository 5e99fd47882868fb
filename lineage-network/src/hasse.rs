//! Hasse diagram construction
//!
//! Clusters are sorted so that supersets come first, one node is created per
//! cluster in that order, and each node is linked below its lowest supersets.
//! Node `i` corresponds to `clusters[i]` of the returned diagram.

use crate::bitset::BitSet;
use crate::cluster::{sorted_by_decreasing_cardinality, BitsetCluster};
use crate::graph::NodeKind;
use crate::network::Network;
use lineage_core::{
    EdgeConfidence, LineageError, LineageResult, MutationGroup, NetworkConfig, NodeId, RootPolicy,
};
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// Hasse diagram with the clusters backing each node
#[derive(Debug, Clone)]
pub struct HasseDiagram {
    pub network: Network,
    /// Sorted clusters; `clusters[i]` belongs to `NodeId(i)`
    pub clusters: Vec<BitsetCluster>,
    /// Whether the root cluster was synthesized rather than supplied
    pub synthetic_root: bool,
}

pub struct HasseConstructor {
    root_policy: RootPolicy,
    edge_confidence: EdgeConfidence,
}

impl HasseConstructor {
    pub fn new(config: &NetworkConfig) -> Self {
        Self {
            root_policy: config.root_policy,
            edge_confidence: config.edge_confidence,
        }
    }

    /// Build the Hasse diagram of `clusters` over the given mutation groups.
    ///
    /// Fails before touching the network if the clusters are empty, reuse an
    /// id, reference a group outside `groups`, or (under `RootPolicy::Reject`)
    /// lack a cluster spanning every group.
    pub fn construct(
        &self,
        groups: &[MutationGroup],
        clusters: Vec<BitsetCluster>,
    ) -> LineageResult<HasseDiagram> {
        let (clusters, synthetic_root) = self.prepare(groups.len(), clusters)?;

        let mut network = Network::with_capacity(clusters.len());
        for cluster in &clusters {
            network.add_node(cluster.confidence, NodeKind::Cluster(cluster.id));
        }

        let root = network.root();
        let mut stack: Vec<NodeId> = Vec::new();
        let mut visited = vec![false; clusters.len()];

        for (i, cluster) in clusters.iter().enumerate().skip(1) {
            let node = NodeId(i);

            // starting from the root, walk down through supersets of cluster;
            // a superset none of whose children is a superset covers node
            visited.fill(false);
            visited[root.index()] = true;
            stack.push(root);
            let mut covers = Vec::new();
            while let Some(v) = stack.pop() {
                let mut below_child = false;
                for w in network.children(v) {
                    if BitsetCluster::contains(&clusters[w.index()], cluster) {
                        below_child = true;
                        if !visited[w.index()] {
                            visited[w.index()] = true;
                            stack.push(w);
                        }
                    }
                }
                if !below_child {
                    covers.push(v);
                }
            }

            let confidence = match self.edge_confidence {
                EdgeConfidence::Cluster => cluster.confidence,
                EdgeConfidence::Unit => 1.0,
            };
            for v in covers {
                let e = network.add_edge(v, node)?;
                network.set_edge_confidence(e, confidence);
            }
        }

        // label each node with the groups it holds but none of its children do
        for (i, cluster) in clusters.iter().enumerate() {
            let v = NodeId(i);
            let own = network
                .children(v)
                .fold(cluster.bits().clone(), |acc, w| {
                    acc.difference(clusters[w.index()].bits())
                });
            let label = own.iter().map(|t| groups[t].clone()).collect();
            network.set_label(v, label);
        }

        info!(
            "Constructed Hasse diagram: {} nodes, {} edges",
            network.node_count(),
            network.edge_count()
        );

        Ok(HasseDiagram {
            network,
            clusters,
            synthetic_root,
        })
    }

    /// Validate the input and return it sorted, root first
    fn prepare(
        &self,
        num_groups: usize,
        clusters: Vec<BitsetCluster>,
    ) -> LineageResult<(Vec<BitsetCluster>, bool)> {
        if clusters.is_empty() {
            return Err(LineageError::InvalidInput("no clusters supplied".to_string()));
        }

        let mut seen = HashSet::with_capacity(clusters.len());
        for cluster in &clusters {
            if !seen.insert(cluster.id) {
                return Err(LineageError::DuplicateClusterId(cluster.id));
            }
            if let Some(max) = cluster.bits().max() {
                if max >= num_groups {
                    return Err(LineageError::InvalidInput(format!(
                        "cluster {} references mutation group {} but only {} groups exist",
                        cluster.id, max, num_groups
                    )));
                }
            }
        }

        let mut clusters = sorted_by_decreasing_cardinality(clusters);
        let universe = BitSet::full(num_groups);
        if clusters[0].bits().contains(&universe) {
            return Ok((clusters, false));
        }

        match self.root_policy {
            RootPolicy::Reject => Err(LineageError::MissingRoot(format!(
                "largest cluster {} covers {} of {} mutation groups",
                clusters[0].id,
                clusters[0].cardinality(),
                num_groups
            ))),
            RootPolicy::Synthesize => {
                let max_id = clusters.iter().map(|c| c.id.value()).max().unwrap_or(0);
                let id = max_id.checked_add(1).ok_or_else(|| {
                    LineageError::InvalidInput(format!(
                        "cannot synthesize a root cluster id above {}",
                        max_id
                    ))
                })?;
                warn!(
                    "No cluster spans all {} mutation groups; synthesizing root cluster {}",
                    num_groups, id
                );
                clusters.insert(0, BitsetCluster::new(id, universe, 1.0));
                debug!("Root cluster inserted ahead of {} input clusters", clusters.len() - 1);
                Ok((clusters, true))
            }
        }
    }
}
