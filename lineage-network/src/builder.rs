//! End-to-end construction of a cluster network from a cluster family

use crate::cluster::BitsetCluster;
use crate::confidence::{ConfidencePropagator, ConfidenceReport};
use crate::hasse::HasseConstructor;
use crate::lsa::{LsaAnalyzer, LsaMap};
use crate::network::Network;
use crate::reticulate::ReticulateConverter;
use crate::snapshot::NetworkSnapshot;
use lineage_core::{LineageResult, MutationGroup, NetworkConfig, NodeId};
use tracing::{debug, info};

/// A converted network with its analysis results
#[derive(Debug, Clone)]
pub struct ClusterNetwork {
    pub network: Network,
    /// Sorted input clusters; `clusters[i]` belongs to `NodeId(i)`
    pub clusters: Vec<BitsetCluster>,
    pub synthetic_root: bool,
    pub hubs: Vec<NodeId>,
    pub lsa: LsaMap,
    pub confidence: ConfidenceReport,
}

impl ClusterNetwork {
    pub fn snapshot(&self) -> NetworkSnapshot {
        self.network.snapshot()
    }
}

pub struct ClusterNetworkBuilder {
    config: NetworkConfig,
}

impl ClusterNetworkBuilder {
    pub fn new(config: NetworkConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    /// Hasse diagram, hub conversion, LSA analysis and confidence propagation,
    /// in that order
    pub fn build(
        &self,
        groups: &[MutationGroup],
        clusters: Vec<BitsetCluster>,
    ) -> LineageResult<ClusterNetwork> {
        info!(
            "Constructing cluster network (mutation groups={}, clusters={})",
            groups.len(),
            clusters.len()
        );

        let hasse = HasseConstructor::new(&self.config).construct(groups, clusters)?;
        let mut network = hasse.network;

        let hubs = ReticulateConverter::new(&self.config).convert(&mut network)?;
        let lsa = LsaAnalyzer::new().analyze(&network);
        debug!("Found stable ancestors for {} reticulations", lsa.len());
        let confidence = ConfidencePropagator::new().propagate(&mut network, &lsa);

        if self.config.validate_acyclic {
            network.validate_acyclic()?;
        }

        info!(
            "Cluster network ready: {} nodes, {} edges, {} hubs",
            network.node_count(),
            network.edge_count(),
            hubs.len()
        );

        Ok(ClusterNetwork {
            network,
            clusters: hasse.clusters,
            synthetic_root: hasse.synthetic_root,
            hubs,
            lsa,
            confidence,
        })
    }
}
