//! Cluster-network reconstruction for multi-sample tumor lineage analysis
//!
//! Facade over the workspace crates: `lineage-core` carries ids, errors,
//! configuration and logging; `lineage-network` builds the network.

pub use lineage_core as core;
pub use lineage_network as network;

pub use lineage_core::{
    init_logging, load_config, ClusterId, Config, EdgeConfidence, LineageError, LineageResult,
    MutationGroup, NetworkConfig, NodeId, RootPolicy,
};
pub use lineage_network::{
    BitSet, BitsetCluster, ClusterNetwork, ClusterNetworkBuilder, Network, NetworkSnapshot,
    NodeKind,
};

use std::path::Path;
use tracing::info;

/// Build a cluster network with the `[network]` section of `config`
pub fn construct_network(
    config: &Config,
    groups: &[MutationGroup],
    clusters: Vec<BitsetCluster>,
) -> LineageResult<ClusterNetwork> {
    ClusterNetworkBuilder::new(config.network.clone()).build(groups, clusters)
}

/// Load a TOML config, install logging from it, and build the network
pub fn construct_network_from_config_file(
    path: &Path,
    groups: &[MutationGroup],
    clusters: Vec<BitsetCluster>,
) -> LineageResult<ClusterNetwork> {
    let config = load_config(path)?;
    init_logging(&config.logging);
    info!("Loaded configuration from {}", path.display());
    construct_network(&config, groups, clusters)
}
