//! Cluster network construction for Lineage
//!
//! Turns a family of mutation-group clusters into a rooted directed acyclic
//! network: the Hasse diagram of the family under containment, with every
//! multi-parent node routed through an explicit reticulation hub whose
//! in-edges carry confidence shares.

pub mod bitset;
pub mod builder;
pub mod cluster;
pub mod confidence;
pub mod graph;
pub mod hasse;
pub mod lsa;
pub mod network;
pub mod reticulate;
pub mod snapshot;

// Re-export commonly used types
pub use bitset::BitSet;
pub use builder::{ClusterNetwork, ClusterNetworkBuilder};
pub use cluster::{sorted_by_decreasing_cardinality, BitsetCluster};
pub use confidence::{ConfidencePropagator, ConfidenceReport, ReticulateShare};
pub use graph::{Edge, Node, NodeKind};
pub use hasse::{HasseConstructor, HasseDiagram};
pub use lsa::{LsaAnalyzer, LsaMap};
pub use network::{EdgeWeight, Network};
pub use reticulate::ReticulateConverter;
pub use snapshot::{EdgeSnapshot, NetworkSnapshot, NodeSnapshot};
