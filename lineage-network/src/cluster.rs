//! Weighted clusters of mutation groups
//!
//! A cluster is produced once by the upstream clustering stage and read by the
//! network builder. Its bits are private; the algebra below hands back new
//! clusters instead of touching either operand.

use crate::bitset::BitSet;
use lineage_core::ClusterId;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BitsetCluster {
    bits: BitSet,

    /// Support for the cluster across the input trees or samples
    pub weight: f64,

    /// Confidence assigned by the clustering stage (0.0 to 1.0)
    pub confidence: f64,

    pub id: ClusterId,

    /// Trees this cluster was observed in
    #[serde(default)]
    pub origin_tree_ids: Vec<u32>,
}

impl BitsetCluster {
    /// Create a cluster with weight 1.0
    pub fn new(id: u32, bits: BitSet, confidence: f64) -> Self {
        Self {
            bits,
            weight: 1.0,
            confidence,
            id: ClusterId(id),
            origin_tree_ids: Vec::new(),
        }
    }

    /// Create a cluster from member indices
    pub fn from_indices(
        id: u32,
        indices: impl IntoIterator<Item = usize>,
        confidence: f64,
    ) -> Self {
        Self::new(id, indices.into_iter().collect(), confidence)
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_origin_trees(mut self, tree_ids: Vec<u32>) -> Self {
        self.origin_tree_ids = tree_ids;
        self
    }

    pub fn bits(&self) -> &BitSet {
        &self.bits
    }

    pub fn cardinality(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Members in increasing order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits.iter()
    }

    /// Union of the two clusters. Metadata is taken from `a`.
    pub fn union(a: &BitsetCluster, b: &BitsetCluster) -> BitsetCluster {
        a.derive(a.bits.union(&b.bits))
    }

    /// Intersection of the two clusters. Metadata is taken from `a`.
    pub fn intersection(a: &BitsetCluster, b: &BitsetCluster) -> BitsetCluster {
        a.derive(a.bits.intersection(&b.bits))
    }

    /// `a` minus `b`. Metadata is taken from `a`.
    pub fn difference(a: &BitsetCluster, b: &BitsetCluster) -> BitsetCluster {
        a.derive(a.bits.difference(&b.bits))
    }

    /// True iff every member of `b` is a member of `a`
    pub fn contains(a: &BitsetCluster, b: &BitsetCluster) -> bool {
        a.bits.contains(&b.bits)
    }

    /// True iff `a \ b`, `b \ a` and `a ∩ b` are all non-empty
    pub fn incompatible(a: &BitsetCluster, b: &BitsetCluster) -> bool {
        a.bits.incompatible(&b.bits)
    }

    /// Set equality; weight, confidence and id are not compared
    pub fn equals(a: &BitsetCluster, b: &BitsetCluster) -> bool {
        a.bits == b.bits
    }

    /// Descending cardinality, then ascending member order, then ascending id
    pub fn canonical_cmp(a: &BitsetCluster, b: &BitsetCluster) -> Ordering {
        a.bits
            .canonical_cmp(&b.bits)
            .then_with(|| a.id.cmp(&b.id))
    }

    fn derive(&self, bits: BitSet) -> BitsetCluster {
        BitsetCluster {
            bits,
            weight: self.weight,
            confidence: self.confidence,
            id: self.id,
            origin_tree_ids: self.origin_tree_ids.clone(),
        }
    }
}

/// Sort clusters so every superset precedes its subsets
pub fn sorted_by_decreasing_cardinality(mut clusters: Vec<BitsetCluster>) -> Vec<BitsetCluster> {
    clusters.sort_by(BitsetCluster::canonical_cmp);
    clusters
}

impl fmt::Display for BitsetCluster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ({:.2})", self.bits, self.confidence)
    }
}
