//! Identifier and label types used throughout lineage

use serde::{Deserialize, Serialize};
use std::fmt;

/// Node identifier - equals the node's position in the network's node table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The first node of every network
    pub const ROOT: Self = Self(0);

    /// Create a new NodeId
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Index into id-aligned tables
    pub fn index(&self) -> usize {
        self.0
    }

    /// Check if this is the root node
    pub fn is_root(&self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        Self(id)
    }
}

/// Edge identifier - position in the network's edge arena
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EdgeId(pub usize);

impl EdgeId {
    pub fn index(&self) -> usize {
        self.0
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e{}", self.0)
    }
}

/// Cluster identifier assigned by the upstream clustering stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Default)]
pub struct ClusterId(pub u32);

impl ClusterId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClusterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ClusterId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// A group of mutations sharing one sample-presence pattern.
///
/// The `tag` is a binary string with one character per sample, `'1'` where the
/// sample carries the group's mutations. A tag with no set sample is the
/// germline group, rendered as `GL`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MutationGroup {
    /// Index of this group in the mutation-group table (bit position in clusters)
    pub id: usize,

    /// Sample-presence tag, e.g. "0110"
    pub tag: String,

    /// Number of SNVs assigned to the group
    #[serde(default)]
    pub snv_count: usize,
}

impl MutationGroup {
    pub fn new(id: usize, tag: impl Into<String>) -> Self {
        Self {
            id,
            tag: tag.into(),
            snv_count: 0,
        }
    }

    /// Set the number of SNVs in this group
    pub fn with_snv_count(mut self, count: usize) -> Self {
        self.snv_count = count;
        self
    }

    /// Indices of the samples represented by this group
    pub fn sample_indices(&self) -> Vec<usize> {
        self.tag
            .char_indices()
            .filter(|(_, c)| *c == '1')
            .map(|(i, _)| i)
            .collect()
    }

    /// Check whether the group is present in a given sample
    pub fn contains_sample(&self, sample: usize) -> bool {
        self.tag.as_bytes().get(sample) == Some(&b'1')
    }

    /// Germline groups are present in no sample
    pub fn is_germline(&self) -> bool {
        !self.tag.contains('1')
    }
}

impl fmt::Display for MutationGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_germline() {
            write!(f, "GL")
        } else {
            write!(f, "{} ({})", self.tag, self.snv_count)
        }
    }
}
