//! Node and edge primitives of the cluster network

use lineage_core::{ClusterId, MutationGroup, NodeId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where a node came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "type", content = "cluster")]
pub enum NodeKind {
    /// One node per input cluster, created by Hasse construction
    Cluster(ClusterId),
    /// Synthetic node absorbing the parents of a multi-parent node
    Hub,
}

#[derive(Debug, Clone)]
pub struct Node {
    id: NodeId,
    /// Mutation groups attributed to this node and none of its children
    label: Vec<MutationGroup>,
    confidence: f64,
    kind: NodeKind,
}

impl Node {
    pub(crate) fn new(id: NodeId, confidence: f64, kind: NodeKind) -> Self {
        Self {
            id,
            label: Vec::new(),
            confidence,
            kind,
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn label(&self) -> &[MutationGroup] {
        &self.label
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn is_hub(&self) -> bool {
        self.kind == NodeKind::Hub
    }

    pub fn cluster_id(&self) -> Option<ClusterId> {
        match self.kind {
            NodeKind::Cluster(id) => Some(id),
            NodeKind::Hub => None,
        }
    }

    pub(crate) fn set_label(&mut self, label: Vec<MutationGroup>) {
        self.label = label;
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}): ", self.id, self.confidence)?;
        for (i, group) in self.label.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", group)?;
        }
        Ok(())
    }
}

/// Directed edge; two edges are equal when they join the same ordered pair
#[derive(Debug, Clone)]
pub struct Edge {
    source: NodeId,
    target: NodeId,
    confidence: f64,
    reticulate: bool,
}

impl Edge {
    pub(crate) fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            source,
            target,
            confidence: 1.0,
            reticulate: false,
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn target(&self) -> NodeId {
        self.target
    }

    pub fn confidence(&self) -> f64 {
        self.confidence
    }

    pub fn is_reticulate(&self) -> bool {
        self.reticulate
    }

    pub(crate) fn set_confidence(&mut self, confidence: f64) {
        self.confidence = confidence;
    }

    pub(crate) fn set_reticulate(&mut self) {
        self.reticulate = true;
    }
}

impl PartialEq for Edge {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source && self.target == other.target
    }
}

impl Eq for Edge {}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} to {} ({}, {})",
            self.source, self.target, self.confidence, self.reticulate
        )
    }
}
