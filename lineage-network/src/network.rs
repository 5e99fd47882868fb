//! Id-indexed directed network
//!
//! The network owns every node and edge. Nodes are appended and never removed,
//! so a `NodeId` always indexes the node table. Edges live in an arena; the
//! per-node adjacency lists hold `EdgeId`s in insertion order, and removing an
//! edge unlinks it from both lists while leaving its arena slot in place so the
//! ids of other edges stay valid.

use crate::graph::{Edge, Node, NodeKind};
use lineage_core::{EdgeId, LineageError, LineageResult, MutationGroup, NodeId};
use petgraph::graph::DiGraph;
use smallvec::SmallVec;
use std::collections::VecDeque;
use std::fmt;

type Adjacency = SmallVec<[EdgeId; 4]>;

/// Edge payload of the petgraph export
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EdgeWeight {
    pub confidence: f64,
    pub reticulate: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Network {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    live: Vec<bool>,
    out_edges: Vec<Adjacency>,
    in_edges: Vec<Adjacency>,
}

impl Network {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(nodes: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(nodes),
            edges: Vec::with_capacity(nodes),
            live: Vec::with_capacity(nodes),
            out_edges: Vec::with_capacity(nodes),
            in_edges: Vec::with_capacity(nodes),
        }
    }

    /// Append a node; its id is its position in the node table
    pub fn add_node(&mut self, confidence: f64, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node::new(id, confidence, kind));
        self.out_edges.push(Adjacency::new());
        self.in_edges.push(Adjacency::new());
        id
    }

    /// Add an edge with confidence 1.0.
    ///
    /// Both endpoints must exist, at most one live edge may join an ordered
    /// pair, and the edge may not close a directed cycle.
    pub fn add_edge(&mut self, source: NodeId, target: NodeId) -> LineageResult<EdgeId> {
        self.check_node(source)?;
        self.check_node(target)?;
        if source == target {
            return Err(LineageError::InvalidInput(format!(
                "self-loop on node {}",
                source
            )));
        }
        if self.find_edge(source, target).is_some() {
            return Err(LineageError::DuplicateEdge {
                from: source,
                to: target,
            });
        }
        if self.is_descendant(target, source) {
            return Err(LineageError::CyclicNetwork);
        }

        let id = EdgeId(self.edges.len());
        self.edges.push(Edge::new(source, target));
        self.live.push(true);
        self.out_edges[source.index()].push(id);
        self.in_edges[target.index()].push(id);
        Ok(id)
    }

    /// Unlink the edge `source -> target` and return it
    pub fn remove_edge(&mut self, source: NodeId, target: NodeId) -> LineageResult<Edge> {
        let id = self
            .find_edge(source, target)
            .ok_or(LineageError::EdgeNotFound {
                from: source,
                to: target,
            })?;

        self.out_edges[source.index()].retain(|e| *e != id);
        self.in_edges[target.index()].retain(|e| *e != id);
        self.live[id.index()] = false;
        Ok(self.edges[id.index()].clone())
    }

    /// Live edge joining `source` to `target`
    pub fn find_edge(&self, source: NodeId, target: NodeId) -> Option<EdgeId> {
        self.out_edges(source)
            .iter()
            .copied()
            .find(|e| self.edges[e.index()].target() == target)
    }

    /// The first node added. Every node of a constructed network descends from it.
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Edge by id. Ids handed out by this network are always valid, including
    /// those of removed edges.
    pub fn edge(&self, id: EdgeId) -> &Edge {
        &self.edges[id.index()]
    }

    pub fn is_live(&self, id: EdgeId) -> bool {
        self.live.get(id.index()).copied().unwrap_or(false)
    }

    pub fn out_edges(&self, v: NodeId) -> &[EdgeId] {
        self.out_edges.get(v.index()).map(|l| l.as_slice()).unwrap_or(&[])
    }

    pub fn in_edges(&self, v: NodeId) -> &[EdgeId] {
        self.in_edges.get(v.index()).map(|l| l.as_slice()).unwrap_or(&[])
    }

    pub fn in_degree(&self, v: NodeId) -> usize {
        self.in_edges(v).len()
    }

    pub fn out_degree(&self, v: NodeId) -> usize {
        self.out_edges(v).len()
    }

    pub fn children(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.out_edges(v).iter().map(|e| self.edge(*e).target())
    }

    pub fn parents(&self, v: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.in_edges(v).iter().map(|e| self.edge(*e).source())
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of live edges
    pub fn edge_count(&self) -> usize {
        self.live.iter().filter(|l| **l).count()
    }

    /// Size of the edge arena, including removed edges
    pub fn edge_capacity(&self) -> usize {
        self.edges.len()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    /// Live edges, grouped by source id in adjacency order
    pub fn edges(&self) -> impl Iterator<Item = (EdgeId, &Edge)> {
        self.out_edges
            .iter()
            .flat_map(|list| list.iter())
            .map(move |e| (*e, &self.edges[e.index()]))
    }

    /// Synthetic reticulation hubs
    pub fn hubs(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().filter(|n| n.is_hub()).map(|n| n.id())
    }

    /// Nodes with more than one parent
    pub fn reticulations(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .map(|n| n.id())
            .filter(|v| self.in_degree(*v) > 1)
    }

    /// True if `w` is reachable from `v` by at least one edge
    pub fn is_descendant(&self, v: NodeId, w: NodeId) -> bool {
        let mut seen = vec![false; self.nodes.len()];
        let mut queue: VecDeque<NodeId> = self.children(v).collect();
        while let Some(n) = queue.pop_front() {
            if n == w {
                return true;
            }
            if std::mem::replace(&mut seen[n.index()], true) {
                continue;
            }
            queue.extend(self.children(n));
        }
        false
    }

    /// Export to petgraph; node index `i` carries `NodeId(i)`
    pub fn to_petgraph(&self) -> DiGraph<NodeId, EdgeWeight> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edge_count());
        let indices: Vec<_> = self.nodes.iter().map(|n| graph.add_node(n.id())).collect();
        for (_, edge) in self.edges() {
            graph.add_edge(
                indices[edge.source().index()],
                indices[edge.target().index()],
                EdgeWeight {
                    confidence: edge.confidence(),
                    reticulate: edge.is_reticulate(),
                },
            );
        }
        graph
    }

    pub fn validate_acyclic(&self) -> LineageResult<()> {
        if petgraph::algo::is_cyclic_directed(&self.to_petgraph()) {
            Err(LineageError::CyclicNetwork)
        } else {
            Ok(())
        }
    }

    pub(crate) fn set_label(&mut self, v: NodeId, label: Vec<MutationGroup>) {
        self.nodes[v.index()].set_label(label);
    }

    pub(crate) fn set_edge_confidence(&mut self, e: EdgeId, confidence: f64) {
        self.edges[e.index()].set_confidence(confidence);
    }

    pub(crate) fn mark_reticulate(&mut self, e: EdgeId) {
        self.edges[e.index()].set_reticulate();
    }

    fn check_node(&self, v: NodeId) -> LineageResult<()> {
        if v.index() < self.nodes.len() {
            Ok(())
        } else {
            Err(LineageError::NodeNotFound(v))
        }
    }
}

/// Diagnostic dump: one line per node, then one line per live edge
impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            writeln!(f, "{}", node)?;
        }
        for (_, edge) in self.edges() {
            writeln!(f, "{}", edge)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lineage_core::ClusterId;

    fn diamond() -> (Network, [NodeId; 4]) {
        let mut net = Network::new();
        let r = net.add_node(1.0, NodeKind::Cluster(ClusterId(0)));
        let a = net.add_node(1.0, NodeKind::Cluster(ClusterId(1)));
        let b = net.add_node(1.0, NodeKind::Cluster(ClusterId(2)));
        let m = net.add_node(1.0, NodeKind::Cluster(ClusterId(3)));
        net.add_edge(r, a).unwrap();
        net.add_edge(r, b).unwrap();
        net.add_edge(a, m).unwrap();
        net.add_edge(b, m).unwrap();
        (net, [r, a, b, m])
    }

    #[test]
    fn test_node_ids_are_positions() {
        let (net, ids) = diamond();
        for (i, id) in ids.iter().enumerate() {
            assert_eq!(id.index(), i);
            assert_eq!(net.node(*id).unwrap().id(), *id);
        }
        assert_eq!(net.root(), ids[0]);
        assert_eq!(net.node_count(), 4);
        assert_eq!(net.edge_count(), 4);
    }

    #[test]
    fn test_degrees_and_neighbours() {
        let (net, [r, a, b, m]) = diamond();
        assert_eq!(net.in_degree(r), 0);
        assert_eq!(net.out_degree(r), 2);
        assert_eq!(net.in_degree(m), 2);
        assert_eq!(net.children(r).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(net.parents(m).collect::<Vec<_>>(), vec![a, b]);
        assert_eq!(net.reticulations().collect::<Vec<_>>(), vec![m]);
    }

    #[test]
    fn test_add_edge_to_missing_node_fails() {
        let (mut net, [r, ..]) = diamond();
        match net.add_edge(r, NodeId(42)) {
            Err(LineageError::NodeNotFound(id)) => assert_eq!(id, NodeId(42)),
            other => panic!("Expected NodeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_duplicate_edge_rejected() {
        let (mut net, [r, a, ..]) = diamond();
        assert!(matches!(
            net.add_edge(r, a),
            Err(LineageError::DuplicateEdge { .. })
        ));
        assert!(matches!(
            net.add_edge(a, a),
            Err(LineageError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_remove_edge() {
        let (mut net, [r, a, b, m]) = diamond();
        let removed = net.remove_edge(a, m).unwrap();
        assert_eq!(removed.source(), a);
        assert_eq!(removed.target(), m);

        assert_eq!(net.in_degree(m), 1);
        assert_eq!(net.out_degree(a), 0);
        assert_eq!(net.edge_count(), 3);
        assert_eq!(net.edge_capacity(), 4);
        // node identity survives
        assert_eq!(net.node(a).unwrap().id(), a);
        assert!(net.find_edge(a, m).is_none());
        assert!(net.find_edge(b, m).is_some());
        assert!(net.find_edge(r, a).is_some());

        // the pair can be joined again once removed
        net.add_edge(a, m).unwrap();
        assert_eq!(net.parents(m).collect::<Vec<_>>(), vec![b, a]);
    }

    #[test]
    fn test_remove_missing_edge_fails() {
        let (mut net, [r, _, _, m]) = diamond();
        match net.remove_edge(r, m) {
            Err(LineageError::EdgeNotFound { from, to }) => {
                assert_eq!(from, r);
                assert_eq!(to, m);
            }
            other => panic!("Expected EdgeNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_is_descendant() {
        let (net, [r, a, b, m]) = diamond();
        assert!(net.is_descendant(r, m));
        assert!(net.is_descendant(a, m));
        assert!(!net.is_descendant(a, b));
        assert!(!net.is_descendant(m, r));
        assert!(!net.is_descendant(r, r));
    }

    #[test]
    fn test_petgraph_export_and_validation() {
        let (net, _) = diamond();
        let graph = net.to_petgraph();
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
        assert!(net.validate_acyclic().is_ok());
    }

    #[test]
    fn test_edge_closing_cycle_rejected() {
        let (mut net, [r, a, _, m]) = diamond();
        assert!(matches!(net.add_edge(m, r), Err(LineageError::CyclicNetwork)));
        assert!(matches!(net.add_edge(a, r), Err(LineageError::CyclicNetwork)));
        assert_eq!(net.edge_count(), 4);
        assert!(net.validate_acyclic().is_ok());
    }

    #[test]
    fn test_two_node_cycle_rejected() {
        let mut net = Network::new();
        let r = net.add_node(1.0, NodeKind::Cluster(ClusterId(0)));
        let a = net.add_node(1.0, NodeKind::Cluster(ClusterId(1)));
        net.add_edge(r, a).unwrap();
        assert!(matches!(net.add_edge(a, r), Err(LineageError::CyclicNetwork)));
        assert_eq!(net.parents(r).count(), 0);
    }

    #[test]
    fn test_removed_edge_no_longer_blocks() {
        let (mut net, [r, a, _, m]) = diamond();
        net.remove_edge(r, a).unwrap();
        // a is no longer below r, but m still is
        assert!(net.add_edge(a, r).is_ok());
        assert!(matches!(net.add_edge(m, r), Err(LineageError::CyclicNetwork)));
    }

    #[test]
    fn test_display_dump() {
        let mut net = Network::new();
        let r = net.add_node(1.0, NodeKind::Cluster(ClusterId(0)));
        let c = net.add_node(0.5, NodeKind::Cluster(ClusterId(1)));
        net.add_edge(r, c).unwrap();
        assert_eq!(net.to_string(), "0 (1): \n1 (0.5): \n0 to 1 (1, false)\n");
    }
}
