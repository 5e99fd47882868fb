//! Lowest stable ancestors of reticulation nodes
//!
//! Every in-edge of a reticulation `r` starts its own path id. A postorder walk
//! from the root carries, for each edge, the set of `r`'s path ids that reach
//! `r` through that edge. The first node whose out-edges together carry every
//! live path id of `r` is `r`'s lowest stable ancestor (LSA): all lineages
//! entering `r` have reconverged there.
//!
//! Path ids travel up a node's first in-edge. A node with several in-edges
//! is itself a merge point, so each additional in-edge opens a fresh path id
//! for every reticulation still pending below it; those branches must also be
//! reached before an LSA is declared.

use crate::bitset::BitSet;
use crate::network::Network;
use lineage_core::{EdgeId, NodeId};
use serde::Serialize;
use tracing::{debug, warn};

/// Reticulation node to LSA node, ordered by reticulation id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LsaMap {
    entries: Vec<(NodeId, NodeId)>,
}

impl LsaMap {
    pub fn get(&self, reticulation: NodeId) -> Option<NodeId> {
        self.entries
            .binary_search_by_key(&reticulation, |(r, _)| *r)
            .ok()
            .map(|i| self.entries[i].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.entries.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[derive(Debug, Default)]
pub struct LsaAnalyzer;

impl LsaAnalyzer {
    pub fn new() -> Self {
        Self
    }

    /// Compute the LSA of every node with in-degree > 1
    pub fn analyze(&self, network: &Network) -> LsaMap {
        if network.node_count() == 0 {
            return LsaMap::default();
        }

        let mut state = LsaState::new(network);
        state.visit(network.root());

        let entries = state
            .reticulations
            .iter()
            .zip(state.lsa.iter())
            .map(|(r, lsa)| {
                let lsa = lsa.unwrap_or_else(|| {
                    warn!("No stable ancestor found for reticulation {}; using root", r);
                    network.root()
                });
                (*r, lsa)
            })
            .collect();

        LsaMap { entries }
    }
}

/// Per-run bookkeeping, indexed by node id, reticulation index and edge id
struct LsaState<'a> {
    network: &'a Network,
    /// Node id to reticulation index
    ret_index: Vec<Option<usize>>,
    reticulations: Vec<NodeId>,
    /// Live path ids per reticulation
    alive: Vec<BitSet>,
    /// Path ids of reticulation `r` carried by edge `e`: `edge_paths[r][e]`
    edge_paths: Vec<Vec<Option<BitSet>>>,
    /// Unresolved reticulations below each visited node; `None` until visited
    below: Vec<Option<BitSet>>,
    lsa: Vec<Option<NodeId>>,
}

impl<'a> LsaState<'a> {
    fn new(network: &'a Network) -> Self {
        let reticulations: Vec<NodeId> = network.reticulations().collect();
        let mut ret_index = vec![None; network.node_count()];
        for (i, r) in reticulations.iter().enumerate() {
            ret_index[r.index()] = Some(i);
        }
        let edges = network.edge_capacity();

        Self {
            network,
            ret_index,
            alive: vec![BitSet::new(); reticulations.len()],
            edge_paths: vec![vec![None; edges]; reticulations.len()],
            below: vec![None; network.node_count()],
            lsa: vec![None; reticulations.len()],
            reticulations,
        }
    }

    fn visit(&mut self, v: NodeId) {
        let net = self.network;

        if let Some(r) = self.ret_index[v.index()] {
            // one path per in-edge, numbered from 1
            let mut alive = BitSet::new();
            for (k, e) in net.in_edges(v).iter().enumerate() {
                alive.insert(k + 1);
                self.edge_paths[r][e.index()] = Some(std::iter::once(k + 1).collect());
            }
            self.alive[r] = alive;
        }

        self.below[v.index()] = Some(BitSet::new());
        let mut below = BitSet::new();
        for w in net.children(v) {
            if self.below[w.index()].is_none() {
                self.visit(w);
            }
            if let Some(child_below) = &self.below[w.index()] {
                below = below.union(child_below);
            }
            if let Some(r) = self.ret_index[w.index()] {
                below.insert(r);
            }
        }

        let mut pending = BitSet::new();
        for r in below.iter() {
            if self.lsa[r].is_some() {
                continue;
            }
            if self.paths_through(r, net.out_edges(v)) == self.alive[r] {
                debug!("LSA of reticulation {} is {}", self.reticulations[r], v);
                self.lsa[r] = Some(v);
            } else {
                pending.insert(r);
            }
        }

        let in_edges = net.in_edges(v);
        if let Some(first) = in_edges.first() {
            for r in pending.iter() {
                let paths = self.paths_through(r, net.out_edges(v));
                self.edge_paths[r][first.index()] = Some(paths);
            }
        }
        for e in in_edges.iter().skip(1) {
            for r in pending.iter() {
                let id = self.alive[r].next_clear_from(1);
                self.alive[r].insert(id);
                self.edge_paths[r][e.index()] = Some(std::iter::once(id).collect());
            }
        }

        self.below[v.index()] = Some(pending);
    }

    /// Path ids of `r` carried by any of `edges`
    fn paths_through(&self, r: usize, edges: &[EdgeId]) -> BitSet {
        edges
            .iter()
            .filter_map(|e| self.edge_paths[r][e.index()].as_ref())
            .fold(BitSet::new(), |acc, paths| acc.union(paths))
    }
}
