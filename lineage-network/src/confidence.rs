//! Confidence of reticulate edges
//!
//! Each reticulate in-edge of a reticulation gets a share of the average
//! non-reticulate confidence below the reticulation, proportional to the
//! average confidence of the edges between that in-edge and the reticulation's
//! lowest stable ancestor.

use crate::lsa::LsaMap;
use crate::network::Network;
use lineage_core::{EdgeId, NodeId};
use serde::Serialize;
use tracing::{debug, info};

/// Confidence assigned to one reticulate edge
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReticulateShare {
    pub reticulation: NodeId,
    pub lsa: NodeId,
    pub edge: EdgeId,
    pub parent: NodeId,
    /// Average confidence on the paths from the edge up to the LSA
    pub raw_share: f64,
    pub confidence: f64,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct ConfidenceReport {
    /// Average non-reticulate edge confidence below each node (0 if none)
    pub average_below: Vec<f64>,
    /// Number of non-reticulate edges counted below each node
    pub count_below: Vec<usize>,
    pub shares: Vec<ReticulateShare>,
}

impl ConfidenceReport {
    pub fn average_below(&self, v: NodeId) -> f64 {
        self.average_below.get(v.index()).copied().unwrap_or(0.0)
    }

    /// Shares assigned to the in-edges of one reticulation
    pub fn shares_of(&self, reticulation: NodeId) -> impl Iterator<Item = &ReticulateShare> {
        self.shares
            .iter()
            .filter(move |s| s.reticulation == reticulation)
    }
}

#[derive(Debug, Default)]
pub struct ConfidencePropagator;

impl ConfidencePropagator {
    pub fn new() -> Self {
        Self
    }

    /// Assign confidences to the in-edges of every reticulation in `lsa`
    pub fn propagate(&self, network: &mut Network, lsa: &LsaMap) -> ConfidenceReport {
        let n = network.node_count();
        let mut sums = vec![0.0; n];
        let mut counts: Vec<Option<usize>> = vec![None; n];
        if n > 0 {
            confidence_below(network, network.root(), &mut sums, &mut counts);
        }

        let count_below: Vec<usize> = counts.iter().map(|c| c.unwrap_or(0)).collect();
        let average_below: Vec<f64> = sums
            .iter()
            .zip(&count_below)
            .map(|(sum, count)| if *count > 0 { sum / *count as f64 } else { 0.0 })
            .collect();

        let mut shares = Vec::new();
        for (r, l) in lsa.iter() {
            let raw: Vec<(EdgeId, f64)> = network
                .in_edges(r)
                .iter()
                .map(|e| (*e, average_to_lsa(network, *e, l)))
                .collect();

            let total: f64 = raw.iter().map(|(_, x)| x).sum();
            for (e, raw_share) in raw {
                let share = if total == 0.0 { 0.0 } else { raw_share / total };
                let confidence = share * average_below[r.index()];
                network.set_edge_confidence(e, confidence);
                shares.push(ReticulateShare {
                    reticulation: r,
                    lsa: l,
                    edge: e,
                    parent: network.edge(e).source(),
                    raw_share,
                    confidence,
                });
            }
            debug!(
                "Reticulation {} (LSA {}): distributed {:.4} over {} parents",
                r,
                l,
                average_below[r.index()],
                network.in_degree(r)
            );
        }

        info!("Assigned confidence to {} reticulate edges", shares.len());
        ConfidenceReport {
            average_below,
            count_below,
            shares,
        }
    }
}

/// Sum and count of non-reticulate edge confidences below `v`, accumulated
/// over every child
fn confidence_below(
    network: &Network,
    v: NodeId,
    sums: &mut [f64],
    counts: &mut [Option<usize>],
) {
    let mut sum = 0.0;
    let mut count = 0;
    for e in network.out_edges(v) {
        let edge = network.edge(*e);
        if !edge.is_reticulate() {
            sum += edge.confidence();
            count += 1;
        }
        let w = edge.target();
        if counts[w.index()].is_none() {
            confidence_below(network, w, sums, counts);
        }
        sum += sums[w.index()];
        count += counts[w.index()].unwrap_or(0);
    }
    sums[v.index()] = sum;
    counts[v.index()] = Some(count);
}

/// Average non-reticulate confidence over `start` and every edge above it,
/// walking in-edges until the LSA is reached
fn average_to_lsa(network: &Network, start: EdgeId, lsa: NodeId) -> f64 {
    let mut seen = vec![false; network.edge_capacity()];
    let mut stack = vec![start];
    seen[start.index()] = true;
    while let Some(f) = stack.pop() {
        let w = network.edge(f).source();
        if w == lsa {
            continue;
        }
        for g in network.in_edges(w) {
            if !seen[g.index()] {
                seen[g.index()] = true;
                stack.push(*g);
            }
        }
    }

    let (sum, count) = seen
        .iter()
        .enumerate()
        .filter(|(_, s)| **s)
        .map(|(i, _)| network.edge(EdgeId(i)))
        .filter(|edge| !edge.is_reticulate())
        .fold((0.0, 0usize), |(sum, count), edge| {
            (sum + edge.confidence(), count + 1)
        });

    if count == 0 {
        0.0
    } else {
        sum / count as f64
    }
}
