//! Test fixtures and cluster-family generators
//!
//! Random families are seeded so every run sees the same input.

use lineage_core::MutationGroup;
use lineage_network::{BitSet, BitsetCluster};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;

/// `n` mutation groups with distinct sample tags; group 0 is germline
pub fn mutation_groups(n: usize) -> Vec<MutationGroup> {
    let width = usize::BITS as usize - n.leading_zeros() as usize;
    (0..n)
        .map(|i| {
            let tag = format!("{:0width$b}", i, width = width.max(1));
            MutationGroup::new(i, tag).with_snv_count(10 * (i + 1))
        })
        .collect()
}

pub fn cluster(id: u32, indices: &[usize], confidence: f64) -> BitsetCluster {
    BitsetCluster::from_indices(id, indices.iter().copied(), confidence)
}

/// `{0,1,2,3}, {0,1}, {2,3}, {0}, {1}`, supplied out of order
pub fn nested_example_clusters() -> Vec<BitsetCluster> {
    vec![
        cluster(3, &[0], 0.7),
        cluster(1, &[0, 1], 0.9),
        cluster(0, &[0, 1, 2, 3], 1.0),
        cluster(4, &[1], 0.6),
        cluster(2, &[2, 3], 0.8),
    ]
}

/// A random laminar family over `n` groups: the universe, split recursively
/// into disjoint parts
pub fn laminar_clusters(n: usize, seed: u64) -> Vec<BitsetCluster> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut sets: Vec<Vec<usize>> = Vec::new();
    let mut pending = vec![(0..n).collect::<Vec<usize>>()];

    while let Some(set) = pending.pop() {
        if set.len() > 1 {
            let cut = rng.gen_range(1..set.len());
            pending.push(set[..cut].to_vec());
            pending.push(set[cut..].to_vec());
        }
        sets.push(set);
    }

    with_confidences(sets, &mut rng)
}

/// The universe plus `count` distinct random proper subsets over `n` groups;
/// overlapping subsets give rise to multi-parent nodes
pub fn overlapping_clusters(n: usize, count: usize, seed: u64) -> Vec<BitsetCluster> {
    let mut rng = StdRng::seed_from_u64(seed);
    let universe: Vec<usize> = (0..n).collect();
    let mut seen: HashSet<BitSet> = HashSet::new();
    seen.insert(universe.iter().copied().collect());
    let mut sets = vec![universe];

    // bounded so small universes cannot loop forever
    let mut attempts = 0;
    while sets.len() <= count && attempts < count * 20 {
        attempts += 1;
        let set: Vec<usize> = (0..n).filter(|_| rng.gen_bool(0.4)).collect();
        if set.is_empty() || set.len() == n {
            continue;
        }
        if seen.insert(set.iter().copied().collect()) {
            sets.push(set);
        }
    }

    with_confidences(sets, &mut rng)
}

fn with_confidences(sets: Vec<Vec<usize>>, rng: &mut StdRng) -> Vec<BitsetCluster> {
    sets.into_iter()
        .enumerate()
        .map(|(i, set)| {
            let confidence = if i == 0 { 1.0 } else { rng.gen_range(0.1..1.0) };
            BitsetCluster::from_indices(i as u32, set, confidence)
        })
        .collect()
}
