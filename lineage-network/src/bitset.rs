//! Growable index set over `bit_vec::BitVec`
//!
//! Set algebra on `BitSet` never mutates its operands: `union`, `intersection`
//! and `difference` return fresh values, padding the shorter operand so sets of
//! different backing lengths combine cleanly. Equality and hashing look only at
//! the set members, never at the backing length.

use bit_vec::BitVec;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(from = "Vec<usize>", into = "Vec<usize>")]
pub struct BitSet {
    bits: BitVec,
}

impl BitSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty set able to hold indices below `capacity` without growing
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            bits: BitVec::from_elem(capacity, false),
        }
    }

    /// Set containing every index in `0..len`
    pub fn full(len: usize) -> Self {
        Self {
            bits: BitVec::from_elem(len, true),
        }
    }

    pub fn insert(&mut self, index: usize) {
        if index >= self.bits.len() {
            let missing = index + 1 - self.bits.len();
            self.bits.grow(missing, false);
        }
        self.bits.set(index, true);
    }

    pub fn contains_index(&self, index: usize) -> bool {
        self.bits.get(index).unwrap_or(false)
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.bits.iter().filter(|b| *b).count()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.none()
    }

    /// Members in increasing order
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter_map(|(i, set)| if set { Some(i) } else { None })
    }

    /// Largest member, if any
    pub fn max(&self) -> Option<usize> {
        self.iter().last()
    }

    /// Lowest index `>= start` that is not a member
    pub fn next_clear_from(&self, start: usize) -> usize {
        (start..)
            .find(|&i| !self.contains_index(i))
            .unwrap_or(start)
    }

    pub fn union(&self, other: &BitSet) -> BitSet {
        let (mut a, b) = self.aligned(other);
        a.or(&b);
        BitSet { bits: a }
    }

    pub fn intersection(&self, other: &BitSet) -> BitSet {
        let (mut a, b) = self.aligned(other);
        a.and(&b);
        BitSet { bits: a }
    }

    /// Members of `self` that are not in `other`
    pub fn difference(&self, other: &BitSet) -> BitSet {
        let (mut a, b) = self.aligned(other);
        a.difference(&b);
        BitSet { bits: a }
    }

    /// True iff every member of `other` is a member of `self`
    pub fn contains(&self, other: &BitSet) -> bool {
        other.iter().all(|i| self.contains_index(i))
    }

    /// Split incompatibility: both differences and the intersection are non-empty
    pub fn incompatible(&self, other: &BitSet) -> bool {
        !self.difference(other).is_empty()
            && !other.difference(self).is_empty()
            && !self.intersection(other).is_empty()
    }

    /// Compare members in increasing order; at the first position where the
    /// sequences differ the smaller index sorts first, and a sequence that runs
    /// out first sorts last.
    pub fn lexicographic_cmp(&self, other: &BitSet) -> Ordering {
        let mut a = self.iter();
        let mut b = other.iter();
        loop {
            match (a.next(), b.next()) {
                (Some(x), Some(y)) if x == y => continue,
                (Some(x), Some(y)) => return x.cmp(&y),
                (Some(_), None) => return Ordering::Less,
                (None, Some(_)) => return Ordering::Greater,
                (None, None) => return Ordering::Equal,
            }
        }
    }

    /// Descending cardinality, then `lexicographic_cmp`
    pub fn canonical_cmp(&self, other: &BitSet) -> Ordering {
        other
            .len()
            .cmp(&self.len())
            .then_with(|| self.lexicographic_cmp(other))
    }

    fn aligned(&self, other: &BitSet) -> (BitVec, BitVec) {
        let len = self.bits.len().max(other.bits.len());
        let mut a = self.bits.clone();
        let mut b = other.bits.clone();
        a.grow(len - a.len(), false);
        b.grow(len - b.len(), false);
        (a, b)
    }
}

impl PartialEq for BitSet {
    fn eq(&self, other: &Self) -> bool {
        self.iter().eq(other.iter())
    }
}

impl Eq for BitSet {}

impl Hash for BitSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for i in self.iter() {
            i.hash(state);
        }
    }
}

impl FromIterator<usize> for BitSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = BitSet::new();
        for i in iter {
            set.insert(i);
        }
        set
    }
}

impl From<Vec<usize>> for BitSet {
    fn from(indices: Vec<usize>) -> Self {
        indices.into_iter().collect()
    }
}

impl From<BitSet> for Vec<usize> {
    fn from(set: BitSet) -> Self {
        set.iter().collect()
    }
}

impl fmt::Debug for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

/// Run-length rendering: `{1,2,3,7}` prints as `1-3,7`
impl fmt::Display for BitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut runs: Vec<(usize, usize)> = Vec::new();
        for i in self.iter() {
            match runs.last_mut() {
                Some((_, end)) if *end + 1 == i => *end = i,
                _ => runs.push((i, i)),
            }
        }

        for (n, (start, end)) in runs.iter().enumerate() {
            if n > 0 {
                write!(f, ",")?;
            }
            if start == end {
                write!(f, "{}", start)?;
            } else {
                write!(f, "{}-{}", start, end)?;
            }
        }
        Ok(())
    }
}
