//! Enumeration results grouped by cycle length
//!
//! All cycles share one flat node vector; `offsets[k]..offsets[k + 1]` is the
//! span of bucket `k`, and each bucket is a run of `k`-node chunks.
//!
//! Only buckets up to the set's reach are stored. A simple cycle never has
//! more nodes than the graph, so the reach is bounded by the graph size and
//! not by the requested maximum length.

use std::slice::ChunksExact;

use super::cycle::Cycle;
use crate::graph::NodeIndex;

/// Cycles of a single length, in emission order
pub type Bucket<'a> = ChunksExact<'a, NodeIndex>;

/// Every cycle found by one enumeration, bucketed by length
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleSet {
    max_length: usize,
    nodes: Vec<NodeIndex>,
    // Always holds at least two entries: bucket 0 is stored.
    offsets: Vec<usize>,
}

impl CycleSet {
    /// Group cycles by length, keeping their relative order within a length.
    ///
    /// Cycles longer than `max_length` are dropped. The reach is the longest
    /// kept cycle.
    pub fn from_cycles<I>(max_length: usize, cycles: I) -> Self
    where
        I: IntoIterator<Item = Cycle>,
    {
        Self::collect(max_length, 0, cycles)
    }

    /// Like [`CycleSet::from_cycles`], storing at least `reach` buckets.
    ///
    /// # Arguments
    /// * `max_length` - The length bound the cycles were enumerated with
    /// * `reach` - Longest length worth reporting, clamped to `max_length`
    /// * `cycles` - Cycles in emission order
    pub(crate) fn collect<I>(max_length: usize, reach: usize, cycles: I) -> Self
    where
        I: IntoIterator<Item = Cycle>,
    {
        let mut buckets: Vec<Vec<NodeIndex>> = Vec::new();
        buckets.resize_with(reach.min(max_length) + 1, Vec::new);
        for cycle in cycles {
            let length = cycle.len();
            if length > max_length {
                continue;
            }
            if length >= buckets.len() {
                buckets.resize_with(length + 1, Vec::new);
            }
            buckets[length].extend_from_slice(&cycle);
        }

        let mut offsets = Vec::with_capacity(buckets.len() + 1);
        let mut nodes = Vec::with_capacity(buckets.iter().map(Vec::len).sum());
        offsets.push(0);
        for bucket in buckets {
            nodes.extend(bucket);
            offsets.push(nodes.len());
        }

        Self {
            max_length,
            nodes,
            offsets,
        }
    }

    /// The length bound this set was enumerated with
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Number of buckets, `max_length + 1` (saturating)
    #[must_use]
    pub const fn bucket_count(&self) -> usize {
        self.max_length.saturating_add(1)
    }

    /// Longest stored length. Every bucket past it is empty.
    #[must_use]
    pub fn reach(&self) -> usize {
        self.offsets.len() - 2
    }

    fn span(&self, length: usize) -> &[NodeIndex] {
        if length > self.reach() {
            return &[];
        }
        &self.nodes[self.offsets[length]..self.offsets[length + 1]]
    }

    /// Cycles of exactly `length` nodes. Empty for lengths outside `2..=max_length`.
    #[must_use]
    pub fn bucket(&self, length: usize) -> Bucket<'_> {
        self.span(length).chunks_exact(length.max(1))
    }

    /// Number of cycles of exactly `length` nodes
    #[must_use]
    pub fn count(&self, length: usize) -> usize {
        if length == 0 {
            return 0;
        }
        self.span(length).len() / length
    }

    /// Total number of cycles across all lengths
    #[must_use]
    pub fn total(&self) -> usize {
        (0..=self.reach()).map(|k| self.count(k)).sum()
    }

    /// Whether no cycle was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// All `max_length + 1` buckets as `(length, bucket)`, ascending by length.
    ///
    /// Lazy: buckets past [`CycleSet::reach`] are empty and cost nothing to skip.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, Bucket<'_>)> + '_ {
        (0..=self.max_length).map(move |k| (k, self.bucket(k)))
    }

    /// All cycles as owned values, shortest first
    pub fn iter(&self) -> impl Iterator<Item = Cycle> + '_ {
        (0..=self.reach())
            .flat_map(move |k| self.bucket(k).map(|nodes| Cycle::new(nodes.to_vec())))
    }

    /// Per-length counts, indexed by length, up to [`CycleSet::reach`]
    #[must_use]
    pub fn counts(&self) -> Vec<usize> {
        (0..=self.reach()).map(|k| self.count(k)).collect()
    }
}
