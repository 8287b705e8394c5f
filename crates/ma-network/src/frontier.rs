//! Greedy frontier shared by both tree builders.
//!
//! Both builders repeatedly pick "the cheapest candidate road", differing
//! only in what cheap means (cumulative distance vs. road length).  The
//! ordering of [`FrontierKey`] is the single definition of the tie-break
//! rule: smaller weight first, then smaller [`RoadId`].

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use ma_core::{CityId, EdgeId, RoadId};

use crate::view::EdgeSet;

/// A candidate road leading from a settled city to a (then) unsettled one.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct FrontierKey {
    /// Selection weight: cumulative distance or plain length.
    pub weight: u64,
    pub road:   RoadId,
    pub edge:   EdgeId,
    /// Settled endpoint the road was discovered from.
    pub from:   CityId,
    /// Far endpoint, unsettled when the key was pushed.
    pub to:     CityId,
}

impl Ord for FrontierKey {
    fn cmp(&self, other: &Self) -> Ordering {
        // Road ids are unique, so the trailing fields never decide between
        // two live keys; they only keep `Ord` consistent with `Eq`.
        (self.weight, self.road, self.edge, self.from, self.to)
            .cmp(&(other.weight, other.road, other.edge, other.from, other.to))
    }
}

impl PartialOrd for FrontierKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-heap of [`FrontierKey`]s.
#[derive(Default)]
pub struct Frontier {
    // Reverse makes BinaryHeap (max) behave as min-heap.
    heap: BinaryHeap<Reverse<FrontierKey>>,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: FrontierKey) {
        self.heap.push(Reverse(key));
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Pop the minimum key whose far endpoint is still unsettled.
    ///
    /// Every popped road is marked in `used`, including stale ones whose far
    /// endpoint was settled after they were pushed (they would close a
    /// cycle).  Returns `None` once the frontier is exhausted.
    pub fn select(
        &mut self,
        used: &mut EdgeSet,
        is_settled: impl Fn(CityId) -> bool,
    ) -> Option<FrontierKey> {
        while let Some(Reverse(key)) = self.heap.pop() {
            used.insert(key.edge);
            if !is_settled(key.to) {
                return Some(key);
            }
        }
        None
    }
}
