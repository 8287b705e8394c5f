//! Per-run edge bookkeeping and restricted views of a network.
//!
//! Builders never write to the [`RoadNetwork`]; "used" markers live in an
//! [`EdgeSet`] owned by the call.  The same type doubles as the restriction
//! mask of a [`NetworkView`], so a spanning network's edges can be fed back
//! into the shortest-path builder without copying the graph.

use ma_core::{CityId, EdgeId};

use crate::network::RoadNetwork;

// ── EdgeSet ───────────────────────────────────────────────────────────────────

/// Bitmap over `EdgeId`s, sized for one network.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EdgeSet {
    bits: Vec<bool>,
    len:  usize,
}

impl EdgeSet {
    /// An empty set able to hold every edge of a network with `edge_count` roads.
    pub fn new(edge_count: usize) -> Self {
        Self { bits: vec![false; edge_count], len: 0 }
    }

    /// Add `edge`.  Returns `false` if it was already present.
    #[inline]
    pub fn insert(&mut self, edge: EdgeId) -> bool {
        let slot = &mut self.bits[edge.index()];
        if *slot {
            return false;
        }
        *slot = true;
        self.len += 1;
        true
    }

    #[inline]
    pub fn contains(&self, edge: EdgeId) -> bool {
        self.bits.get(edge.index()).copied().unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Members in ascending `EdgeId` order.
    pub fn iter(&self) -> impl Iterator<Item = EdgeId> + '_ {
        self.bits
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b)
            .map(|(i, _)| EdgeId(i as u32))
    }
}

// ── NetworkView ───────────────────────────────────────────────────────────────

/// A network seen through an optional edge mask.
///
/// `full` exposes every road; `restricted` exposes only roads in the mask.
/// Cities are always those of the underlying network.
#[derive(Clone, Copy)]
pub struct NetworkView<'a> {
    network: &'a RoadNetwork,
    allowed: Option<&'a EdgeSet>,
}

impl<'a> NetworkView<'a> {
    pub fn full(network: &'a RoadNetwork) -> Self {
        Self { network, allowed: None }
    }

    pub fn restricted(network: &'a RoadNetwork, allowed: &'a EdgeSet) -> Self {
        Self { network, allowed: Some(allowed) }
    }

    pub fn network(&self) -> &'a RoadNetwork {
        self.network
    }

    #[inline]
    pub fn allows(&self, edge: EdgeId) -> bool {
        self.allowed.is_none_or(|set| set.contains(edge))
    }

    /// Incident edges of `city` that pass the mask.
    #[inline]
    pub fn incident_edges(&self, city: CityId) -> impl Iterator<Item = EdgeId> + 'a {
        let view = *self;
        self.network
            .incident_edges(city)
            .filter(move |&e| view.allows(e))
    }
}
