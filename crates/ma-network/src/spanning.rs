//! Minimum spanning network (Prim).
//!
//! Growth always starts at `CityId(0)`, the lexicographically smallest city
//! name, regardless of any route's source.  When several spanning trees share
//! the minimum total length, the start city together with the `(length, road
//! id)` tie-break decides which one is produced.

use ma_core::{CityId, EdgeId};

use crate::frontier::{Frontier, FrontierKey};
use crate::network::RoadNetwork;
use crate::view::{EdgeSet, NetworkView};
use crate::{NetworkError, NetworkResult};

/// The roads of a minimum spanning tree over every city of a network.
#[derive(Debug, Clone)]
pub struct SpanningNetwork {
    /// Roads in the order Prim selected them.
    edges:        Vec<EdgeId>,
    /// Same roads as a mask, for [`NetworkView::restricted`].
    set:          EdgeSet,
    total_length: u64,
}

impl SpanningNetwork {
    /// Select `city_count - 1` roads of minimal total length connecting
    /// every city.
    ///
    /// A network with no cities yields an empty spanning network.
    ///
    /// # Errors
    ///
    /// [`NetworkError::DisconnectedGraph`] if some city cannot be reached
    /// from the start city.
    pub fn build(network: &RoadNetwork) -> NetworkResult<Self> {
        let n = network.city_count();
        let m = network.edge_count();

        let mut edges = Vec::with_capacity(n.saturating_sub(1));
        let mut set   = EdgeSet::new(m);
        let mut total_length = 0u64;

        if n == 0 {
            return Ok(Self { edges, set, total_length });
        }

        let mut settled = vec![false; n];
        let mut settled_count = 1;
        let mut used     = EdgeSet::new(m);
        let mut frontier = Frontier::new();

        let start = CityId(0);
        settled[start.index()] = true;
        let mut last = start;

        while settled_count < n {
            for edge in network.incident_edges(last) {
                if used.contains(edge) {
                    continue;
                }
                let far = network.other_end(edge, last);
                if settled[far.index()] {
                    continue;
                }
                frontier.push(FrontierKey {
                    weight: network.edge_length[edge.index()] as u64,
                    road:   network.edge_road_id[edge.index()],
                    edge,
                    from:   last,
                    to:     far,
                });
            }

            let Some(key) = frontier.select(&mut used, |c| settled[c.index()]) else {
                return Err(NetworkError::DisconnectedGraph {
                    start:   network.city_name(start).to_owned(),
                    settled: settled_count,
                    total:   n,
                });
            };

            settled[key.to.index()] = true;
            settled_count += 1;
            edges.push(key.edge);
            set.insert(key.edge);
            total_length += key.weight;
            last = key.to;
        }

        Ok(Self { edges, set, total_length })
    }

    /// Roads in selection order.
    pub fn edges(&self) -> &[EdgeId] {
        &self.edges
    }

    /// Roads ordered by `(length, road id)`, the order reports list them in.
    pub fn edges_by_length(&self, network: &RoadNetwork) -> Vec<EdgeId> {
        let mut sorted = self.edges.clone();
        sorted.sort_unstable_by_key(|e| (network.edge_length[e.index()], network.edge_road_id[e.index()]));
        sorted
    }

    pub fn edge_set(&self) -> &EdgeSet {
        &self.set
    }

    /// `network` restricted to this spanning network's roads.
    pub fn view<'a>(&'a self, network: &'a RoadNetwork) -> NetworkView<'a> {
        NetworkView::restricted(network, &self.set)
    }

    pub fn total_length(&self) -> u64 {
        self.total_length
    }

    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}
