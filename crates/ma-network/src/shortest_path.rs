//! Shortest path tree over a [`NetworkView`].
//!
//! This is Dijkstra expressed over edges: the frontier holds candidate roads
//! keyed by the cumulative distance they would give their far endpoint, and
//! each step settles the far endpoint of the cheapest one.  With positive
//! lengths a settled distance is final, and the `(distance, road id)` key
//! makes the resulting tree independent of input order.

use ma_core::{CityId, EdgeId, Road};

use crate::frontier::{Frontier, FrontierKey};
use crate::network::RoadNetwork;
use crate::view::{EdgeSet, NetworkView};
use crate::{NetworkError, NetworkResult};

/// Distance sentinel for cities not (yet) settled.
const UNSETTLED: u64 = u64::MAX;

// ── Route ─────────────────────────────────────────────────────────────────────

/// A path extracted from a [`ShortestPathTree`]: edges in order from the
/// tree's source, plus their summed length.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub edges:        Vec<EdgeId>,
    pub total_length: u64,
}

impl Route {
    /// `true` if the source and destination are the same city.
    pub fn is_trivial(&self) -> bool {
        self.edges.is_empty()
    }

    /// Resolve the edges to their roads.
    pub fn roads<'a>(&'a self, network: &'a RoadNetwork) -> impl Iterator<Item = &'a Road> + 'a {
        self.edges.iter().map(move |&e| network.road(e))
    }
}

// ── ShortestPathTree ──────────────────────────────────────────────────────────

/// Settled distances and first-reaching roads from one source city.
///
/// Built by [`ShortestPathTree::build`] (every reachable city) or
/// [`ShortestPathTree::build_until`] (stop once a target settles).  Holds no
/// reference to the network it was built from.
#[derive(Debug, Clone)]
pub struct ShortestPathTree {
    source: CityId,
    /// dist[c] = settled distance to c; `UNSETTLED` otherwise.
    dist:   Vec<u64>,
    /// via[c] = road that settled c; `EdgeId::INVALID` for the source and
    /// unsettled cities.
    via:    Vec<EdgeId>,
    /// parent[c] = near endpoint of `via[c]`.
    parent: Vec<CityId>,
    /// Cities in the order they settled, starting with the source.
    order:  Vec<CityId>,
}

impl ShortestPathTree {
    /// Grow the tree from `source` until the frontier is exhausted.
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnknownCity`] if `source` is not in the network.
    pub fn build(view: NetworkView<'_>, source: &str) -> NetworkResult<Self> {
        let source = lookup(view.network(), source)?;
        Ok(Self::grow(view, source, None))
    }

    /// Like [`build`](Self::build) but stops as soon as `target` settles.
    ///
    /// An unknown `target` simply never settles, so the whole reachable tree
    /// is grown and a later [`route_to`](Self::route_to) reports it
    /// unreachable.
    pub fn build_until(view: NetworkView<'_>, source: &str, target: &str) -> NetworkResult<Self> {
        let source = lookup(view.network(), source)?;
        let target = view.network().city_id(target);
        Ok(Self::grow(view, source, target))
    }

    fn grow(view: NetworkView<'_>, source: CityId, stop_at: Option<CityId>) -> Self {
        let network = view.network();
        let n = network.city_count();

        let mut dist   = vec![UNSETTLED; n];
        let mut via    = vec![EdgeId::INVALID; n];
        let mut parent = vec![CityId::INVALID; n];
        let mut order  = Vec::with_capacity(n);

        let mut used     = EdgeSet::new(network.edge_count());
        let mut frontier = Frontier::new();

        dist[source.index()] = 0;
        order.push(source);
        let mut last = source;

        loop {
            if stop_at == Some(last) {
                break;
            }

            // Expand with roads out of the most recently settled city.
            let base = dist[last.index()];
            for edge in view.incident_edges(last) {
                if used.contains(edge) {
                    continue;
                }
                let far = network.other_end(edge, last);
                if dist[far.index()] != UNSETTLED {
                    continue;
                }
                frontier.push(FrontierKey {
                    weight: base + network.edge_length[edge.index()] as u64,
                    road:   network.edge_road_id[edge.index()],
                    edge,
                    from:   last,
                    to:     far,
                });
            }

            let Some(key) = frontier.select(&mut used, |c| dist[c.index()] != UNSETTLED) else {
                break;
            };

            dist[key.to.index()]   = key.weight;
            via[key.to.index()]    = key.edge;
            parent[key.to.index()] = key.from;
            order.push(key.to);
            last = key.to;
        }

        Self { source, dist, via, parent, order }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn source(&self) -> CityId {
        self.source
    }

    #[inline]
    pub fn is_settled(&self, city: CityId) -> bool {
        self.dist[city.index()] != UNSETTLED
    }

    /// Settled distance from the source, or `None` if `city` never settled.
    pub fn distance(&self, city: CityId) -> Option<u64> {
        Some(self.dist[city.index()]).filter(|&d| d != UNSETTLED)
    }

    /// Road that first reached `city`.  `None` for the source itself.
    pub fn via(&self, city: CityId) -> Option<EdgeId> {
        Some(self.via[city.index()]).filter(|&e| e != EdgeId::INVALID)
    }

    pub fn settled_count(&self) -> usize {
        self.order.len()
    }

    /// Settled cities in discovery order; the source comes first.
    pub fn discovery_order(&self) -> &[CityId] {
        &self.order
    }

    /// Route from the source to `target` by city id.
    ///
    /// Returns `None` if `target` is unsettled in this tree.
    pub fn route_to_city(&self, target: CityId) -> Option<Route> {
        let total_length = self.distance(target)?;
        let mut edges = Vec::new();
        let mut cur = target;
        while let Some(edge) = self.via(cur) {
            edges.push(edge);
            cur = self.parent[cur.index()];
        }
        edges.reverse();
        Some(Route { edges, total_length })
    }

    /// Route from the source to the city named `target`.
    ///
    /// `network` must be the one the tree was built over.
    ///
    /// # Errors
    ///
    /// [`NetworkError::UnreachableCity`] if `target` is unknown or was not
    /// settled by this run.
    pub fn route_to(&self, network: &RoadNetwork, target: &str) -> NetworkResult<Route> {
        network
            .city_id(target)
            .and_then(|t| self.route_to_city(t))
            .ok_or_else(|| NetworkError::UnreachableCity {
                from: network.city_name(self.source).to_owned(),
                to:   target.to_owned(),
            })
    }
}

fn lookup(network: &RoadNetwork, name: &str) -> NetworkResult<CityId> {
    network
        .city_id(name)
        .ok_or_else(|| NetworkError::UnknownCity(name.to_owned()))
}
