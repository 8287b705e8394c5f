//! Road network representation and builder.
//!
//! # Data layout
//!
//! Cities are interned into a **sorted** name table, so a `CityId` is the
//! city's rank in byte order and `CityId(0)` is the lexicographically
//! smallest name.
//!
//! Road incidence uses **Compressed Sparse Row (CSR)** format.  Given a
//! `CityId c`, the `EdgeId`s of every road touching it occupy the slice:
//!
//! ```text
//! incident[ city_edge_start[c] .. city_edge_start[c+1] ]
//! ```
//!
//! Roads are undirected, so each road appears in the slices of both of its
//! endpoints (a self-loop appears once).  Edge arrays (`edge_a`, `edge_b`,
//! `edge_length`, `edge_road_id`) are indexed by `EdgeId`, which is the
//! road's position in input order.

use std::collections::HashSet;
use std::ops::Range;

use ma_core::{CityId, EdgeId, Road, RoadId, RoadRecord, ValidationError, ValidationResult};

// ── RoadNetwork ───────────────────────────────────────────────────────────────

/// Undirected road graph with CSR incidence lists.
///
/// The SoA edge arrays are `pub` for direct indexed access on hot paths.  Do
/// not construct directly; use [`RoadNetworkBuilder`] or [`RoadNetwork::load`].
pub struct RoadNetwork {
    // ── City data ─────────────────────────────────────────────────────────
    /// Sorted, de-duplicated city names.  Indexed by `CityId`.
    city_names: Vec<String>,

    // ── CSR incidence ─────────────────────────────────────────────────────
    /// CSR row pointer.  Length = `city_count + 1`.
    city_edge_start: Vec<u32>,
    /// Concatenated incidence lists.
    incident: Vec<EdgeId>,

    // ── Edge data (indexed by EdgeId) ─────────────────────────────────────
    /// First endpoint of each road, as given in input.
    pub edge_a: Vec<CityId>,

    /// Second endpoint of each road.
    pub edge_b: Vec<CityId>,

    /// Road length.  Always positive.
    pub edge_length: Vec<u32>,

    /// Caller-supplied road id.  Unique across the network.
    pub edge_road_id: Vec<RoadId>,

    /// The validated roads themselves, for reporting.
    roads: Vec<Road>,
}

impl RoadNetwork {
    /// Construct an empty network with no cities or roads.
    pub fn empty() -> Self {
        Self {
            city_names:      Vec::new(),
            city_edge_start: vec![0],
            incident:        Vec::new(),
            edge_a:          Vec::new(),
            edge_b:          Vec::new(),
            edge_length:     Vec::new(),
            edge_road_id:    Vec::new(),
            roads:           Vec::new(),
        }
    }

    /// Validate `records` and build a network from them.
    ///
    /// # Errors
    ///
    /// [`ValidationError::InvalidLength`] for a non-positive (or oversized)
    /// length, [`ValidationError::DuplicateRoadId`] if two records share an id.
    pub fn load<I>(records: I) -> ValidationResult<Self>
    where
        I: IntoIterator<Item = RoadRecord>,
    {
        let records = records.into_iter();
        let mut b = RoadNetworkBuilder::with_capacity(records.size_hint().0);
        for record in records {
            b.add_road(record);
        }
        b.build()
    }

    // ── Graph dimensions ──────────────────────────────────────────────────

    pub fn city_count(&self) -> usize {
        self.city_names.len()
    }

    pub fn edge_count(&self) -> usize {
        self.roads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.city_names.is_empty()
    }

    /// Sum of every road's length.
    pub fn total_length(&self) -> u64 {
        self.edge_length.iter().map(|&l| l as u64).sum()
    }

    // ── Cities ────────────────────────────────────────────────────────────

    /// Look up a city by name.  `O(log N)` over the sorted name table.
    pub fn city_id(&self, name: &str) -> Option<CityId> {
        self.city_names
            .binary_search_by(|c| c.as_str().cmp(name))
            .ok()
            .map(|i| CityId(i as u32))
    }

    pub fn city_name(&self, city: CityId) -> &str {
        &self.city_names[city.index()]
    }

    /// All city names in `CityId` (lexicographic) order.
    pub fn city_names(&self) -> &[String] {
        &self.city_names
    }

    // ── Roads ─────────────────────────────────────────────────────────────

    pub fn road(&self, edge: EdgeId) -> &Road {
        &self.roads[edge.index()]
    }

    pub fn roads(&self) -> &[Road] {
        &self.roads
    }

    /// Both endpoints of `edge`, in input order.
    #[inline]
    pub fn endpoints(&self, edge: EdgeId) -> (CityId, CityId) {
        (self.edge_a[edge.index()], self.edge_b[edge.index()])
    }

    /// The endpoint of `edge` opposite `city`.
    ///
    /// `city` must be one of the two endpoints; for a self-loop the result
    /// is `city` itself.
    #[inline]
    pub fn other_end(&self, edge: EdgeId, city: CityId) -> CityId {
        let (a, b) = self.endpoints(edge);
        debug_assert!(a == city || b == city, "{edge} does not touch {city}");
        if a == city { b } else { a }
    }

    // ── Graph traversal ───────────────────────────────────────────────────

    /// Iterator over the `EdgeId`s of every road touching `city`.
    ///
    /// Contiguous slice scan, no allocation.
    #[inline]
    pub fn incident_edges(&self, city: CityId) -> impl Iterator<Item = EdgeId> + '_ {
        self.incident[self.incident_range(city)].iter().copied()
    }

    /// Number of roads touching `city` (a self-loop counts once).
    #[inline]
    pub fn degree(&self, city: CityId) -> usize {
        self.incident_range(city).len()
    }

    /// Every road with one endpoint equal to `city`.
    ///
    /// Empty for an isolated city and for a name the network has never seen.
    pub fn incident_roads<'a>(&'a self, city: &str) -> impl Iterator<Item = &'a Road> + use<'a> {
        let range = self.city_id(city).map_or(0..0, |c| self.incident_range(c));
        self.incident[range].iter().map(move |e| &self.roads[e.index()])
    }

    #[inline]
    fn incident_range(&self, city: CityId) -> Range<usize> {
        let start = self.city_edge_start[city.index()] as usize;
        let end   = self.city_edge_start[city.index() + 1] as usize;
        start..end
    }
}

// ── RoadNetworkBuilder ────────────────────────────────────────────────────────

/// Construct a [`RoadNetwork`] incrementally, then call [`build`](Self::build).
///
/// The builder accepts roads and extra cities in any order.  `build()`
/// validates every record, interns and sorts the city names, and constructs
/// the CSR arrays.
///
/// # Example
///
/// ```
/// use ma_core::RoadRecord;
/// use ma_network::RoadNetworkBuilder;
///
/// let mut b = RoadNetworkBuilder::new();
/// b.add_road(RoadRecord::new("Ankara", "Bolu", 190, 1));
/// b.add_road(RoadRecord::new("Bolu", "Istanbul", 260, 2));
/// let net = b.build().unwrap();
/// assert_eq!(net.city_count(), 3);
/// assert_eq!(net.edge_count(), 2);
/// ```
pub struct RoadNetworkBuilder {
    records:      Vec<RoadRecord>,
    extra_cities: Vec<String>,
}

impl RoadNetworkBuilder {
    pub fn new() -> Self {
        Self { records: Vec::new(), extra_cities: Vec::new() }
    }

    /// Pre-allocate for the expected number of roads.
    pub fn with_capacity(roads: usize) -> Self {
        Self {
            records:      Vec::with_capacity(roads),
            extra_cities: Vec::new(),
        }
    }

    /// Add an undirected road.  Validation is deferred to [`build`](Self::build).
    pub fn add_road(&mut self, record: RoadRecord) {
        self.records.push(record);
    }

    /// Declare a city that may have no roads at all.
    ///
    /// Cities named by roads are added implicitly; declaring one twice is
    /// harmless.
    pub fn add_city(&mut self, name: impl Into<String>) {
        self.extra_cities.push(name.into());
    }

    /// Consume the builder and produce a [`RoadNetwork`].
    ///
    /// Time complexity: O(E log N) for city interning, where N = cities,
    /// E = roads.
    pub fn build(self) -> ValidationResult<RoadNetwork> {
        // ── Validate ──────────────────────────────────────────────────────
        let mut seen: HashSet<RoadId> = HashSet::with_capacity(self.records.len());
        let mut roads: Vec<Road> = Vec::with_capacity(self.records.len());
        for record in self.records {
            let road = record.validate()?;
            if !seen.insert(road.id) {
                return Err(ValidationError::DuplicateRoadId(road.id));
            }
            roads.push(road);
        }

        // ── Intern cities (sorted → CityId order is lexicographic) ────────
        let mut city_names: Vec<String> = roads
            .iter()
            .flat_map(|r| [r.a.clone(), r.b.clone()])
            .chain(self.extra_cities)
            .collect();
        city_names.sort_unstable();
        city_names.dedup();

        // Every name was inserted above, so the search cannot miss.
        let lookup = |name: &str| -> CityId {
            let i = city_names
                .binary_search_by(|c| c.as_str().cmp(name))
                .unwrap_or_else(|i| i);
            CityId(i as u32)
        };

        let edge_a:       Vec<CityId> = roads.iter().map(|r| lookup(&r.a)).collect();
        let edge_b:       Vec<CityId> = roads.iter().map(|r| lookup(&r.b)).collect();
        let edge_length:  Vec<u32>    = roads.iter().map(|r| r.length).collect();
        let edge_road_id: Vec<RoadId> = roads.iter().map(|r| r.id).collect();

        // ── CSR row pointer ───────────────────────────────────────────────
        let city_count = city_names.len();
        let mut city_edge_start = vec![0u32; city_count + 1];
        for (&a, &b) in edge_a.iter().zip(&edge_b) {
            city_edge_start[a.index() + 1] += 1;
            if b != a {
                city_edge_start[b.index() + 1] += 1;
            }
        }
        for i in 1..=city_count {
            city_edge_start[i] += city_edge_start[i - 1];
        }

        // ── Fill incidence lists (ascending EdgeId within each city) ──────
        let mut cursor: Vec<u32> = city_edge_start[..city_count].to_vec();
        let mut incident = vec![EdgeId::INVALID; city_edge_start[city_count] as usize];
        for (i, (&a, &b)) in edge_a.iter().zip(&edge_b).enumerate() {
            let edge = EdgeId(i as u32);
            incident[cursor[a.index()] as usize] = edge;
            cursor[a.index()] += 1;
            if b != a {
                incident[cursor[b.index()] as usize] = edge;
                cursor[b.index()] += 1;
            }
        }
        debug_assert!(incident.iter().all(|&e| e != EdgeId::INVALID));

        Ok(RoadNetwork {
            city_names,
            city_edge_start,
            incident,
            edge_a,
            edge_b,
            edge_length,
            edge_road_id,
            roads,
        })
    }
}

impl Default for RoadNetworkBuilder {
    fn default() -> Self {
        Self::new()
    }
}
