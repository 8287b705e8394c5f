//! The route analyzer and its result types.

use std::time::Instant;

use ma_core::{AnalysisConfig, Road, RoadRecord};
use ma_network::{
    NetworkResult, NetworkView, RoadNetwork, Route, ShortestPathTree, SpanningNetwork,
};

use crate::{AnalysisObserver, AnalysisResult, Stage};

// ── Results ───────────────────────────────────────────────────────────────────

/// A route resolved to owned roads, detached from the network it came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteSummary {
    /// Roads in path order from the source.
    pub roads:        Vec<Road>,
    pub total_length: u64,
}

impl RouteSummary {
    pub fn resolve(route: &Route, network: &RoadNetwork) -> Self {
        Self {
            roads:        route.roads(network).cloned().collect(),
            total_length: route.total_length,
        }
    }
}

/// Everything a report needs from one run.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub source: String,
    pub target: String,

    /// Shortest route over the full network.
    pub full_route: RouteSummary,

    /// Spanning network roads ordered by `(length, road id)`.
    pub spanning_network: Vec<Road>,
    pub spanning_length:  u64,

    /// Summed length of every input road.
    pub original_length: u64,

    /// Shortest route using spanning network roads only.
    pub reduced_route: RouteSummary,

    /// `spanning_length / original_length`; at most 1.
    pub material_ratio: f64,

    /// `reduced_route.total_length / full_route.total_length`; at least 1.
    /// Defined as 1 when source and target coincide.
    pub route_ratio: f64,
}

// ── RouteAnalyzer ─────────────────────────────────────────────────────────────

/// Composes the shortest path and spanning network builders into one
/// [`Analysis`].
///
/// Stateless apart from its configuration: the same analyzer (and the same
/// network) can be reused for any number of runs.
#[derive(Clone, Debug, Default)]
pub struct RouteAnalyzer {
    config: AnalysisConfig,
}

impl RouteAnalyzer {
    pub fn new(config: AnalysisConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AnalysisConfig {
        &self.config
    }

    /// Validate `records` into a network and analyze it.
    ///
    /// # Errors
    ///
    /// [`AnalysisError::Validation`](crate::AnalysisError::Validation) for a
    /// bad edge list; otherwise as [`analyze_network`](Self::analyze_network).
    pub fn analyze<I, O>(
        &self,
        records:  I,
        source:   &str,
        target:   &str,
        observer: &mut O,
    ) -> AnalysisResult<Analysis>
    where
        I: IntoIterator<Item = RoadRecord>,
        O: AnalysisObserver + ?Sized,
    {
        let network = RoadNetwork::load(records)?;
        self.analyze_network(&network, source, target, observer)
    }

    /// Analyze an already-built network.
    ///
    /// # Errors
    ///
    /// - `UnknownCity` if `source` is not in the network.
    /// - `UnreachableCity` if `target` cannot be reached from `source`.
    /// - `DisconnectedGraph` if the network has more than one component.
    pub fn analyze_network<O>(
        &self,
        network:  &RoadNetwork,
        source:   &str,
        target:   &str,
        observer: &mut O,
    ) -> AnalysisResult<Analysis>
    where
        O: AnalysisObserver + ?Sized,
    {
        observer.on_network_loaded(network.city_count(), network.edge_count());

        let (full, spanning) = self.full_and_spanning(network, source, target, observer)?;

        observer.on_stage_start(Stage::ReducedRoute);
        let t = Instant::now();
        let reduced = self.route(spanning.view(network), source, target)?;
        observer.on_stage_end(Stage::ReducedRoute, t.elapsed());

        let original_length = network.total_length();
        let spanning_network: Vec<Road> = spanning
            .edges_by_length(network)
            .into_iter()
            .map(|e| network.road(e).clone())
            .collect();

        let analysis = Analysis {
            source:           source.to_owned(),
            target:           target.to_owned(),
            material_ratio:   ratio(spanning.total_length(), original_length),
            route_ratio:      ratio(reduced.total_length, full.total_length),
            full_route:       RouteSummary::resolve(&full, network),
            spanning_network,
            spanning_length:  spanning.total_length(),
            original_length,
            reduced_route:    RouteSummary::resolve(&reduced, network),
        };

        observer.on_analysis_end(&analysis);
        Ok(analysis)
    }

    /// Stages ② and ③.  A full-route error takes precedence over a spanning
    /// error in both modes.
    fn full_and_spanning<O>(
        &self,
        network:  &RoadNetwork,
        source:   &str,
        target:   &str,
        observer: &mut O,
    ) -> AnalysisResult<(Route, SpanningNetwork)>
    where
        O: AnalysisObserver + ?Sized,
    {
        #[cfg(not(feature = "parallel"))]
        {
            observer.on_stage_start(Stage::FullRoute);
            let t = Instant::now();
            let full = self.route(NetworkView::full(network), source, target)?;
            observer.on_stage_end(Stage::FullRoute, t.elapsed());

            observer.on_stage_start(Stage::SpanningNetwork);
            let t = Instant::now();
            let spanning = SpanningNetwork::build(network)?;
            observer.on_stage_end(Stage::SpanningNetwork, t.elapsed());

            Ok((full, spanning))
        }

        #[cfg(feature = "parallel")]
        {
            observer.on_stage_start(Stage::FullRoute);
            observer.on_stage_start(Stage::SpanningNetwork);
            let (full, spanning) = rayon::join(
                || {
                    let t = Instant::now();
                    self.route(NetworkView::full(network), source, target)
                        .map(|r| (r, t.elapsed()))
                },
                || {
                    let t = Instant::now();
                    SpanningNetwork::build(network).map(|s| (s, t.elapsed()))
                },
            );
            let (full, full_elapsed) = full?;
            observer.on_stage_end(Stage::FullRoute, full_elapsed);
            let (spanning, spanning_elapsed) = spanning?;
            observer.on_stage_end(Stage::SpanningNetwork, spanning_elapsed);

            Ok((full, spanning))
        }
    }

    fn route(&self, view: NetworkView<'_>, source: &str, target: &str) -> NetworkResult<Route> {
        let tree = if self.config.stop_at_target {
            ShortestPathTree::build_until(view, source, target)?
        } else {
            ShortestPathTree::build(view, source)?
        };
        tree.route_to(view.network(), target)
    }
}

/// `num / den`, with an empty denominator read as "no change".
fn ratio(num: u64, den: u64) -> f64 {
    if den == 0 { 1.0 } else { num as f64 / den as f64 }
}
