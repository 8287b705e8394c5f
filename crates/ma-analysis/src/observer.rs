//! Analysis observer trait for progress reporting.

use std::fmt;
use std::time::Duration;

use crate::Analysis;

/// The algorithmic stages of one analysis run.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Stage {
    /// Shortest path over the full network.
    FullRoute,
    /// Minimum spanning network over the full network.
    SpanningNetwork,
    /// Shortest path restricted to the spanning network.
    ReducedRoute,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Stage::FullRoute       => "full route",
            Stage::SpanningNetwork => "spanning network",
            Stage::ReducedRoute    => "reduced route",
        })
    }
}

/// Callbacks invoked by [`RouteAnalyzer`][crate::RouteAnalyzer] at key points
/// of a run.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — stage timer
///
/// ```rust,ignore
/// struct StageTimer;
///
/// impl AnalysisObserver for StageTimer {
///     fn on_stage_end(&mut self, stage: Stage, elapsed: Duration) {
///         println!("{stage}: {:.3} ms", elapsed.as_secs_f64() * 1e3);
///     }
/// }
/// ```
pub trait AnalysisObserver {
    /// Called once the edge list has been validated into a network.
    fn on_network_loaded(&mut self, _cities: usize, _roads: usize) {}

    /// Called before a stage starts.
    ///
    /// With the `parallel` feature the full route and spanning network
    /// stages both start before either ends.
    fn on_stage_start(&mut self, _stage: Stage) {}

    /// Called after a stage completes successfully.
    fn on_stage_end(&mut self, _stage: Stage, _elapsed: Duration) {}

    /// Called once with the finished analysis.
    fn on_analysis_end(&mut self, _analysis: &Analysis) {}
}

/// An [`AnalysisObserver`] that does nothing.
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {}
