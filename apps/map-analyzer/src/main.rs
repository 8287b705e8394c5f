//! map-analyzer — fastest route vs. barely connected map.
//!
//! Reads a tab-delimited map, finds the fastest route between the two cities
//! named on its first line, builds the minimum spanning ("barely connected")
//! map, re-routes over it, and writes the comparison report.
//!
//! ```text
//! map-analyzer data/sample_map.txt report.txt
//! map-analyzer map.txt report.txt --config data/analysis.json -v debug
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use ma_analysis::{Analysis, AnalysisObserver, RouteAnalyzer, Stage};
use ma_core::AnalysisConfig;
use ma_io::{ReportWriter, TextReportWriter, load_map_file};

// ── CLI ───────────────────────────────────────────────────────────────────────

/// Compare the fastest route on a road map with the fastest route on its
/// barely connected (minimum spanning) map.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Map file: `source<TAB>target` header, then `cityA<TAB>cityB<TAB>length<TAB>id` lines.
    input: PathBuf,

    /// Report file to create (overwritten if it exists).
    output: PathBuf,

    /// JSON file with analysis settings; missing keys fall back to defaults.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Grow full shortest path trees instead of stopping at the target.
    #[arg(long)]
    full_tree: bool,

    /// Logging verbosity level (`trace`, `debug`, `info`, `warn`, `error`).
    #[arg(short, long, default_value = "info")]
    verbosity: String,
}

fn setup_logging(verbosity: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(verbosity));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<AnalysisConfig> {
    let Some(path) = path else {
        return Ok(AnalysisConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

// ── Observer ──────────────────────────────────────────────────────────────────

/// Logs analysis progress through `tracing`.
struct TracingObserver;

impl AnalysisObserver for TracingObserver {
    fn on_network_loaded(&mut self, cities: usize, roads: usize) {
        info!(cities, roads, "road network loaded");
    }

    fn on_stage_start(&mut self, stage: Stage) {
        debug!("{stage}: started");
    }

    fn on_stage_end(&mut self, stage: Stage, elapsed: Duration) {
        debug!("{stage}: done in {:.3} ms", elapsed.as_secs_f64() * 1e3);
    }

    fn on_analysis_end(&mut self, analysis: &Analysis) {
        info!(
            full_km = analysis.full_route.total_length,
            reduced_km = analysis.reduced_route.total_length,
            spanning_roads = analysis.spanning_network.len(),
            "analysis complete"
        );
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let args = Cli::parse();
    setup_logging(&args.verbosity);

    let mut config = load_config(args.config.as_deref())?;
    if args.full_tree {
        config.stop_at_target = false;
    }
    debug!(?config, "configuration");

    let t0 = Instant::now();
    let input = load_map_file(&args.input)
        .with_context(|| format!("loading map {}", args.input.display()))?;
    info!(
        source = %input.source,
        target = %input.target,
        roads = input.roads.len(),
        "read {}",
        args.input.display()
    );

    let ratio_decimals = config.ratio_decimals;
    let analysis = RouteAnalyzer::new(config)
        .analyze(input.roads, &input.source, &input.target, &mut TracingObserver)
        .with_context(|| format!("analyzing {} -> {}", input.source, input.target))?;

    let mut writer = TextReportWriter::create(&args.output, ratio_decimals)
        .with_context(|| format!("creating report {}", args.output.display()))?;
    writer.write_report(&analysis)?;
    writer.finish()?;

    info!(
        "wrote {} in {:.3} s",
        args.output.display(),
        t0.elapsed().as_secs_f64()
    );
    Ok(())
}
