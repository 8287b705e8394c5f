//! `ma-analysis` — the route analyzer.
//!
//! # Pipeline
//!
//! ```text
//! ① Load     — validate the edge list into a RoadNetwork.
//! ② Full     — shortest path tree from source over every road; route to target.
//! ③ Spanning — minimum spanning network from the smallest city name.
//! ④ Reduced  — shortest path tree from source over the spanning roads only.
//! ⑤ Ratios   — material = spanning length / original length,
//!              route    = reduced route length / full route length.
//! ```
//!
//! ② and ③ are independent; with the `parallel` feature they run under
//! `rayon::join`.  Any failure aborts the whole analysis.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ma_analysis::{NoopObserver, RouteAnalyzer};
//! use ma_core::AnalysisConfig;
//!
//! let analysis = RouteAnalyzer::new(AnalysisConfig::default())
//!     .analyze(records, "A", "D", &mut NoopObserver)?;
//! println!("{:.2}", analysis.material_ratio);
//! ```

pub mod analyzer;
pub mod error;
pub mod observer;


pub use analyzer::{Analysis, RouteAnalyzer, RouteSummary};
pub use error::{AnalysisError, AnalysisResult};
pub use observer::{AnalysisObserver, NoopObserver, Stage};
