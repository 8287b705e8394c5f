//! `ma-core` — foundational types for the map analyzer.
//!
//! This crate is a dependency of every other `ma-*` crate.  It has no `ma-*`
//! dependencies and only `thiserror` externally, plus optional `serde`.
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `CityId`, `EdgeId`, `RoadId`                          |
//! | [`road`]        | `RoadRecord` (raw input), `Road` (validated)          |
//! | [`config`]      | `AnalysisConfig`                                      |
//! | [`error`]       | `ValidationError`, `ValidationResult`                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod road;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::AnalysisConfig;
pub use error::{ValidationError, ValidationResult};
pub use ids::{CityId, EdgeId, RoadId};
pub use road::{Road, RoadRecord};
