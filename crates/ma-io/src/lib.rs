//! `ma-io` — reading map files and writing analysis reports.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                    |
//! |--------------|-------------------------------------------------------------|
//! | [`loader`]   | `MapInput`, `load_map_file`, `load_map_reader`              |
//! | [`writer`]   | `ReportWriter` trait, `TextReportWriter`, `render_report`   |
//! | [`error`]    | `MapIoError`, `MapIoResult<T>`                              |

pub mod error;
pub mod loader;
pub mod writer;

#[cfg(test)]
mod tests;

pub use error::{MapIoError, MapIoResult};
pub use loader::{MapInput, load_map_file, load_map_reader};
pub use writer::{MAX_RATIO_DECIMALS, ReportWriter, TextReportWriter, format_ratio, render_report};
