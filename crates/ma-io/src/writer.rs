//! Text report writer.
//!
//! The report lists the full route, the spanning ("barely connected")
//! network, and the reduced route, then the two ratios:
//!
//! ```text
//! Fastest Route from A to D (11 KM):
//! A	B	5	1
//! ...
//! Roads of Barely Connected Map is:
//! ...
//! Fastest Route from A to D on Barely Connected Map (11 KM):
//! ...
//! Analysis:
//! Ratio of Construction Material Usage Between Barely Connected and Original Map: 0.35
//! Ratio of Fastest Route Between Barely Connected and Original Map: 1.00
//! ```
//!
//! The final line carries no trailing newline.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use ma_analysis::Analysis;

use crate::MapIoResult;

/// Trait implemented by report backends.
pub trait ReportWriter {
    /// Write one complete report.
    fn write_report(&mut self, analysis: &Analysis) -> MapIoResult<()>;

    /// Flush and close the underlying output.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> MapIoResult<()>;
}

/// Writes the plain-text report to any `Write` sink.
pub struct TextReportWriter<W: Write> {
    out:            W,
    ratio_decimals: usize,
    finished:       bool,
}

impl TextReportWriter<BufWriter<File>> {
    /// Create (or truncate) the report file at `path`.
    pub fn create(path: &Path, ratio_decimals: usize) -> MapIoResult<Self> {
        let file = File::create(path)?;
        Ok(Self::new(BufWriter::new(file), ratio_decimals))
    }
}

impl<W: Write> TextReportWriter<W> {
    pub fn new(out: W, ratio_decimals: usize) -> Self {
        Self { out, ratio_decimals, finished: false }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ReportWriter for TextReportWriter<W> {
    fn write_report(&mut self, analysis: &Analysis) -> MapIoResult<()> {
        self.out.write_all(render_report(analysis, self.ratio_decimals).as_bytes())?;
        Ok(())
    }

    fn finish(&mut self) -> MapIoResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.out.flush()?;
        Ok(())
    }
}

/// Render the full report as a string.
pub fn render_report(analysis: &Analysis, ratio_decimals: usize) -> String {
    let (s, t) = (&analysis.source, &analysis.target);
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("Fastest Route from {s} to {t} ({} KM):", analysis.full_route.total_length));
    lines.extend(analysis.full_route.roads.iter().map(ToString::to_string));

    lines.push("Roads of Barely Connected Map is:".to_owned());
    lines.extend(analysis.spanning_network.iter().map(ToString::to_string));

    lines.push(format!(
        "Fastest Route from {s} to {t} on Barely Connected Map ({} KM):",
        analysis.reduced_route.total_length
    ));
    lines.extend(analysis.reduced_route.roads.iter().map(ToString::to_string));

    lines.push("Analysis:".to_owned());
    lines.push(format!(
        "Ratio of Construction Material Usage Between Barely Connected and Original Map: {}",
        format_ratio(analysis.spanning_length, analysis.original_length, ratio_decimals)
    ));
    lines.push(format!(
        "Ratio of Fastest Route Between Barely Connected and Original Map: {}",
        format_ratio(
            analysis.reduced_route.total_length,
            analysis.full_route.total_length,
            ratio_decimals
        )
    ));

    lines.join("\n")
}

/// Upper bound on rendered decimal places; larger requests are clamped.
pub const MAX_RATIO_DECIMALS: usize = 12;

/// Render `num / den` in fixed point with halves rounded up
/// (`57 / 200` → `"0.29"`).
///
/// Works on the integer pair rather than the `f64` quotient, which sits just
/// below an exact half for many such ratios.  A zero denominator renders as
/// a ratio of 1.  `decimals` is clamped to [`MAX_RATIO_DECIMALS`].
pub fn format_ratio(num: u64, den: u64, decimals: usize) -> String {
    let (num, den) = if den == 0 { (1u128, 1u128) } else { (num as u128, den as u128) };
    let decimals = decimals.min(MAX_RATIO_DECIMALS);
    let scale = 10u128.pow(decimals as u32);

    // round(num * scale / den), halves up
    let scaled = (2 * num * scale + den) / (2 * den);

    let (whole, frac) = (scaled / scale, scaled % scale);
    if decimals == 0 {
        whole.to_string()
    } else {
        format!("{whole}.{frac:0decimals$}")
    }
}
