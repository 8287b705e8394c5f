//! Tab-delimited map loader.
//!
//! # Format
//!
//! The first non-blank line names the route endpoints; every following line
//! is one undirected road.
//!
//! ```text
//! <source>\t<target>
//! <cityA>\t<cityB>\t<length>\t<id>
//! ...
//! ```
//!
//! Fields are trimmed, blank lines are skipped and trailing empty fields
//! are dropped.  There is no quoting.
//! Only the shape of each line is checked here; length and id rules are
//! enforced later by `RoadNetwork::load`.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Deserialize;

use ma_core::{RoadRecord, ValidationError};

use crate::{MapIoError, MapIoResult};

// ── Rows ──────────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct HeaderRow {
    source: String,
    target: String,
}

#[derive(Deserialize)]
struct RoadRow {
    a:      String,
    b:      String,
    length: i64,
    id:     i64,
}

/// A parsed map file: the route endpoints plus the raw road list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MapInput {
    pub source: String,
    pub target: String,
    pub roads:  Vec<RoadRecord>,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a map from a file.
pub fn load_map_file(path: &Path) -> MapIoResult<MapInput> {
    let file = std::fs::File::open(path)?;
    load_map_reader(file)
}

/// Like [`load_map_file`] but accepts any `Read` source.
///
/// Useful for testing (pass a `&[u8]`) or reading from stdin.  The input is
/// buffered whole so that error line numbers can be recovered exactly.
pub fn load_map_reader<R: Read>(mut reader: R) -> MapIoResult<MapInput> {
    let mut text = Vec::new();
    reader.read_to_end(&mut text)?;
    let lines = LineIndex::new(&text);

    let mut csv_reader = ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(Trim::All)
        .from_reader(text.as_slice());

    let mut rows = csv_reader
        .records()
        .filter(|r| r.as_ref().map_or(true, |rec| !is_blank(rec)));

    // ── Header line ───────────────────────────────────────────────────────
    let header = rows.next().ok_or(MapIoError::MissingHeader)??;
    let HeaderRow { source, target } =
        parse_row(&header, lines.line_of(&header), 2, "source<TAB>target")?;

    // ── Road lines ────────────────────────────────────────────────────────
    let mut roads = Vec::new();
    for result in rows {
        let row = result?;
        let RoadRow { a, b, length, id } =
            parse_row(&row, lines.line_of(&row), 4, "cityA<TAB>cityB<TAB>length<TAB>id")?;
        roads.push(RoadRecord { a, b, length, id });
    }

    Ok(MapInput { source, target, roads })
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Byte offsets of every `\n` in the input, for mapping records to lines.
///
/// csv skips empty lines silently and reports the start of a record as the
/// first byte after the previous record, which may be one of those empty
/// lines; `line_of` steps past them before counting.
struct LineIndex<'a> {
    text:     &'a [u8],
    newlines: Vec<usize>,
}

impl<'a> LineIndex<'a> {
    fn new(text: &'a [u8]) -> Self {
        let newlines = text
            .iter()
            .enumerate()
            .filter(|&(_, &b)| b == b'\n')
            .map(|(i, _)| i)
            .collect();
        Self { text, newlines }
    }

    /// 1-based line on which `record`'s content starts.
    fn line_of(&self, record: &StringRecord) -> u64 {
        let mut start = record.position().map_or(0, |p| p.byte() as usize);
        while matches!(self.text.get(start), Some(b'\n' | b'\r')) {
            start += 1;
        }
        self.newlines.partition_point(|&nl| nl < start) as u64 + 1
    }
}

fn is_blank(record: &StringRecord) -> bool {
    record.iter().all(str::is_empty)
}

/// Deserialize `record` as exactly `fields` columns.  Trailing empty fields
/// (a stray tab at the end of a line) are ignored.
fn parse_row<T>(record: &StringRecord, line: u64, fields: usize, shape: &str) -> Result<T, ValidationError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut record = record.clone();
    while record.len() > fields && record.get(record.len() - 1) == Some("") {
        record.truncate(record.len() - 1);
    }
    if record.len() != fields {
        return Err(ValidationError::MalformedRecord {
            line,
            reason: format!("expected {fields} fields ({shape}), found {}", record.len()),
        });
    }
    record
        .deserialize(None)
        .map_err(|e| ValidationError::MalformedRecord { line, reason: e.to_string() })
}
