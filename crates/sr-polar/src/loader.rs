//! Delimited-text polar loader.
//!
//! # File format
//!
//! The first row is a header: an arbitrary label cell, then the TWS axis.
//! Every following row is one TWA followed by a boat speed per TWS column.
//!
//! ```text
//! TWA\TWS;6;10;16;20
//! 0;0;0;0;0
//! 45;4.9;6.3;7.0;7.1
//! 90;6.3;7.6;8.4;8.8
//! 135;5.5;7.2;8.5;9.3
//! 180;4.2;5.8;7.2;8.1
//! ```
//!
//! Semicolon is the usual delimiter for `.pol`/`.csv` polar exports;
//! pass another byte (`b'\t'`, `b','`) to [`load_polar_reader`] for other
//! flavours.  Blank cells inside a row are rejected rather than guessed.

use std::io::Read;
use std::path::Path;

use crate::{PolarError, PolarResult, PolarTable};

pub const DEFAULT_DELIMITER: u8 = b';';

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a polar from a file using [`DEFAULT_DELIMITER`].
pub fn load_polar_csv(path: &Path) -> PolarResult<PolarTable> {
    let file = std::fs::File::open(path).map_err(PolarError::Io)?;
    load_polar_reader(file, DEFAULT_DELIMITER)
}

/// Like [`load_polar_csv`] but accepts any `Read` source and delimiter.
///
/// Useful for testing (pass a `std::io::Cursor`) or for polars embedded in
/// a binary.
pub fn load_polar_reader<R: Read>(reader: R, delimiter: u8) -> PolarResult<PolarTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    // ── Header: label + TWS axis ──────────────────────────────────────────
    let headers = csv_reader
        .headers()
        .map_err(|e| PolarError::Parse(e.to_string()))?
        .clone();
    let tws: Vec<f64> = headers
        .iter()
        .skip(1)
        .map(|cell| parse_number(cell, "TWS header"))
        .collect::<PolarResult<_>>()?;
    if tws.is_empty() {
        return Err(PolarError::Parse("header has no TWS columns".to_string()));
    }

    // ── Body: TWA + speeds ────────────────────────────────────────────────
    let mut twa = Vec::new();
    let mut speeds = Vec::new();
    for (line, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| PolarError::Parse(e.to_string()))?;
        if record.len() != tws.len() + 1 {
            return Err(PolarError::Parse(format!(
                "row {}: expected {} cells, got {}",
                line + 2,
                tws.len() + 1,
                record.len()
            )));
        }
        let mut cells = record.iter();
        let angle = cells.next().unwrap_or_default();
        twa.push(parse_number(angle, "TWA")?);
        for cell in cells {
            speeds.push(parse_number(cell, "boat speed")?);
        }
    }

    PolarTable::new(twa, tws, speeds)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_number(cell: &str, what: &str) -> PolarResult<f64> {
    cell.parse::<f64>()
        .map_err(|_| PolarError::Parse(format!("invalid {what} value {cell:?}")))
}
