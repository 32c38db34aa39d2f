//! CSV loaders for the address table and the distance matrix.
//!
//! # Address CSV
//!
//! Header-less `index,label,address` rows:
//!
//! ```csv
//! 0,Western Governors University,4001 South 700 East
//! 1,International Peace Gardens,1060 Dalton Ave S
//! ```
//!
//! # Distance CSV
//!
//! Header-less, one row per address index.  Either a full square matrix or
//! a lower triangle; blank or missing cells are mirrored from the other half
//! (see [`DistanceTable::from_partial_rows`]).
//!
//! ```csv
//! 0.0
//! 7.2,0.0
//! 3.8,7.1,0.0
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use fl_core::AddressIdx;

use crate::{AddressBook, DistanceTable, RouteError};

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct AddressRecord {
    index:   u32,
    label:   String,
    address: String,
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load the address table from a CSV file.
pub fn load_addresses_csv(path: &Path) -> Result<AddressBook, RouteError> {
    let file = std::fs::File::open(path)
        .map_err(RouteError::Io)?;
    load_addresses_reader(file)
}

/// Like [`load_addresses_csv`] but accepts any `Read` source.
pub fn load_addresses_reader<R: Read>(reader: R) -> Result<AddressBook, RouteError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut book = AddressBook::new();
    for result in csv_reader.deserialize::<AddressRecord>() {
        let row = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        book.insert(AddressIdx(row.index), &row.label, &row.address)?;
    }
    Ok(book)
}

/// Load the distance matrix from a CSV file.
pub fn load_distances_csv(path: &Path) -> Result<DistanceTable, RouteError> {
    let file = std::fs::File::open(path)
        .map_err(RouteError::Io)?;
    load_distances_reader(file)
}

/// Like [`load_distances_csv`] but accepts any `Read` source.
pub fn load_distances_reader<R: Read>(reader: R) -> Result<DistanceTable, RouteError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut rows: Vec<Vec<Option<f64>>> = Vec::new();
    for (row, result) in csv_reader.records().enumerate() {
        let record = result.map_err(|e| RouteError::Parse(e.to_string()))?;
        let cells = record
            .iter()
            .enumerate()
            .map(|(col, cell)| parse_cell(cell, row, col))
            .collect::<Result<Vec<_>, RouteError>>()?;
        rows.push(cells);
    }

    DistanceTable::from_partial_rows(rows)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_cell(cell: &str, row: usize, col: usize) -> Result<Option<f64>, RouteError> {
    if cell.is_empty() {
        return Ok(None);
    }
    cell.parse::<f64>().map(Some).map_err(|_| {
        RouteError::Parse(format!("invalid distance {cell:?} at row {row}, column {col}"))
    })
}
