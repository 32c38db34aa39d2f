//! CSV package loader.
//!
//! # CSV format
//!
//! Header-less, one row per package; the trailing notes column may be
//! omitted:
//!
//! ```csv
//! 1,195 W Oakland Ave,Salt Lake City,UT,84115,10:30 AM,21,
//! 6,3060 Lester St,West Valley City,UT,84119,10:30 AM,88,Delayed on flight---will not arrive to depot until 9:05 am
//! 9,410 S State St,Salt Lake City,UT,84111,EOD,2,Wrong address listed
//! ```
//!
//! Ids must be positive and unique; duplicates are rejected rather than
//! silently replacing the earlier row.

use std::io::Read;
use std::path::Path;

use fl_core::{FleetConfig, PackageId};

use crate::{Package, PackageRecord, PackageTable, StoreError};

/// Load every package from a CSV file into a new [`PackageTable`] with
/// `config.bucket_count` buckets.
pub fn load_packages_csv(path: &Path, config: &FleetConfig) -> Result<PackageTable, StoreError> {
    let file = std::fs::File::open(path)
        .map_err(StoreError::Io)?;
    load_packages_reader(file, config)
}

/// Like [`load_packages_csv`] but accepts any `Read` source.
///
/// Useful for testing (pass a `std::io::Cursor`) or for data embedded in
/// the binary.
pub fn load_packages_reader<R: Read>(
    reader: R,
    config: &FleetConfig,
) -> Result<PackageTable, StoreError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut table = PackageTable::new(config.bucket_count);

    for (line, result) in csv_reader.deserialize::<PackageRecord>().enumerate() {
        let row = result.map_err(|e| StoreError::Parse(e.to_string()))?;

        if row.id == 0 {
            return Err(StoreError::Parse(format!(
                "row {}: package id must be positive",
                line + 1
            )));
        }
        if !(row.weight.is_finite() && row.weight >= 0.0) {
            return Err(StoreError::Parse(format!(
                "row {}: invalid weight {}",
                line + 1,
                row.weight
            )));
        }

        let id = PackageId(row.id);
        if table.contains(id) {
            return Err(StoreError::DuplicateId(id));
        }
        table.insert(id, Package::new(row, config));
    }

    Ok(table)
}
