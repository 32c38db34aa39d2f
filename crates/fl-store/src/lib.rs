//! `fl-store` - package records and the keyed package table.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`table`]   | `ChainedTable<V>` (separate chaining), `PackageTable`       |
//! | [`package`] | `Package`, `PackageRecord`, `PackageStatus`                 |
//! | [`loader`]  | `load_packages_csv`, `load_packages_reader`                 |
//! | [`error`]   | `StoreError`, `StoreResult<T>`                              |
//!
//! # Ownership
//!
//! The table exclusively owns every `Package`.  Trucks and queries refer to
//! packages by `PackageId` only, so there is exactly one writer path for the
//! delivery timestamp: `PackageTable::get_mut` followed by
//! [`Package::mark_delivered`].

pub mod error;
pub mod loader;
pub mod package;
pub mod table;


pub use error::{StoreError, StoreResult};
pub use loader::{load_packages_csv, load_packages_reader};
pub use package::{Package, PackageRecord, PackageStatus};
pub use table::{ChainedTable, PackageTable};
