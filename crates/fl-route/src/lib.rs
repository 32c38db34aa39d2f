//! `fl-route` - distance table, address index, and route planning.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`distance`] | `DistanceTable` - validated symmetric matrix              |
//! | [`address`]  | `AddressBook` - address string → `AddressIdx`             |
//! | [`oracle`]   | `DistanceOracle`, `PlannedRoute`, nearest-neighbor search |
//! | [`planner`]  | `RoutePlanner` trait, `NearestNeighbor`                   |
//! | [`loader`]   | `load_addresses_*`, `load_distances_*` (CSV)              |
//! | [`error`]    | `RouteError`, `RouteResult<T>`                            |
//!
//! # Feature flags
//!
//! | Flag      | Effect                                                    |
//! |-----------|-----------------------------------------------------------|
//! | `fx-hash` | Uses `rustc-hash`'s FxHashMap for the address index.      |

pub mod address;
pub mod distance;
pub mod error;
pub mod loader;
pub mod oracle;
pub mod planner;

#[cfg(test)]
mod tests;

pub use address::{AddressBook, AddressEntry};
pub use distance::DistanceTable;
pub use error::{RouteError, RouteResult};
pub use loader::{load_addresses_csv, load_addresses_reader, load_distances_csv, load_distances_reader};
pub use oracle::{DistanceOracle, PlannedRoute};
pub use planner::{NearestNeighbor, RoutePlanner};
