//! `fl-core` - foundational types for the `rust_fleet` delivery simulator.
//!
//! This crate is a dependency of every other `fl-*` crate.  It has no `fl-*`
//! dependencies and minimal external ones (only `thiserror`, plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `PackageId`, `TruckId`, `AddressIdx`                  |
//! | [`time`]        | `ClockTime` (time of day, microsecond resolution)     |
//! | [`config`]      | `FleetConfig` - every tunable constant of a run       |
//! | [`error`]       | `FleetError`, `FleetResult`, `ErrorKind`              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::FleetConfig;
pub use error::{ErrorKind, FleetError, FleetResult};
pub use ids::{AddressIdx, PackageId, TruckId};
pub use time::ClockTime;
