//! Route-planning trait and the default nearest-neighbor planner.
//!
//! # Pluggability
//!
//! `fl-dispatch` plans every truck through the [`RoutePlanner`] trait, so an
//! application can substitute another tour builder without touching the
//! dispatcher.  The default [`NearestNeighbor`] reproduces the reference
//! routes exactly; anything else changes delivery times.

use fl_core::AddressIdx;

use crate::{DistanceOracle, PlannedRoute};

/// Pluggable tour builder.
///
/// # Thread safety
///
/// Implementations must be `Send + Sync` so trucks can be planned on Rayon
/// worker threads (the `parallel` feature of `fl-dispatch`).
pub trait RoutePlanner: Send + Sync {
    /// Order `required` into a route starting at `start`.
    ///
    /// The returned stops must be a permutation of `required` (duplicates
    /// included) and `total_distance` the sum of its legs, return leg
    /// excluded.
    fn plan(&self, oracle: &DistanceOracle, start: AddressIdx, required: &[AddressIdx]) -> PlannedRoute;
}

/// Greedy nearest-neighbor planning via [`DistanceOracle::build_route`].
#[derive(Copy, Clone, Debug, Default)]
pub struct NearestNeighbor;

impl RoutePlanner for NearestNeighbor {
    fn plan(&self, oracle: &DistanceOracle, start: AddressIdx, required: &[AddressIdx]) -> PlannedRoute {
        oracle.build_route(start, required)
    }
}
