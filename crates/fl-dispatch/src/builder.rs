//! Fluent builder for constructing a [`Fleet`].

use fl_core::{ClockTime, FleetConfig, PackageId, TruckId};
use fl_route::{DistanceOracle, NearestNeighbor, RoutePlanner};
use fl_store::{ChainedTable, PackageTable};

use crate::{DispatchError, DispatchResult, Fleet, Truck};

/// Fluent builder for [`Fleet<P>`].
///
/// # Required inputs
///
/// - [`FleetConfig`]: speed, depot, display constants, …
/// - [`PackageTable`]: every package of the day
/// - [`DistanceOracle`]: distance table plus address book
///
/// # Optional inputs
///
/// | Method            | Default              |
/// |-------------------|----------------------|
/// | `.planner(p)`     | [`NearestNeighbor`]  |
/// | `.truck(..)`      | no trucks            |
///
/// # Validation done by `build`
///
/// - the configuration passes [`FleetConfig::validate`];
/// - the depot address resolves;
/// - truck ids are unique;
/// - every assigned package exists and is on exactly one truck;
/// - every package in the table is on some truck.
///
/// Package addresses are resolved later, when each truck is dispatched.
pub struct FleetBuilder<P: RoutePlanner = NearestNeighbor> {
    config:   FleetConfig,
    packages: PackageTable,
    oracle:   DistanceOracle,
    trucks:   Vec<Truck>,
    planner:  P,
}

impl FleetBuilder<NearestNeighbor> {
    pub fn new(config: FleetConfig, packages: PackageTable, oracle: DistanceOracle) -> Self {
        Self {
            config,
            packages,
            oracle,
            trucks:  Vec::new(),
            planner: NearestNeighbor,
        }
    }
}

impl<P: RoutePlanner> FleetBuilder<P> {
    /// Replace the route planner.
    pub fn planner<Q: RoutePlanner>(self, planner: Q) -> FleetBuilder<Q> {
        FleetBuilder {
            config:   self.config,
            packages: self.packages,
            oracle:   self.oracle,
            trucks:   self.trucks,
            planner,
        }
    }

    /// Add a truck leaving the depot at `dispatch_time` with `packages`.
    ///
    /// Trucks keep the order they are added in; `dispatch_all` and
    /// `query_all` follow it.
    pub fn truck(mut self, id: TruckId, packages: Vec<PackageId>, dispatch_time: ClockTime) -> Self {
        self.trucks.push(Truck::new(id, packages, dispatch_time));
        self
    }

    /// Validate the assignment and return a fleet ready to dispatch.
    pub fn build(self) -> DispatchResult<Fleet<P>> {
        self.config.validate()?;

        let depot = self.oracle.resolve(&self.config.depot_address).ok_or_else(|| {
            DispatchError::Config(format!(
                "depot address {:?} is not in the address table",
                self.config.depot_address
            ))
        })?;

        // ── Truck ids ─────────────────────────────────────────────────────
        for (i, truck) in self.trucks.iter().enumerate() {
            if self.trucks[..i].iter().any(|t| t.id() == truck.id()) {
                return Err(DispatchError::DuplicateTruck(truck.id()));
            }
        }

        // ── Package ownership ─────────────────────────────────────────────
        let mut owners: ChainedTable<TruckId> = ChainedTable::new(self.config.bucket_count);
        for truck in &self.trucks {
            for &package in truck.packages() {
                if !self.packages.contains(package) {
                    return Err(DispatchError::UnknownPackage { truck: truck.id(), package });
                }
                if let Some(&first) = owners.get(package) {
                    return Err(DispatchError::AlreadyAssigned { package, first, second: truck.id() });
                }
                owners.insert(package, truck.id());
            }
        }
        if let Some(missing) = self.packages.ids().into_iter().find(|&id| !owners.contains(id)) {
            return Err(DispatchError::Unassigned(missing));
        }

        Ok(Fleet {
            config:   self.config,
            packages: self.packages,
            oracle:   self.oracle,
            trucks:   self.trucks,
            owners,
            depot,
            planner:  self.planner,
        })
    }
}
