//! The `Fleet` struct and the dispatch run.

use fl_core::{AddressIdx, ClockTime, FleetConfig, PackageId, TruckId};
use fl_route::{DistanceOracle, NearestNeighbor, RoutePlanner};
use fl_store::{ChainedTable, PackageTable};
use tracing::{debug, trace};

use crate::{
    DeliveryPlan, DispatchError, DispatchObserver, DispatchPhase, DispatchResult, Truck,
    plan_delivery,
};

// ── Fleet ─────────────────────────────────────────────────────────────────────

/// All trucks of the day together with the data they run on.
///
/// A dispatch has two phases:
///
/// 1. **Plan** ([`plan_delivery`], read-only, optionally parallel across
///    trucks with the `parallel` feature): resolve addresses, build the
///    route, align packages with stops.
/// 2. **Apply** (sequential, in truck order): walk the route, advance the
///    truck clock, stamp deliveries into the package table, drive back to
///    the hub.
///
/// Create via [`FleetBuilder`][crate::FleetBuilder].
pub struct Fleet<P: RoutePlanner = NearestNeighbor> {
    pub(crate) config:   FleetConfig,
    pub(crate) packages: PackageTable,
    pub(crate) oracle:   DistanceOracle,
    pub(crate) trucks:   Vec<Truck>,
    /// Package → truck carrying it.  Validated complete by the builder.
    pub(crate) owners:   ChainedTable<TruckId>,
    pub(crate) depot:    AddressIdx,
    pub(crate) planner:  P,
}

impl<P: RoutePlanner> Fleet<P> {
    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn config(&self) -> &FleetConfig { &self.config }
    pub fn table(&self) -> &PackageTable { &self.packages }
    pub fn oracle(&self) -> &DistanceOracle { &self.oracle }
    pub fn trucks(&self) -> &[Truck] { &self.trucks }
    pub fn depot(&self) -> AddressIdx { self.depot }

    pub fn truck(&self, id: TruckId) -> Option<&Truck> {
        self.trucks.iter().find(|t| t.id() == id)
    }

    /// The truck carrying `package`.
    pub fn owner_of(&self, package: PackageId) -> Option<&Truck> {
        self.owners.get(package).and_then(|&id| self.truck(id))
    }

    /// Miles driven by all trucks, return legs included.
    pub fn total_miles(&self) -> f64 {
        self.trucks.iter().map(Truck::miles).sum()
    }

    /// `true` once every truck is back at the hub.
    pub fn all_returned(&self) -> bool {
        self.trucks.iter().all(|t| t.phase() == DispatchPhase::ReturnedToHub)
    }

    // ── Dispatch ──────────────────────────────────────────────────────────

    /// Run truck `id` through its whole delivery route.  Returns the time it
    /// gets back to the hub.
    ///
    /// # Errors
    ///
    /// Any planning error aborts the truck before anything is written; it
    /// stays `NotDispatched`.  A truck already dispatched is rejected with
    /// [`DispatchError::AlreadyDispatched`].
    pub fn dispatch<O: DispatchObserver>(
        &mut self,
        id:       TruckId,
        observer: &mut O,
    ) -> DispatchResult<ClockTime> {
        let pos = self.position(id)?;
        let plan = self.plan(pos)?;
        self.apply(pos, plan, observer)
    }

    /// Dispatch every truck that has not run yet, in the order they were
    /// added.
    ///
    /// All plans are computed before any is applied; if one fails, its error
    /// is returned (the first in truck order) and no truck moves.
    pub fn dispatch_all<O: DispatchObserver>(&mut self, observer: &mut O) -> DispatchResult<()> {
        let pending: Vec<usize> = self
            .trucks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.phase() == DispatchPhase::NotDispatched)
            .map(|(pos, _)| pos)
            .collect();

        let plans = self.plan_many(&pending);
        let plans: Vec<DeliveryPlan> = plans.into_iter().collect::<DispatchResult<_>>()?;

        for (pos, plan) in pending.into_iter().zip(plans) {
            self.apply(pos, plan, observer)?;
        }
        Ok(())
    }

    // ── Internals ─────────────────────────────────────────────────────────

    pub(crate) fn position(&self, id: TruckId) -> DispatchResult<usize> {
        self.trucks
            .iter()
            .position(|t| t.id() == id)
            .ok_or(DispatchError::TruckNotFound(id))
    }

    fn plan(&self, pos: usize) -> DispatchResult<DeliveryPlan> {
        let truck = &self.trucks[pos];
        if truck.phase() != DispatchPhase::NotDispatched {
            return Err(DispatchError::AlreadyDispatched(truck.id()));
        }
        plan_delivery(truck, &self.packages, &self.oracle, &self.planner, self.depot)
    }

    /// Plan several trucks.  Results come back in `positions` order.
    fn plan_many(&self, positions: &[usize]) -> Vec<DispatchResult<DeliveryPlan>> {
        #[cfg(not(feature = "parallel"))]
        {
            positions.iter().map(|&pos| self.plan(pos)).collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            positions.par_iter().map(|&pos| self.plan(pos)).collect()
        }
    }

    /// Write phase: move the truck along `plan` and stamp deliveries.
    fn apply<O: DispatchObserver>(
        &mut self,
        pos:      usize,
        plan:     DeliveryPlan,
        observer: &mut O,
    ) -> DispatchResult<ClockTime> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let config   = &self.config;
        let oracle   = &self.oracle;
        let packages = &mut self.packages;
        let truck    = &mut self.trucks[pos];

        // ── Routed ────────────────────────────────────────────────────────
        truck.set_routed(plan.package_ids(), plan.route.total_distance);
        observer.on_routed(truck.id(), &plan.route);

        // ── Delivering ────────────────────────────────────────────────────
        truck.start_delivering();
        for (from, stop) in plan.route.legs(plan.depot) {
            truck.drive(config.travel_hours(oracle.distance(from, stop)));

            let next = plan.ordered.iter().find(|&&(id, index)| {
                index == stop && packages.get(id).is_some_and(|p| !p.is_delivered())
            });
            let Some(&(id, _)) = next else {
                trace!(truck = %truck.id(), %stop, "no undelivered package for stop");
                continue;
            };

            let at = truck.clock().truncate_secs();
            packages
                .get_mut(id)
                .ok_or(DispatchError::PackageNotFound(id))?
                .mark_delivered(at)?;
            debug!(truck = %truck.id(), package = %id, %at, "delivered");
            observer.on_delivered(truck.id(), id, at);
        }

        // ── Back to the hub ───────────────────────────────────────────────
        let last = plan.route.end(plan.depot);
        let back = oracle.distance(last, plan.depot);
        truck.return_to_hub(back, config.travel_hours(back));
        debug!(
            truck = %truck.id(),
            returned_at = %truck.clock(),
            miles = truck.miles(),
            "returned to hub"
        );
        observer.on_returned(truck.id(), truck.clock(), truck.miles());

        Ok(truck.clock())
    }
}
