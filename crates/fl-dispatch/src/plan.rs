//! Read-only planning phase of a dispatch.
//!
//! [`plan_delivery`] covers everything that can fail: it resolves every
//! assigned package to an address index, asks the planner for a route and
//! aligns the package list with it.  Nothing is written, so a failing plan
//! leaves the fleet exactly as it was, and plans for different trucks can be
//! computed concurrently.

use fl_core::{AddressIdx, PackageId, TruckId};
use fl_route::{DistanceOracle, PlannedRoute, RoutePlanner};
use fl_store::PackageTable;

use crate::{DispatchError, DispatchResult, Truck};

/// The outcome of planning one truck.
#[derive(Clone, Debug, PartialEq)]
pub struct DeliveryPlan {
    pub truck: TruckId,
    /// Start and end of the route.
    pub depot: AddressIdx,
    pub route: PlannedRoute,
    /// The truck's packages in route order, each with its address index.
    pub ordered: Vec<(PackageId, AddressIdx)>,
}

impl DeliveryPlan {
    /// Package ids in route order.
    pub fn package_ids(&self) -> Vec<PackageId> {
        self.ordered.iter().map(|&(id, _)| id).collect()
    }
}

/// Plan `truck`'s run from `depot`.
///
/// # Errors
///
/// - [`DispatchError::UnknownPackage`] for an id missing from `packages`.
/// - [`DispatchError::UnresolvedAddress`] for an address missing from the
///   oracle's address book.
/// - [`DispatchError::AddressOutOfRange`] if the index is outside the table.
pub fn plan_delivery<P: RoutePlanner + ?Sized>(
    truck:    &Truck,
    packages: &PackageTable,
    oracle:   &DistanceOracle,
    planner:  &P,
    depot:    AddressIdx,
) -> DispatchResult<DeliveryPlan> {
    // ── Resolve ───────────────────────────────────────────────────────────
    let mut assigned = Vec::with_capacity(truck.packages().len());
    for &id in truck.packages() {
        let package = packages
            .get(id)
            .ok_or(DispatchError::UnknownPackage { truck: truck.id(), package: id })?;
        let index = oracle.resolve(package.address()).ok_or_else(|| {
            DispatchError::UnresolvedAddress { package: id, address: package.address().to_string() }
        })?;
        if index.index() >= oracle.table().size() {
            return Err(DispatchError::AddressOutOfRange { package: id, index });
        }
        assigned.push((id, index));
    }

    // ── Route ─────────────────────────────────────────────────────────────
    let required: Vec<AddressIdx> = assigned.iter().map(|&(_, index)| index).collect();
    let route = planner.plan(oracle, depot, &required);

    // ── Align packages with stops ─────────────────────────────────────────
    //
    // Each stop takes the first still-unused package at that address, so
    // packages sharing an address end up consecutive and distinct.
    let mut used = vec![false; assigned.len()];
    let mut ordered = Vec::with_capacity(assigned.len());
    for &stop in &route.stops {
        let hit = assigned
            .iter()
            .enumerate()
            .position(|(i, &(_, index))| !used[i] && index == stop);
        if let Some(i) = hit {
            used[i] = true;
            ordered.push(assigned[i]);
        }
    }
    // A planner that drops a stop leaves its package unmatched; keep it on
    // the truck, after the routed ones.
    ordered.extend(
        assigned.iter().zip(&used).filter(|&(_, &u)| !u).map(|(&entry, _)| entry),
    );

    Ok(DeliveryPlan { truck: truck.id(), depot, route, ordered })
}
