//! Point-in-time status queries over a dispatched fleet.
//!
//! Query times are validated (`HH:MM`) before any lookup.  Both read
//! queries take `&self` and never write; [`Fleet::apply_view`] is the one
//! call that copies a view back into the stored package, and it needs
//! `&mut self`.

use std::fmt;

use fl_core::{ClockTime, PackageId, TruckId};
use fl_route::RoutePlanner;
use fl_status::{StatusView, resolve_status};

use crate::{DispatchError, DispatchResult, Fleet};

// ── Report types ──────────────────────────────────────────────────────────────

/// The status of one package together with the truck carrying it.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusReport {
    pub truck:         TruckId,
    pub dispatch_time: ClockTime,
    pub view:          StatusView,
}

impl fmt::Display for StatusReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.view, f)
    }
}

/// Every package on one truck, in the truck's current package order.
#[derive(Clone, Debug, PartialEq)]
pub struct TruckReport {
    pub truck:         TruckId,
    pub dispatch_time: ClockTime,
    pub lines:         Vec<StatusView>,
}

impl fmt::Display for TruckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Truck #{} (Dispatches at {}):", self.truck.0, self.dispatch_time.hm())?;
        for line in &self.lines {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}

// ── Queries ───────────────────────────────────────────────────────────────────

impl<P: RoutePlanner> Fleet<P> {
    /// Status of `package` at `time` (`HH:MM`).
    ///
    /// # Errors
    ///
    /// - `Core(FleetError::InvalidTime)` (kind `Validation`) for a malformed
    ///   time, checked first.
    /// - [`DispatchError::PackageNotFound`] (kind `LookupMiss`).
    pub fn query_one(&self, package: PackageId, time: &str) -> DispatchResult<StatusReport> {
        let at = ClockTime::parse_hm(time)?;
        self.status_at(package, at)
    }

    /// Status of every package at `time`, grouped per truck in truck order;
    /// each group follows the truck's package order (route order once
    /// dispatched).
    pub fn query_all(&self, time: &str) -> DispatchResult<Vec<TruckReport>> {
        let at = ClockTime::parse_hm(time)?;
        self.trucks
            .iter()
            .map(|truck| -> DispatchResult<TruckReport> {
                let lines = truck
                    .packages()
                    .iter()
                    .map(|&id| self.status_at(id, at).map(|report| report.view))
                    .collect::<DispatchResult<Vec<_>>>()?;
                Ok(TruckReport {
                    truck:         truck.id(),
                    dispatch_time: truck.dispatch_time(),
                    lines,
                })
            })
            .collect()
    }

    /// Resolve `package` at `time` and write the displayed address, zip and
    /// status into the stored package.
    ///
    /// This overwrites state every later reader of the table sees.  Call it
    /// only once the trucks are dispatched.
    pub fn apply_view(&mut self, package: PackageId, time: &str) -> DispatchResult<StatusView> {
        let report = self.query_one(package, time)?;
        let stored = self
            .packages
            .get_mut(package)
            .ok_or(DispatchError::PackageNotFound(package))?;
        report.view.apply_to(stored);
        Ok(report.view)
    }

    fn status_at(&self, package: PackageId, at: ClockTime) -> DispatchResult<StatusReport> {
        let stored = self
            .packages
            .get(package)
            .ok_or(DispatchError::PackageNotFound(package))?;
        let truck = self
            .owner_of(package)
            .ok_or(DispatchError::PackageNotFound(package))?;
        Ok(StatusReport {
            truck:         truck.id(),
            dispatch_time: truck.dispatch_time(),
            view:          resolve_status(stored, at, truck.dispatch_time(), &self.config),
        })
    }
}
