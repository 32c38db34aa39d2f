//! Dispatch observer trait for progress reporting and data collection.

use fl_core::{ClockTime, PackageId, TruckId};
use fl_route::PlannedRoute;
use tracing::info;

/// Callbacks invoked while a truck is dispatched.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: return-time collector
///
/// ```rust,ignore
/// struct Returns(Vec<(TruckId, ClockTime)>);
///
/// impl DispatchObserver for Returns {
///     fn on_returned(&mut self, truck: TruckId, at: ClockTime, _miles: f64) {
///         self.0.push((truck, at));
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called once the route is fixed, before the truck leaves.
    fn on_routed(&mut self, _truck: TruckId, _route: &PlannedRoute) {}

    /// Called for every package delivered, in delivery order.
    fn on_delivered(&mut self, _truck: TruckId, _package: PackageId, _at: ClockTime) {}

    /// Called when the truck is back at the hub.  `miles` includes the
    /// return leg.
    fn on_returned(&mut self, _truck: TruckId, _at: ClockTime, _miles: f64) {}
}

/// A [`DispatchObserver`] that does nothing.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}

/// Writes a human-readable run summary through `tracing` at `INFO`.
#[derive(Default)]
pub struct LogObserver {
    delivered: usize,
}

impl DispatchObserver for LogObserver {
    fn on_routed(&mut self, truck: TruckId, route: &PlannedRoute) {
        self.delivered = 0;
        info!(%truck, stops = route.len(), distance = route.total_distance, "route planned");
    }

    fn on_delivered(&mut self, _truck: TruckId, _package: PackageId, _at: ClockTime) {
        self.delivered += 1;
    }

    fn on_returned(&mut self, truck: TruckId, at: ClockTime, miles: f64) {
        info!(%truck, returned_at = %at, miles, delivered = self.delivered, "truck back at hub");
    }
}
