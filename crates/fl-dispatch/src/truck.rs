//! `Truck` - one vehicle and its one-shot dispatch state.

use std::fmt;

use fl_core::{ClockTime, PackageId, TruckId};

/// Where a truck is in its single delivery run.
///
/// ```text
/// NotDispatched ──► Routed ──► Delivering ──► ReturnedToHub
/// ```
///
/// Transitions only go forward and a run is not restartable.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DispatchPhase {
    #[default]
    NotDispatched,
    Routed,
    Delivering,
    ReturnedToHub,
}

impl fmt::Display for DispatchPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            DispatchPhase::NotDispatched => "not dispatched",
            DispatchPhase::Routed        => "routed",
            DispatchPhase::Delivering    => "delivering",
            DispatchPhase::ReturnedToHub => "returned to hub",
        })
    }
}

/// A delivery truck.
///
/// Holds package *ids* only; the packages themselves stay in the
/// `PackageTable`.  The id list is reordered once, to route order, when the
/// truck is dispatched.
#[derive(Clone, Debug, PartialEq)]
pub struct Truck {
    id:            TruckId,
    dispatch_time: ClockTime,
    packages:      Vec<PackageId>,
    miles:         f64,
    clock:         ClockTime,
    phase:         DispatchPhase,
}

impl Truck {
    pub fn new(id: TruckId, packages: Vec<PackageId>, dispatch_time: ClockTime) -> Self {
        Self {
            id,
            dispatch_time,
            packages,
            miles: 0.0,
            clock: dispatch_time,
            phase: DispatchPhase::NotDispatched,
        }
    }

    pub fn id(&self) -> TruckId { self.id }
    pub fn dispatch_time(&self) -> ClockTime { self.dispatch_time }
    /// Assigned package ids: input order before dispatch, route order after.
    pub fn packages(&self) -> &[PackageId] { &self.packages }
    /// Distance covered so far, return leg included once back at the hub.
    pub fn miles(&self) -> f64 { self.miles }
    /// Simulated time of the truck.  Equals the dispatch time until the run
    /// starts and the return time once it is over.
    pub fn clock(&self) -> ClockTime { self.clock }
    pub fn phase(&self) -> DispatchPhase { self.phase }

    /// The time the truck got back to the hub, once it has.
    pub fn returned_at(&self) -> Option<ClockTime> {
        (self.phase == DispatchPhase::ReturnedToHub).then_some(self.clock)
    }

    // ── Dispatch transitions (crate-internal) ─────────────────────────────

    pub(crate) fn set_routed(&mut self, ordered: Vec<PackageId>, distance: f64) {
        debug_assert_eq!(self.phase, DispatchPhase::NotDispatched);
        self.packages = ordered;
        self.miles += distance;
        self.phase = DispatchPhase::Routed;
    }

    pub(crate) fn start_delivering(&mut self) {
        debug_assert_eq!(self.phase, DispatchPhase::Routed);
        self.phase = DispatchPhase::Delivering;
    }

    /// Advance the clock by the time needed to cover `hours` of driving.
    pub(crate) fn drive(&mut self, hours: f64) {
        self.clock = self.clock.after_hours(hours);
    }

    pub(crate) fn return_to_hub(&mut self, distance: f64, hours: f64) {
        debug_assert_eq!(self.phase, DispatchPhase::Delivering);
        self.miles += distance;
        self.drive(hours);
        self.phase = DispatchPhase::ReturnedToHub;
    }
}
