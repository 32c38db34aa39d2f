//! `fl-dispatch` - truck dispatch and status queries for the rust_fleet
//! simulator.
//!
//! # One truck, one run
//!
//! ```text
//! NotDispatched
//!   ① Plan     - resolve each package's address, build the route with the
//!                RoutePlanner, order package ids to match the stops
//!                (read-only; parallel across trucks with `parallel`).
//!   ② Routed   - route distance added to the truck's miles.
//!   ③ Deliver  - per stop: clock += distance / average_speed, then stamp
//!                the first undelivered package at that address.
//!   ④ Return   - drive back to the depot; clock and miles updated.
//! ReturnedToHub
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | Runs the planning phase of `dispatch_all` on Rayon.     |
//! | `fx-hash`  | FxHash for the address index (forwards to `fl-route`).  |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use fl_core::{ClockTime, FleetConfig, PackageId, TruckId};
//! use fl_dispatch::{FleetBuilder, LogObserver};
//!
//! let mut fleet = FleetBuilder::new(config, packages, oracle)
//!     .truck(TruckId(1), vec![PackageId(1), PackageId(2)], ClockTime::from_hms(8, 0, 0))
//!     .build()?;
//! fleet.dispatch_all(&mut LogObserver::default())?;
//! println!("{}", fleet.query_one(PackageId(1), "09:00")?);
//! ```

pub mod builder;
pub mod error;
pub mod fleet;
pub mod observer;
pub mod plan;
pub mod query;
pub mod truck;


pub use builder::FleetBuilder;
pub use error::{DispatchError, DispatchResult};
pub use fleet::Fleet;
pub use observer::{DispatchObserver, LogObserver, NoopObserver};
pub use plan::{DeliveryPlan, plan_delivery};
pub use query::{StatusReport, TruckReport};
pub use truck::{DispatchPhase, Truck};
