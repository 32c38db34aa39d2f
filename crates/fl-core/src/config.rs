//! Run-wide configuration.
//!
//! Every constant the simulator depends on lives in [`FleetConfig`] so that
//! no logic carries magic literals.  `FleetConfig::default()` reproduces the
//! reference day; applications may override fields (e.g. from a JSON file
//! with the `serde` feature) and must call [`FleetConfig::validate`] before
//! using the result.

use crate::{ClockTime, FleetError, FleetResult};

/// Top-level simulation configuration.
///
/// Read-only after construction: the dispatcher and resolver only ever take
/// `&FleetConfig`.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FleetConfig {
    /// Truck speed in distance units per hour.  Default: 18.
    pub average_speed: f64,

    /// Address every truck departs from and returns to.
    pub depot_address: String,

    /// Until this time, packages whose note says the listed address is wrong
    /// display the placeholder address.  Default: 10:20.
    pub address_correction_time: ClockTime,

    /// Address displayed for a wrong-address package before correction.
    pub placeholder_address: String,

    /// Zip code displayed for a wrong-address package before correction.
    pub placeholder_zip: String,

    /// Arrival time of packages noted as delayed on a flight.  Default: 09:05.
    pub flight_delay_until: ClockTime,

    /// What an `EOD` deadline means.  Default: 17:00.
    pub end_of_day: ClockTime,

    /// Number of buckets in the package table.  Deliberately unrelated to
    /// the package count so collisions are exercised.  Default: 40.
    pub bucket_count: usize,
}

impl Default for FleetConfig {
    fn default() -> Self {
        Self {
            average_speed:           18.0,
            depot_address:           "4001 South 700 East".to_string(),
            address_correction_time: ClockTime::from_hms(10, 20, 0),
            placeholder_address:     "300 State St".to_string(),
            placeholder_zip:         "84103".to_string(),
            flight_delay_until:      ClockTime::from_hms(9, 5, 0),
            end_of_day:              ClockTime::from_hms(17, 0, 0),
            bucket_count:            40,
        }
    }
}

impl FleetConfig {
    /// Reject values the simulator cannot run with.
    pub fn validate(&self) -> FleetResult<()> {
        if !(self.average_speed.is_finite() && self.average_speed > 0.0) {
            return Err(FleetError::Config(format!(
                "average_speed must be positive, got {}",
                self.average_speed
            )));
        }
        if self.bucket_count == 0 {
            return Err(FleetError::Config("bucket_count must be > 0".into()));
        }
        if self.depot_address.trim().is_empty() {
            return Err(FleetError::Config("depot_address is empty".into()));
        }
        Ok(())
    }

    /// Hours needed to cover `distance` at `average_speed`.
    #[inline]
    pub fn travel_hours(&self, distance: f64) -> f64 {
        distance / self.average_speed
    }
}
