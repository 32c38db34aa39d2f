//! Package records: `PackageRecord` (input row), `Package` (stored state),
//! and `PackageStatus`.
//!
//! # Handling notes
//!
//! Free-text notes are parsed once, in [`Package::new`]:
//!
//! | Note contains            | `delay_until`                     | `address_unknown` |
//! |--------------------------|-----------------------------------|-------------------|
//! | `Delayed on flight`      | `config.flight_delay_until`       | `false`           |
//! | `Wrong address listed`   | `config.address_correction_time`  | `true`            |
//! | anything else            | `None`                            | `false`           |
//!
//! A wrong-address package is also held back until the correction time:
//! it cannot go out before its address is known.
//!
//! # Displayed fields
//!
//! Besides its immutable record, a package carries a displayed
//! address/zip/status triple.  It starts as the true address and `AtHub`.
//! [`Package::mark_delivered`] moves the status to `DeliveredAt`; otherwise
//! the triple is only rewritten by [`Package::set_displayed`], which the
//! query layer calls from one explicit "apply view" entry point.

use std::fmt;

use fl_core::{ClockTime, FleetConfig, PackageId};
use serde::Deserialize;

use crate::{StoreError, StoreResult};

const FLIGHT_DELAY_NOTE: &str = "Delayed on flight";
const WRONG_ADDRESS_NOTE: &str = "Wrong address listed";
const END_OF_DAY: &str = "EOD";

// ── PackageStatus ─────────────────────────────────────────────────────────────

/// Where a package is at a point in time, as shown to the user.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum PackageStatus {
    /// Waiting at the depot for its truck to leave.
    #[default]
    AtHub,
    /// Not available before the contained time.
    DelayedUntil(ClockTime),
    /// On a truck that has left the depot.
    OutForDelivery,
    /// Delivered at the contained time.
    DeliveredAt(ClockTime),
}

impl PackageStatus {
    pub fn is_delivered(self) -> bool {
        matches!(self, PackageStatus::DeliveredAt(_))
    }
}

impl fmt::Display for PackageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackageStatus::AtHub           => f.write_str("AT THE HUB"),
            PackageStatus::DelayedUntil(t) => write!(f, "DELAYED UNTIL {}", t.hm()),
            PackageStatus::OutForDelivery  => f.write_str("OUT FOR DELIVERY"),
            PackageStatus::DeliveredAt(t)  => write!(f, "DELIVERED AT {t}"),
        }
    }
}

// ── PackageRecord ─────────────────────────────────────────────────────────────

/// One package as it arrives from the external data source.
///
/// Field order matches the header-less package CSV.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct PackageRecord {
    pub id:       u32,
    pub address:  String,
    pub city:     String,
    pub state:    String,
    pub zip:      String,
    pub deadline: String,
    pub weight:   f64,
    #[serde(default)]
    pub notes:    String,
}

// ── Package ───────────────────────────────────────────────────────────────────

/// A stored package.
///
/// The record fields are immutable after construction (read them through
/// the accessors).  Only the delivery timestamp and the displayed triple
/// ever change.
#[derive(Clone, Debug, PartialEq)]
pub struct Package {
    id:       PackageId,
    address:  String,
    city:     String,
    state:    String,
    zip:      String,
    deadline: String,
    weight:   f64,
    notes:    String,

    /// Earliest time the package is no longer delayed.
    delay_until: Option<ClockTime>,

    /// The listed address is wrong until the configured correction time.
    address_unknown: bool,

    /// Set once by the dispatcher; never cleared.
    delivered_at: Option<ClockTime>,

    // ── Displayed state ───────────────────────────────────────────────────
    shown_address: String,
    shown_zip:     String,
    shown_status:  PackageStatus,
}

impl Package {
    /// Build a package from an input record, normalising the deadline and
    /// deriving the delay / wrong-address flags from its notes.
    pub fn new(record: PackageRecord, config: &FleetConfig) -> Self {
        let (delay_until, address_unknown) = if record.notes.contains(FLIGHT_DELAY_NOTE) {
            (Some(config.flight_delay_until), false)
        } else if record.notes.contains(WRONG_ADDRESS_NOTE) {
            (Some(config.address_correction_time), true)
        } else {
            (None, false)
        };

        let deadline = if record.deadline.trim() == END_OF_DAY {
            config.end_of_day.hm()
        } else {
            record.deadline
        };

        Self {
            id: PackageId(record.id),
            shown_address: record.address.clone(),
            shown_zip: record.zip.clone(),
            shown_status: PackageStatus::AtHub,
            address: record.address,
            city: record.city,
            state: record.state,
            zip: record.zip,
            deadline,
            weight: record.weight,
            notes: record.notes,
            delay_until,
            address_unknown,
            delivered_at: None,
        }
    }

    // ── Record accessors ──────────────────────────────────────────────────

    pub fn id(&self) -> PackageId { self.id }
    /// The true delivery address (what routing uses).
    pub fn address(&self) -> &str { &self.address }
    pub fn city(&self) -> &str { &self.city }
    pub fn state(&self) -> &str { &self.state }
    /// The true zip code.
    pub fn zip(&self) -> &str { &self.zip }
    pub fn deadline(&self) -> &str { &self.deadline }
    pub fn weight(&self) -> f64 { self.weight }
    pub fn notes(&self) -> &str { &self.notes }
    pub fn delay_until(&self) -> Option<ClockTime> { self.delay_until }
    pub fn address_unknown(&self) -> bool { self.address_unknown }

    // ── Delivery ──────────────────────────────────────────────────────────

    pub fn delivered_at(&self) -> Option<ClockTime> {
        self.delivered_at
    }

    pub fn is_delivered(&self) -> bool {
        self.delivered_at.is_some()
    }

    /// Record the delivery time and move the displayed status to
    /// `DeliveredAt(at)`.
    ///
    /// # Errors
    ///
    /// [`StoreError::AlreadyDelivered`] if a timestamp is already recorded;
    /// the existing timestamp is left untouched.
    pub fn mark_delivered(&mut self, at: ClockTime) -> StoreResult<()> {
        if let Some(prev) = self.delivered_at {
            return Err(StoreError::AlreadyDelivered { id: self.id, at: prev });
        }
        self.delivered_at = Some(at);
        self.shown_status = PackageStatus::DeliveredAt(at);
        Ok(())
    }

    // ── Displayed state ───────────────────────────────────────────────────

    pub fn shown_address(&self) -> &str { &self.shown_address }
    pub fn shown_zip(&self) -> &str { &self.shown_zip }
    pub fn shown_status(&self) -> PackageStatus { self.shown_status }

    /// Overwrite the displayed address, zip and status.
    ///
    /// This mutates state every later reader sees.  Call it only after all
    /// trucks have been dispatched.
    pub fn set_displayed(&mut self, address: &str, zip: &str, status: PackageStatus) {
        address.clone_into(&mut self.shown_address);
        zip.clone_into(&mut self.shown_zip);
        self.shown_status = status;
    }
}
