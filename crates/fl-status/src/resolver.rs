//! Status resolution.
//!
//! Rules are evaluated in order; the first that matches decides the status:
//!
//! | # | Condition                                   | Status              |
//! |---|---------------------------------------------|---------------------|
//! | 1 | delivered at `t` and `at >= t`              | `DeliveredAt(t)`    |
//! | 2 | delayed until `d` and `at < d`              | `DelayedUntil(d)`   |
//! | 3 | `at < dispatch_time`                        | `AtHub`             |
//! | 4 | otherwise                                   | `OutForDelivery`    |
//!
//! Address masking is decided independently of the status: a package whose
//! listed address is wrong shows the placeholder address and zip strictly
//! before `config.address_correction_time`, even if it is already
//! delivered.

use fl_core::{ClockTime, FleetConfig};
use fl_store::{Package, PackageStatus};

use crate::StatusView;

/// Resolve what `package` looks like at `at`, given that its truck leaves
/// the depot at `dispatch_time`.
///
/// Pure: reads the package, never writes it.
pub fn resolve_status(
    package:       &Package,
    at:            ClockTime,
    dispatch_time: ClockTime,
    config:        &FleetConfig,
) -> StatusView {
    let masked = package.address_unknown() && at < config.address_correction_time;
    let (address, zip) = if masked {
        (config.placeholder_address.as_str(), config.placeholder_zip.as_str())
    } else {
        (package.address(), package.zip())
    };

    let status = match (package.delivered_at(), package.delay_until()) {
        (Some(t), _) if at >= t => PackageStatus::DeliveredAt(t),
        (_, Some(d)) if at < d => PackageStatus::DelayedUntil(d),
        _ if at < dispatch_time => PackageStatus::AtHub,
        _ => PackageStatus::OutForDelivery,
    };

    StatusView {
        package_id: package.id(),
        at,
        status,
        address:    address.to_string(),
        zip:        zip.to_string(),
        masked,
        city:       package.city().to_string(),
        state:      package.state().to_string(),
        deadline:   package.deadline().to_string(),
        weight:     package.weight(),
    }
}
