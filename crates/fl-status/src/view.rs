//! The displayed state of one package at one point in time.

use std::fmt;

use fl_core::{ClockTime, PackageId};
use fl_store::{Package, PackageStatus};

/// Everything shown for a package at a query time.
///
/// Address and zip are the *displayed* values: the placeholder while a
/// wrong-address package is still uncorrected, the true values otherwise.
#[derive(Clone, Debug, PartialEq)]
pub struct StatusView {
    pub package_id: PackageId,
    pub at:         ClockTime,
    pub status:     PackageStatus,
    pub address:    String,
    pub zip:        String,
    /// `true` when `address`/`zip` are the placeholder.
    pub masked:     bool,
    pub city:       String,
    pub state:      String,
    pub deadline:   String,
    pub weight:     f64,
}

impl StatusView {
    /// Write the displayed address, zip and status into `package`.
    ///
    /// This is the only place a query result mutates stored state.  Every
    /// later reader of the package sees the overwritten fields.
    pub fn apply_to(&self, package: &mut Package) {
        debug_assert_eq!(package.id(), self.package_id);
        package.set_displayed(&self.address, &self.zip, self.status);
    }
}

impl fmt::Display for StatusView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PACKAGE ID: {} | {} | DEADLINE IS AT {} | ADDRESS: {} | CITY: {} | STATE: {} | ZIP: {} | WEIGHT: {}kg",
            self.package_id.0,
            self.status,
            self.deadline,
            self.address,
            self.city,
            self.state,
            self.zip,
            self.weight,
        )
    }
}
