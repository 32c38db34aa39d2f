//! Unit tests for fl-status.

use fl_core::{ClockTime, FleetConfig};
use fl_store::{Package, PackageRecord, PackageStatus};

use crate::resolve_status;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn t(h: u32, m: u32) -> ClockTime {
    ClockTime::from_hms(h, m, 0)
}

fn package(notes: &str) -> Package {
    Package::new(
        PackageRecord {
            id:       9,
            address:  "410 S State St".into(),
            city:     "Salt Lake City".into(),
            state:    "UT".into(),
            zip:      "84111".into(),
            deadline: "EOD".into(),
            weight:   2.0,
            notes:    notes.into(),
        },
        &FleetConfig::default(),
    )
}

// ── Status precedence ─────────────────────────────────────────────────────────

#[cfg(test)]
mod precedence {
    use super::*;

    #[test]
    fn at_hub_before_dispatch() {
        let cfg = FleetConfig::default();
        let view = resolve_status(&package(""), t(7, 59), t(8, 0), &cfg);
        assert_eq!(view.status, PackageStatus::AtHub);
    }

    #[test]
    fn out_for_delivery_at_and_after_dispatch() {
        let cfg = FleetConfig::default();
        let p = package("");
        assert_eq!(resolve_status(&p, t(8, 0), t(8, 0), &cfg).status, PackageStatus::OutForDelivery);
        assert_eq!(resolve_status(&p, t(12, 0), t(8, 0), &cfg).status, PackageStatus::OutForDelivery);
    }

    #[test]
    fn delivered_from_timestamp_on() {
        let cfg = FleetConfig::default();
        let mut p = package("");
        let at = ClockTime::from_hms(8, 46, 20);
        p.mark_delivered(at).unwrap();

        assert_eq!(resolve_status(&p, t(8, 46), t(8, 0), &cfg).status, PackageStatus::OutForDelivery);
        assert_eq!(resolve_status(&p, t(8, 47), t(8, 0), &cfg).status, PackageStatus::DeliveredAt(at));
        assert_eq!(resolve_status(&p, t(23, 0), t(8, 0), &cfg).status, PackageStatus::DeliveredAt(at));
    }

    #[test]
    fn delivered_wins_over_every_other_rule() {
        // A truck dispatched later than the delivery stamp, plus a delay
        // still in force: the recorded delivery decides.
        let cfg = FleetConfig::default();
        let mut p = package("Delayed on flight---will not arrive to depot until 9:05 am");
        p.mark_delivered(t(8, 30)).unwrap();
        let view = resolve_status(&p, t(8, 45), t(10, 0), &cfg);
        assert_eq!(view.status, PackageStatus::DeliveredAt(t(8, 30)));
    }

    #[test]
    fn delay_scenario() {
        let cfg = FleetConfig::default();
        let p = package("Delayed on flight---will not arrive to depot until 9:05 am");
        assert_eq!(
            resolve_status(&p, t(8, 30), t(8, 0), &cfg).status,
            PackageStatus::DelayedUntil(t(9, 5))
        );
        assert_eq!(resolve_status(&p, t(9, 10), t(8, 0), &cfg).status, PackageStatus::OutForDelivery);
    }

    #[test]
    fn delay_beats_at_hub() {
        let cfg = FleetConfig::default();
        let p = package("Delayed on flight---will not arrive to depot until 9:05 am");
        assert_eq!(
            resolve_status(&p, t(7, 0), t(9, 5), &cfg).status,
            PackageStatus::DelayedUntil(t(9, 5))
        );
        // Delay expired but truck not gone yet.
        assert_eq!(resolve_status(&p, t(9, 5), t(10, 0), &cfg).status, PackageStatus::AtHub);
    }
}

// ── Address masking ───────────────────────────────────────────────────────────

#[cfg(test)]
mod masking {
    use super::*;

    #[test]
    fn placeholder_strictly_before_correction() {
        let cfg = FleetConfig::default();
        let p = package("Wrong address listed");

        let before = resolve_status(&p, t(10, 19), t(10, 20), &cfg);
        assert!(before.masked);
        assert_eq!(before.address, "300 State St");
        assert_eq!(before.zip, "84103");

        let at = resolve_status(&p, t(10, 20), t(10, 20), &cfg);
        assert!(!at.masked);
        assert_eq!(at.address, "410 S State St");
        assert_eq!(at.zip, "84111");
    }

    #[test]
    fn masking_independent_of_delivery() {
        let cfg = FleetConfig::default();
        let mut p = package("Wrong address listed");
        p.mark_delivered(t(9, 0)).unwrap();

        let view = resolve_status(&p, t(9, 30), t(8, 0), &cfg);
        assert_eq!(view.status, PackageStatus::DeliveredAt(t(9, 0)));
        assert_eq!(view.address, "300 State St");
    }

    #[test]
    fn wrong_address_package_delayed_until_correction() {
        let cfg = FleetConfig::default();
        let p = package("Wrong address listed");
        assert_eq!(
            resolve_status(&p, t(9, 0), t(8, 0), &cfg).status,
            PackageStatus::DelayedUntil(t(10, 20))
        );
    }

    #[test]
    fn plain_package_never_masked() {
        let cfg = FleetConfig::default();
        let view = resolve_status(&package(""), t(6, 0), t(8, 0), &cfg);
        assert!(!view.masked);
        assert_eq!(view.address, "410 S State St");
    }

    #[test]
    fn custom_placeholder_and_time() {
        let cfg = FleetConfig {
            address_correction_time: t(11, 0),
            placeholder_address:     "Unknown".into(),
            placeholder_zip:         "00000".into(),
            ..FleetConfig::default()
        };
        let p = Package::new(
            PackageRecord {
                id:       1,
                address:  "1 Real Rd".into(),
                city:     "X".into(),
                state:    "UT".into(),
                zip:      "11111".into(),
                deadline: "EOD".into(),
                weight:   1.0,
                notes:    "Wrong address listed".into(),
            },
            &cfg,
        );
        let view = resolve_status(&p, t(10, 30), t(8, 0), &cfg);
        assert_eq!((view.address.as_str(), view.zip.as_str()), ("Unknown", "00000"));
    }
}

// ── Purity and explicit write-back ────────────────────────────────────────────

#[cfg(test)]
mod apply {
    use super::*;

    #[test]
    fn resolve_does_not_mutate() {
        let cfg = FleetConfig::default();
        let p = package("Wrong address listed");
        let before = p.clone();
        let _ = resolve_status(&p, t(9, 0), t(8, 0), &cfg);
        assert_eq!(p, before);
    }

    #[test]
    fn apply_to_overwrites_displayed_fields_only() {
        let cfg = FleetConfig::default();
        let mut p = package("Wrong address listed");
        let view = resolve_status(&p, t(9, 0), t(8, 0), &cfg);
        view.apply_to(&mut p);

        assert_eq!(p.shown_address(), "300 State St");
        assert_eq!(p.shown_zip(), "84103");
        assert_eq!(p.shown_status(), PackageStatus::DelayedUntil(t(10, 20)));
        assert_eq!(p.address(), "410 S State St");

        // A later query restores the true address in the displayed fields.
        resolve_status(&p, t(11, 0), t(8, 0), &cfg).apply_to(&mut p);
        assert_eq!(p.shown_address(), "410 S State St");
        assert_eq!(p.shown_zip(), "84111");
    }

    #[test]
    fn display_line() {
        let cfg = FleetConfig::default();
        let mut p = package("");
        p.mark_delivered(ClockTime::from_hms(10, 12, 33)).unwrap();
        let line = resolve_status(&p, t(12, 0), t(8, 0), &cfg).to_string();
        assert_eq!(
            line,
            "PACKAGE ID: 9 | DELIVERED AT 10:12:33 | DEADLINE IS AT 17:00 | ADDRESS: 410 S State St \
             | CITY: Salt Lake City | STATE: UT | ZIP: 84111 | WEIGHT: 2kg"
        );
    }
}
