//! Simulation time model.
//!
//! # Design
//!
//! A run covers a single working day, so time is represented as a
//! `ClockTime`: microseconds since midnight in a `u64`.  Travel time is
//! derived from floating-point distances, and microsecond resolution keeps
//! the accumulated clock of a truck within rounding distance of the exact
//! value over dozens of legs.
//!
//! Recorded delivery timestamps are truncated to whole seconds
//! ([`ClockTime::truncate_secs`]) because that is the resolution they are
//! displayed and compared at.
//!
//! Times past midnight are not wrapped: a truck returning at 25:10 reports
//! `25:10:00`.

use std::fmt;

use crate::{FleetError, FleetResult};

const MICROS_PER_SEC: u64 = 1_000_000;
const MICROS_PER_MIN: u64 = 60 * MICROS_PER_SEC;
const MICROS_PER_HOUR: u64 = 60 * MICROS_PER_MIN;

// ── ClockTime ─────────────────────────────────────────────────────────────────

/// A time of day, in microseconds since midnight.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
pub struct ClockTime(u64);

impl ClockTime {
    pub const MIDNIGHT: ClockTime = ClockTime(0);

    /// Build from hours, minutes and seconds.  No range check: `from_hms(25,
    /// 0, 0)` is one hour past the next midnight.
    #[inline]
    pub const fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        ClockTime(
            hours as u64 * MICROS_PER_HOUR
                + minutes as u64 * MICROS_PER_MIN
                + seconds as u64 * MICROS_PER_SEC,
        )
    }

    #[inline]
    pub const fn from_micros(micros: u64) -> Self {
        ClockTime(micros)
    }

    #[inline]
    pub const fn as_micros(self) -> u64 {
        self.0
    }

    #[inline]
    pub fn hour(self) -> u32 {
        (self.0 / MICROS_PER_HOUR) as u32
    }

    #[inline]
    pub fn minute(self) -> u32 {
        ((self.0 % MICROS_PER_HOUR) / MICROS_PER_MIN) as u32
    }

    #[inline]
    pub fn second(self) -> u32 {
        ((self.0 % MICROS_PER_MIN) / MICROS_PER_SEC) as u32
    }

    /// The time `hours` later.  Rounded to the nearest microsecond.
    ///
    /// Negative or non-finite inputs are treated as zero.
    pub fn after_hours(self, hours: f64) -> ClockTime {
        debug_assert!(hours.is_finite() && hours >= 0.0, "bad duration {hours}");
        if !hours.is_finite() || hours <= 0.0 {
            return self;
        }
        let micros = (hours * MICROS_PER_HOUR as f64).round() as u64;
        ClockTime(self.0 + micros)
    }

    /// Drop the sub-second part.
    #[inline]
    pub fn truncate_secs(self) -> ClockTime {
        ClockTime(self.0 - self.0 % MICROS_PER_SEC)
    }

    /// Format as `HH:MM` (seconds dropped).
    pub fn hm(self) -> String {
        format!("{:02}:{:02}", self.hour(), self.minute())
    }

    // ── Parsing ───────────────────────────────────────────────────────────

    /// Strict query format: exactly two digits, a colon, two digits, with
    /// `HH < 24` and `MM < 60`.
    ///
    /// This is the validation applied to user-supplied query times; anything
    /// else is a [`FleetError::InvalidTime`].
    pub fn parse_hm(s: &str) -> FleetResult<ClockTime> {
        let invalid = || FleetError::InvalidTime(s.to_string());
        let b = s.as_bytes();
        if b.len() != 5 || b[2] != b':' {
            return Err(invalid());
        }
        let hours = two_digits(&b[0..2]).ok_or_else(invalid)?;
        let minutes = two_digits(&b[3..5]).ok_or_else(invalid)?;
        if hours >= 24 || minutes >= 60 {
            return Err(invalid());
        }
        Ok(ClockTime::from_hms(hours, minutes, 0))
    }

    /// Lenient format used for configuration and data files: `H:MM`,
    /// `HH:MM` or `HH:MM:SS`, surrounding whitespace ignored.
    pub fn parse(s: &str) -> FleetResult<ClockTime> {
        let invalid = || FleetError::InvalidTime(s.to_string());
        let fields: Vec<&str> = s.trim().split(':').collect();

        let field = |i: usize, max: u32| -> Option<u32> {
            let f = fields[i];
            if f.is_empty() || f.len() > 2 || !f.bytes().all(|c| c.is_ascii_digit()) {
                return None;
            }
            f.parse::<u32>().ok().filter(|v| *v < max)
        };

        match fields.len() {
            2 => Ok(ClockTime::from_hms(
                field(0, 24).ok_or_else(invalid)?,
                field(1, 60).ok_or_else(invalid)?,
                0,
            )),
            3 => Ok(ClockTime::from_hms(
                field(0, 24).ok_or_else(invalid)?,
                field(1, 60).ok_or_else(invalid)?,
                field(2, 60).ok_or_else(invalid)?,
            )),
            _ => Err(invalid()),
        }
    }
}

fn two_digits(b: &[u8]) -> Option<u32> {
    match b {
        [h @ b'0'..=b'9', l @ b'0'..=b'9'] => Some(((h - b'0') * 10 + (l - b'0')) as u32),
        _ => None,
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour(), self.minute(), self.second())
    }
}

impl std::str::FromStr for ClockTime {
    type Err = FleetError;

    fn from_str(s: &str) -> FleetResult<ClockTime> {
        ClockTime::parse(s)
    }
}

// Config files carry times as "HH:MM" strings rather than raw microseconds.
#[cfg(feature = "serde")]
impl serde::Serialize for ClockTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ClockTime {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        ClockTime::parse(&s).map_err(serde::de::Error::custom)
    }
}
