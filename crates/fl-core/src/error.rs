//! Core error type and the workspace-wide error classification.
//!
//! Sub-crates define their own error enums (lookups included) and wrap
//! `FleetError` as one variant via `#[from]`.  Every error in the workspace
//! can be classified with an [`ErrorKind`], which is what callers use to
//! decide whether a failure aborts the run or is reported back to the user.

use thiserror::Error;

/// Coarse classification shared by every `fl-*` error type.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input data or an inconsistent assignment.  Fatal: the run
    /// is aborted and no partial state is exposed.
    Configuration,
    /// A package id or address that does not exist.  Recoverable; nothing
    /// was mutated.
    LookupMiss,
    /// A malformed query argument (e.g. a time string).  Recoverable;
    /// rejected before any lookup.
    Validation,
}

/// Errors raised by `fl-core` itself: bad query times and bad settings.
#[derive(Debug, Error)]
pub enum FleetError {
    #[error("invalid time {0:?}: expected HH:MM")]
    InvalidTime(String),

    #[error("configuration error: {0}")]
    Config(String),
}

impl FleetError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FleetError::InvalidTime(_) => ErrorKind::Validation,
            FleetError::Config(_) => ErrorKind::Configuration,
        }
    }
}

/// Shorthand result type for all `fl-*` crates.
pub type FleetResult<T> = Result<T, FleetError>;
