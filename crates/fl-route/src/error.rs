//! Routing-subsystem error type.

use thiserror::Error;

use fl_core::{AddressIdx, ErrorKind};

/// Errors produced by `fl-route`.
#[derive(Debug, Error)]
pub enum RouteError {
    #[error("address {0:?} is not in the address table")]
    AddressNotFound(String),

    #[error("address {0:?} is listed more than once")]
    DuplicateAddress(String),

    #[error("distance row {row} has {len} cells but the table has {size} rows")]
    NotSquare { row: usize, len: usize, size: usize },

    #[error("no distance between {from} and {to} in either direction")]
    MissingDistance { from: AddressIdx, to: AddressIdx },

    #[error("distance {from}→{to} is {forward} but {to}→{from} is {backward}")]
    Asymmetric { from: AddressIdx, to: AddressIdx, forward: f64, backward: f64 },

    #[error("distance from {0} to itself is not zero")]
    NonZeroDiagonal(AddressIdx),

    #[error("distance {from}→{to} is invalid: {value}")]
    InvalidDistance { from: AddressIdx, to: AddressIdx, value: f64 },

    #[error("{index} is outside a distance table of size {size}")]
    IndexOutOfRange { index: AddressIdx, size: usize },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RouteError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            RouteError::AddressNotFound(_) => ErrorKind::LookupMiss,
            _ => ErrorKind::Configuration,
        }
    }
}

pub type RouteResult<T> = Result<T, RouteError>;
