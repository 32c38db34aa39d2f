use fl_core::{ClockTime, ErrorKind, PackageId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate package id {0}")]
    DuplicateId(PackageId),

    #[error("package {id} was already delivered at {at}")]
    AlreadyDelivered { id: PackageId, at: ClockTime },

    #[error("package parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    pub fn kind(&self) -> ErrorKind {
        // Every store failure comes from bad input data or a broken
        // single-delivery invariant.
        ErrorKind::Configuration
    }
}

pub type StoreResult<T> = Result<T, StoreError>;
