use fl_core::{AddressIdx, ErrorKind, FleetError, PackageId, TruckId};
use fl_route::RouteError;
use fl_store::StoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("fleet configuration error: {0}")]
    Config(String),

    #[error("truck {0} is listed more than once")]
    DuplicateTruck(TruckId),

    #[error("truck {truck} is assigned package {package}, which is not in the package table")]
    UnknownPackage { truck: TruckId, package: PackageId },

    #[error("package {package} is assigned to {first} and again to {second}")]
    AlreadyAssigned { package: PackageId, first: TruckId, second: TruckId },

    #[error("package {0} is not assigned to any truck")]
    Unassigned(PackageId),

    #[error("package {package} has address {address:?}, which is not in the address table")]
    UnresolvedAddress { package: PackageId, address: String },

    #[error("{index} (address of package {package}) is outside the distance table")]
    AddressOutOfRange { package: PackageId, index: AddressIdx },

    #[error("truck {0} has already been dispatched")]
    AlreadyDispatched(TruckId),

    #[error("package {0} not found")]
    PackageNotFound(PackageId),

    #[error("truck {0} not found")]
    TruckNotFound(TruckId),

    #[error(transparent)]
    Core(#[from] FleetError),

    #[error(transparent)]
    Route(#[from] RouteError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl DispatchError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DispatchError::PackageNotFound(_) | DispatchError::TruckNotFound(_) => {
                ErrorKind::LookupMiss
            }
            DispatchError::Core(e)  => e.kind(),
            DispatchError::Route(e) => e.kind(),
            DispatchError::Store(e) => e.kind(),
            DispatchError::Config(_)
            | DispatchError::DuplicateTruck(_)
            | DispatchError::UnknownPackage { .. }
            | DispatchError::AlreadyAssigned { .. }
            | DispatchError::Unassigned(_)
            | DispatchError::UnresolvedAddress { .. }
            | DispatchError::AddressOutOfRange { .. }
            | DispatchError::AlreadyDispatched(_) => ErrorKind::Configuration,
        }
    }
}

pub type DispatchResult<T> = Result<T, DispatchError>;
