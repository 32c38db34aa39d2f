//! Package, truck and address identifiers.
//!
//! `PackageId` keys the chained package table; its bucket is
//! `id mod bucket_count`.  `AddressIdx` is a row/column of the distance
//! table.  Passing one where the other is expected is a type error, and
//! `.index()` turns either into a `Vec` offset.

use std::fmt;

/// Newtype over a `u32` with ordering, hashing and `usize` conversions.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$name> for usize {
            #[inline(always)]
            fn from(id: $name) -> usize {
                id.0 as usize
            }
        }

        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                <$inner>::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Primary key of a package.  Positive and unique across the population.
    pub struct PackageId(u32);
}

typed_id! {
    /// Identifier of a delivery truck.
    pub struct TruckId(u32);
}

typed_id! {
    /// Row/column of the distance table that an address resolves to.
    pub struct AddressIdx(u32);
}
