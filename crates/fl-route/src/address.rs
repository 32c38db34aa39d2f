//! Address index: address string → distance-table row.

use fl_core::AddressIdx;

use crate::{RouteError, RouteResult};

#[cfg(feature = "fx-hash")]
type AddressMap = rustc_hash::FxHashMap<String, AddressIdx>;
#[cfg(not(feature = "fx-hash"))]
type AddressMap = std::collections::HashMap<String, AddressIdx>;

/// One row of the address table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AddressEntry {
    pub index:   AddressIdx,
    /// Human-readable place name (e.g. the business at the address).
    pub label:   String,
    pub address: String,
}

/// Maps street addresses to distance-table indices.
///
/// Keys are compared after trimming surrounding whitespace; otherwise the
/// match is exact.
#[derive(Clone, Debug, Default)]
pub struct AddressBook {
    by_address: AddressMap,
    entries:    Vec<AddressEntry>,
}

impl AddressBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `address` at `index`.
    ///
    /// # Errors
    ///
    /// [`RouteError::DuplicateAddress`] if the address is already present.
    pub fn insert(&mut self, index: AddressIdx, label: &str, address: &str) -> RouteResult<()> {
        let key = address.trim();
        if self.by_address.contains_key(key) {
            return Err(RouteError::DuplicateAddress(key.to_string()));
        }
        self.by_address.insert(key.to_string(), index);
        self.entries.push(AddressEntry {
            index,
            label:   label.trim().to_string(),
            address: key.to_string(),
        });
        Ok(())
    }

    /// The index for `address`, if known.
    #[inline]
    pub fn resolve(&self, address: &str) -> Option<AddressIdx> {
        self.by_address.get(address.trim()).copied()
    }

    /// Like [`resolve`](Self::resolve) but reports an unknown address as an
    /// error.
    pub fn require(&self, address: &str) -> RouteResult<AddressIdx> {
        self.resolve(address)
            .ok_or_else(|| RouteError::AddressNotFound(address.trim().to_string()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All rows in insertion order.
    pub fn entries(&self) -> &[AddressEntry] {
        &self.entries
    }
}
