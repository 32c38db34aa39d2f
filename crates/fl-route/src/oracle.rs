//! `DistanceOracle` - distance lookup and greedy route construction.
//!
//! # Nearest-neighbor heuristic
//!
//! [`DistanceOracle::build_route`] is the classic greedy tour builder:
//!
//! ```text
//! current = start
//! while required is not empty:
//!     next  = closest element of required to current  (first seen wins ties)
//!     route.push(next); total += d(current, next)
//!     remove one occurrence of next from required
//!     current = next
//! ```
//!
//! It runs in O(n²) and does **not** produce a minimum-distance tour.  The
//! exact choices (strict `<`, scan in input order, duplicates kept) are part
//! of the observable behavior: delivery times downstream depend on them.
//!
//! Duplicated indices are visited as separate stops.  The second occurrence
//! is always picked right after the first because it is at distance zero.

use fl_core::AddressIdx;

use crate::{AddressBook, DistanceTable, RouteError, RouteResult};

// ── PlannedRoute ──────────────────────────────────────────────────────────────

/// The result of route planning: stops in visiting order and the distance
/// covered from the start to the last stop (return leg excluded).
#[derive(Debug, Clone, PartialEq)]
pub struct PlannedRoute {
    pub stops:          Vec<AddressIdx>,
    pub total_distance: f64,
}

impl PlannedRoute {
    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    /// `(from, to)` pairs for every leg, starting at `start`.
    pub fn legs(&self, start: AddressIdx) -> impl Iterator<Item = (AddressIdx, AddressIdx)> + '_ {
        std::iter::once(start)
            .chain(self.stops.iter().copied())
            .zip(self.stops.iter().copied())
    }

    /// The last stop, or `start` if the route is empty.
    pub fn end(&self, start: AddressIdx) -> AddressIdx {
        self.stops.last().copied().unwrap_or(start)
    }
}

// ── DistanceOracle ────────────────────────────────────────────────────────────

/// Read-only pairing of a [`DistanceTable`] and the [`AddressBook`] that
/// indexes it.
///
/// Immutable once built, so it can be shared by reference across threads.
#[derive(Clone, Debug)]
pub struct DistanceOracle {
    table: DistanceTable,
    book:  AddressBook,
}

impl DistanceOracle {
    /// Pair a table with its address book.
    ///
    /// # Errors
    ///
    /// [`RouteError::IndexOutOfRange`] if any address maps outside the table.
    pub fn new(table: DistanceTable, book: AddressBook) -> RouteResult<Self> {
        for entry in book.entries() {
            if entry.index.index() >= table.size() {
                return Err(RouteError::IndexOutOfRange { index: entry.index, size: table.size() });
            }
        }
        Ok(Self { table, book })
    }

    pub fn table(&self) -> &DistanceTable {
        &self.table
    }

    pub fn addresses(&self) -> &AddressBook {
        &self.book
    }

    #[inline]
    pub fn resolve(&self, address: &str) -> Option<AddressIdx> {
        self.book.resolve(address)
    }

    #[inline]
    pub fn require(&self, address: &str) -> RouteResult<AddressIdx> {
        self.book.require(address)
    }

    /// Direct table lookup.  Indices must be valid (see
    /// [`DistanceTable::get`]).
    #[inline]
    pub fn distance(&self, from: AddressIdx, to: AddressIdx) -> f64 {
        self.table.get(from, to)
    }

    /// The candidate closest to `current` and its distance.
    ///
    /// Linear scan with strict `<`: of several equidistant candidates the
    /// earliest in `candidates` wins.  Returns `(None, f64::INFINITY)` for an
    /// empty slice.
    pub fn nearest_unvisited(
        &self,
        current:    AddressIdx,
        candidates: &[AddressIdx],
    ) -> (Option<AddressIdx>, f64) {
        match self.nearest_position(current, candidates) {
            Some((pos, d)) => (Some(candidates[pos]), d),
            None => (None, f64::INFINITY),
        }
    }

    /// Greedy nearest-neighbor route from `start` through every element of
    /// `required` (duplicates included).  See the module docs.
    pub fn build_route(&self, start: AddressIdx, required: &[AddressIdx]) -> PlannedRoute {
        let mut unvisited: Vec<AddressIdx> = required.to_vec();
        let mut stops = Vec::with_capacity(unvisited.len());
        let mut total_distance = 0.0;
        let mut current = start;

        while let Some((pos, d)) = self.nearest_position(current, &unvisited) {
            // `pos` is the first occurrence of the chosen index, so this
            // removes exactly one copy of it.
            let next = unvisited.remove(pos);
            stops.push(next);
            total_distance += d;
            current = next;
        }

        PlannedRoute { stops, total_distance }
    }

    fn nearest_position(&self, current: AddressIdx, candidates: &[AddressIdx]) -> Option<(usize, f64)> {
        let mut best: Option<(usize, f64)> = None;
        let mut shortest = f64::INFINITY;
        for (pos, &candidate) in candidates.iter().enumerate() {
            let d = self.distance(current, candidate);
            if d < shortest {
                shortest = d;
                best = Some((pos, d));
            }
        }
        best
    }
}
