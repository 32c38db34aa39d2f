//! Pairwise distance table.
//!
//! # Data layout
//!
//! A dense row-major `Vec<f64>` of `size * size` cells; the distance from
//! `i` to `j` is `cells[i * size + j]`.  Lookups are a single index
//! computation, which matters because route planning is O(n²) lookups.
//!
//! # Invariants (checked on construction)
//!
//! - square, one row per address index;
//! - every cell finite and non-negative;
//! - zero diagonal;
//! - symmetric: `d[i][j] == d[j][i]`.
//!
//! Source data often stores only the lower triangle; [`DistanceTable::from_partial_rows`]
//! fills a missing cell from its mirror.

use fl_core::AddressIdx;

use crate::{RouteError, RouteResult};

/// A validated symmetric distance matrix.
#[derive(Clone, Debug, PartialEq)]
pub struct DistanceTable {
    size:  usize,
    cells: Vec<f64>,
}

impl DistanceTable {
    /// Build from complete rows.  `rows.len()` defines the table size.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> RouteResult<Self> {
        let partial = rows
            .into_iter()
            .map(|row| row.into_iter().map(Some).collect())
            .collect();
        Self::from_partial_rows(partial)
    }

    /// Build from rows that may be short or contain gaps.
    ///
    /// A missing cell (`None`, or beyond the end of a short row) takes the
    /// value of its mirror cell.  A missing diagonal cell is zero.
    ///
    /// # Errors
    ///
    /// - [`RouteError::NotSquare`] if a row is longer than the row count.
    /// - [`RouteError::MissingDistance`] if both `d[i][j]` and `d[j][i]` are
    ///   missing.
    /// - [`RouteError::Asymmetric`], [`RouteError::NonZeroDiagonal`],
    ///   [`RouteError::InvalidDistance`] for the invariant violations.
    pub fn from_partial_rows(rows: Vec<Vec<Option<f64>>>) -> RouteResult<Self> {
        let size = rows.len();
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() > size {
                return Err(RouteError::NotSquare { row, len: cells.len(), size });
            }
        }

        let at = |i: usize, j: usize| rows[i].get(j).copied().flatten();
        let idx = |i: usize| AddressIdx(i as u32);

        let mut cells = vec![0.0; size * size];
        for i in 0..size {
            for j in 0..size {
                let value = match (at(i, j), at(j, i)) {
                    (Some(a), Some(b)) if a != b => {
                        return Err(RouteError::Asymmetric {
                            from:     idx(i),
                            to:       idx(j),
                            forward:  a,
                            backward: b,
                        });
                    }
                    (Some(a), _) | (None, Some(a)) => a,
                    (None, None) if i == j => 0.0,
                    (None, None) => {
                        return Err(RouteError::MissingDistance { from: idx(i), to: idx(j) });
                    }
                };

                if !(value.is_finite() && value >= 0.0) {
                    return Err(RouteError::InvalidDistance { from: idx(i), to: idx(j), value });
                }
                if i == j && value != 0.0 {
                    return Err(RouteError::NonZeroDiagonal(idx(i)));
                }
                cells[i * size + j] = value;
            }
        }

        Ok(Self { size, cells })
    }

    /// Number of rows (= columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Distance from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is `>= size()`.  Indices come from an
    /// [`AddressBook`][crate::AddressBook] that was checked against this
    /// table when the oracle was built.
    #[inline]
    pub fn get(&self, from: AddressIdx, to: AddressIdx) -> f64 {
        assert!(from.index() < self.size && to.index() < self.size);
        self.cells[from.index() * self.size + to.index()]
    }
}
