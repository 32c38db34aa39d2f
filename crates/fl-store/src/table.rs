//! `ChainedTable` - a fixed-bucket hash table keyed by `PackageId`.
//!
//! # Layout
//!
//! ```text
//! bucket = id mod bucket_count
//! buckets[bucket] = [(id, value), (id, value), …]   // collision chain
//! ```
//!
//! The bucket count is fixed at construction and never grows.  With the
//! default of 40 buckets and a few dozen packages most chains hold one or
//! two entries, so lookups are O(1) on average.  Ids that share a residue
//! land in the same chain and degrade to a linear scan: O(n) worst case.
//!
//! There is no removal.  Mutation needs `&mut self`; the table is `Send`
//! and `Sync` whenever `V` is, but callers sharing it across threads must
//! provide their own synchronisation for writers.

use fl_core::PackageId;

use crate::Package;

/// The package store used throughout the simulator.
pub type PackageTable = ChainedTable<Package>;

/// Separate-chaining hash table with `id mod bucket_count` bucketing.
#[derive(Clone, Debug)]
pub struct ChainedTable<V> {
    buckets: Vec<Vec<(PackageId, V)>>,
    /// Cached entry count for O(1) `len()`.
    len: usize,
}

impl<V> ChainedTable<V> {
    /// Create an empty table with `bucket_count` chains.
    ///
    /// # Panics
    ///
    /// Panics in debug mode if `bucket_count == 0`; release builds fall back
    /// to a single bucket.
    pub fn new(bucket_count: usize) -> Self {
        debug_assert!(bucket_count > 0, "bucket_count must be > 0");
        let bucket_count = bucket_count.max(1);
        Self {
            buckets: (0..bucket_count).map(|_| Vec::new()).collect(),
            len:     0,
        }
    }

    #[inline]
    fn bucket_of(&self, id: PackageId) -> usize {
        id.index() % self.buckets.len()
    }

    /// Insert `value` under `id`, replacing any existing entry.
    ///
    /// Returns the previous value if `id` was already present.  The entry
    /// keeps its position in the chain when replaced.
    pub fn insert(&mut self, id: PackageId, value: V) -> Option<V> {
        let b = self.bucket_of(id);
        let chain = &mut self.buckets[b];
        if let Some(slot) = chain.iter_mut().find(|(k, _)| *k == id) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        chain.push((id, value));
        self.len += 1;
        None
    }

    /// The value stored under `id`, if any.
    pub fn get(&self, id: PackageId) -> Option<&V> {
        self.buckets[self.bucket_of(id)]
            .iter()
            .find(|(k, _)| *k == id)
            .map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, id: PackageId) -> Option<&mut V> {
        let b = self.bucket_of(id);
        self.buckets[b]
            .iter_mut()
            .find(|(k, _)| *k == id)
            .map(|(_, v)| v)
    }

    #[inline]
    pub fn contains(&self, id: PackageId) -> bool {
        self.get(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Number of entries sharing `id`'s bucket (whether or not `id` itself
    /// is stored).
    pub fn chain_len(&self, id: PackageId) -> usize {
        self.buckets[self.bucket_of(id)].len()
    }

    /// All entries in bucket order, then insertion order within a chain.
    pub fn iter(&self) -> impl Iterator<Item = (PackageId, &V)> + '_ {
        self.buckets
            .iter()
            .flat_map(|chain| chain.iter().map(|(k, v)| (*k, v)))
    }

    /// All stored ids, ascending.
    pub fn ids(&self) -> Vec<PackageId> {
        let mut ids: Vec<PackageId> = self.iter().map(|(k, _)| k).collect();
        ids.sort_unstable();
        ids
    }
}
