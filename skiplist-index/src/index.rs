//! Index façade (C5)
//!
//! Adapts [`SkipList`] to the database's generic secondary-index contract.
//! Every method materializes a typed key, drives the core, and updates the
//! plain `AtomicU64` counters the storage engine already uses for its own
//! per-component statistics.

use crate::config::SkipListConfig;
use crate::keys::BytesKeyAdapter;
use crate::skiplist::SkipList;
use skiplist_core::{ItemPointer, Result, ScanDirection};
use std::ops::Bound;
use std::sync::atomic::{AtomicU64, Ordering};

/// The database-facing secondary-index contract
///
/// Object-safe: the instantiation registry (C6) hands callers a
/// `Box<dyn Index>` without exposing which key family backs it. Keys cross
/// this boundary pre-encoded as bytes; callers holding a typed key can use
/// the concrete [`SkipListIndex`] directly instead.
pub trait Index: Send + Sync {
    fn insert_entry(&self, key: &[u8], value: ItemPointer) -> bool;
    fn delete_entry(&self, key: &[u8], value: ItemPointer) -> bool;
    fn cond_insert_entry(&self, key: &[u8], value: ItemPointer, predicate: &dyn Fn(Option<ItemPointer>) -> bool) -> bool;
    fn scan_key(&self, key: &[u8]) -> Vec<ItemPointer>;
    #[allow(clippy::too_many_arguments)]
    fn scan(
        &self,
        low: Bound<&[u8]>,
        high: Bound<&[u8]>,
        direction: ScanDirection,
        predicate: &dyn Fn(ItemPointer) -> bool,
    ) -> Vec<ItemPointer>;
    #[allow(clippy::too_many_arguments)]
    fn scan_limit(
        &self,
        low: Bound<&[u8]>,
        high: Bound<&[u8]>,
        direction: ScanDirection,
        predicate: &dyn Fn(ItemPointer) -> bool,
        limit: usize,
        offset: usize,
    ) -> Vec<ItemPointer>;
    fn scan_all_keys(&self) -> Vec<ItemPointer>;
    fn type_name(&self) -> &'static str;

    fn inserts_observed(&self) -> u64;
    fn deletes_observed(&self) -> u64;
    fn reads_observed(&self) -> u64;
}

/// Per-operation counters, mirroring the storage engine's statistics style
#[derive(Debug, Default)]
struct IndexStats {
    inserts: AtomicU64,
    deletes: AtomicU64,
    reads: AtomicU64,
}

/// The skip-list backed implementation of [`Index`] for one key family `K`
pub struct SkipListIndex<K: BytesKeyAdapter> {
    list: SkipList<K>,
    unique_keys: bool,
    stats: IndexStats,
}

impl<K: BytesKeyAdapter> SkipListIndex<K> {
    pub fn new(config: SkipListConfig) -> Result<Self> {
        let unique_keys = config.unique_keys;
        Ok(Self {
            list: SkipList::new(config)?,
            unique_keys,
            stats: IndexStats::default(),
        })
    }

    /// Number of live entries currently held by the underlying skip list
    pub fn len(&self) -> usize {
        self.list.len()
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Insert using an already-typed key, bypassing the bytes boundary
    pub fn insert_entry_typed(&self, key: K, value: ItemPointer) -> bool {
        log::trace!("insert_entry key={key:?} value={value}");
        let inserted = self.list.insert(key, value, self.unique_keys).unwrap_or(false);
        self.stats.inserts.fetch_add(1, Ordering::Relaxed);
        inserted
    }

    pub fn delete_entry_typed(&self, key: &K, value: ItemPointer) -> bool {
        log::trace!("delete_entry key={key:?} value={value}");
        let deleted = self.list.delete(key, value);
        self.stats.deletes.fetch_add(1, Ordering::Relaxed);
        deleted
    }

    pub fn cond_insert_entry_typed(
        &self,
        key: K,
        value: ItemPointer,
        predicate: impl Fn(Option<ItemPointer>) -> bool,
    ) -> bool {
        let current = self.list.search(&key);
        if !predicate(current.into_iter().next()) {
            return false;
        }
        self.insert_entry_typed(key, value)
    }

    pub fn scan_key_typed(&self, key: &K) -> Vec<ItemPointer> {
        self.stats.reads.fetch_add(1, Ordering::Relaxed);
        self.list.search(key)
    }

    pub fn scan_typed(
        &self,
        low: Bound<K>,
        high: Bound<K>,
        direction: ScanDirection,
        predicate: impl Fn(&K, ItemPointer) -> bool,
    ) -> Vec<ItemPointer> {
        self.stats.reads.fetch_add(1, Ordering::Relaxed);
        self.list.scan(low, high, direction, predicate, None, 0)
    }

    pub fn scan_limit_typed(
        &self,
        low: Bound<K>,
        high: Bound<K>,
        direction: ScanDirection,
        predicate: impl Fn(&K, ItemPointer) -> bool,
        limit: usize,
        offset: usize,
    ) -> Vec<ItemPointer> {
        self.stats.reads.fetch_add(1, Ordering::Relaxed);
        self.list.scan(low, high, direction, predicate, Some(limit), offset)
    }

    pub fn scan_all_keys_typed(&self) -> Vec<ItemPointer> {
        self.stats.reads.fetch_add(1, Ordering::Relaxed);
        self.list
            .scan(Bound::Unbounded, Bound::Unbounded, ScanDirection::Forward, |_, _| true, None, 0)
    }
}

fn materialize_bound<K: BytesKeyAdapter>(bound: Bound<&[u8]>) -> Bound<K> {
    match bound {
        Bound::Included(b) => Bound::Included(K::from_bytes(b)),
        Bound::Excluded(b) => Bound::Excluded(K::from_bytes(b)),
        Bound::Unbounded => Bound::Unbounded,
    }
}

impl<K: BytesKeyAdapter> Index for SkipListIndex<K> {
    fn insert_entry(&self, key: &[u8], value: ItemPointer) -> bool {
        self.insert_entry_typed(K::from_bytes(key), value)
    }

    fn delete_entry(&self, key: &[u8], value: ItemPointer) -> bool {
        self.delete_entry_typed(&K::from_bytes(key), value)
    }

    fn cond_insert_entry(&self, key: &[u8], value: ItemPointer, predicate: &dyn Fn(Option<ItemPointer>) -> bool) -> bool {
        self.cond_insert_entry_typed(K::from_bytes(key), value, predicate)
    }

    fn scan_key(&self, key: &[u8]) -> Vec<ItemPointer> {
        self.scan_key_typed(&K::from_bytes(key))
    }

    fn scan(
        &self,
        low: Bound<&[u8]>,
        high: Bound<&[u8]>,
        direction: ScanDirection,
        predicate: &dyn Fn(ItemPointer) -> bool,
    ) -> Vec<ItemPointer> {
        self.scan_typed(materialize_bound(low), materialize_bound(high), direction, |_, v| predicate(v))
    }

    fn scan_limit(
        &self,
        low: Bound<&[u8]>,
        high: Bound<&[u8]>,
        direction: ScanDirection,
        predicate: &dyn Fn(ItemPointer) -> bool,
        limit: usize,
        offset: usize,
    ) -> Vec<ItemPointer> {
        self.scan_limit_typed(
            materialize_bound(low),
            materialize_bound(high),
            direction,
            |_, v| predicate(v),
            limit,
            offset,
        )
    }

    fn scan_all_keys(&self) -> Vec<ItemPointer> {
        self.scan_all_keys_typed()
    }

    fn type_name(&self) -> &'static str {
        "SkipList"
    }

    fn inserts_observed(&self) -> u64 {
        self.stats.inserts.load(Ordering::Relaxed)
    }

    fn deletes_observed(&self) -> u64 {
        self.stats.deletes.load(Ordering::Relaxed)
    }

    fn reads_observed(&self) -> u64 {
        self.stats.reads.load(Ordering::Relaxed)
    }
}
