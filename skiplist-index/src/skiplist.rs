//! Skip-list core (C3)
//!
//! Structural invariants, level management, and atomic insert/delete/search
//! across levels. Every public method pins a `crossbeam::epoch::Guard` for
//! its duration and retires unlinked nodes through that epoch, so a node
//! freed here is never actually deallocated while another thread might
//! still be dereferencing it.

use crate::config::SkipListConfig;
use crate::context::ThreadContext;
use crate::keys::KeyAdapter;
use crate::node::Node;
use crossbeam::epoch::{self, Atomic, Guard, Owned, Shared};
use parking_lot::Mutex;
use rand::{rngs::StdRng, Rng, SeedableRng};
use skiplist_core::{ItemPointer, Result, ScanDirection};
use std::ops::Bound;
use std::sync::atomic::{AtomicUsize, Ordering};

/// A (predecessor, node) pair located during a level traversal
type PredAndNode<'g, K> = (Shared<'g, Node<K>>, Shared<'g, Node<K>>);

/// A concurrent, ordered, multi-level skip list mapping keys of one family
/// to [`ItemPointer`] values
///
/// # Thread Safety
///
/// All mutation goes through compare-and-swap; no lock is ever held across a
/// traversal. The only lock in the structure guards the RNG used to sample
/// tower heights, a narrow, uncontended critical section.
pub struct SkipList<K: KeyAdapter> {
    top: Atomic<Node<K>>,
    config: SkipListConfig,
    rng: Mutex<StdRng>,
    size: AtomicUsize,
}

impl<K: KeyAdapter> SkipList<K> {
    /// Builds an empty skip list with `config.initial_height` levels already
    /// published, so `get_top_level()` returns `initial_height - 1`.
    pub fn new(config: SkipListConfig) -> Result<Self> {
        config.validate()?;
        let guard = &epoch::pin();

        let nil0 = Owned::new(Node::nil()).into_shared(guard);
        let mut top = Owned::new(Node::min(0, Shared::null(), nil0)).into_shared(guard);
        for level in 1..config.initial_height {
            let nil = Owned::new(Node::nil()).into_shared(guard);
            top = Owned::new(Node::min(level, top, nil)).into_shared(guard);
        }

        Ok(Self {
            top: Atomic::from(top),
            config,
            rng: Mutex::new(StdRng::from_entropy()),
            size: AtomicUsize::new(0),
        })
    }

    /// Current height of the highest populated level
    pub fn get_top_level(&self) -> u32 {
        let guard = &epoch::pin();
        unsafe { self.top.load(Ordering::Acquire, guard).deref() }.level
    }

    /// Approximate number of live bottom entries
    pub fn len(&self) -> usize {
        self.size.load(Ordering::Relaxed)
    }

    /// Whether the skip list currently holds no live entries
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns every bottom-node value whose key equals `key`, in forward
    /// (insertion) order. Empty iff no matching, non-deleted entry exists.
    pub fn search(&self, key: &K) -> Vec<ItemPointer> {
        let guard = &epoch::pin();
        let min0 = self.go_to_level(0, guard);
        let start = self.find_lt(min0, key, guard);
        let mut cursor = unsafe { start.deref() }.next(guard);
        let mut out = Vec::new();
        loop {
            let node = unsafe { cursor.deref() };
            if node.is_nil() || node.key.as_ref() != Some(key) {
                break;
            }
            if !node.is_deleted() {
                out.push(node.value());
            }
            cursor = node.next(guard);
        }
        out
    }

    /// Inserts `(key, value)`. With `unique`, rejects an already-present key
    /// (`false`, no structural change). Returns `false` iff the bottom-level
    /// insert itself was abandoned after exhausting the retry budget; upper
    /// levels are best-effort and a truncated tower still returns `true`.
    pub fn insert(&self, key: K, value: ItemPointer, unique: bool) -> Result<bool> {
        let guard = &epoch::pin();
        let mut ctx = ThreadContext::new(key.clone());

        let min0 = self.go_to_level(0, guard);
        let bottom = match self.insert_bottom(min0, &mut ctx, value, unique, guard)? {
            Some(node) => node,
            None => return Ok(false),
        };
        self.size.fetch_add(1, Ordering::Relaxed);

        let height = self.random_height();
        let mut down_link = bottom;
        let mut tower = vec![bottom];
        for level in 1..=height {
            if level > self.get_top_level() {
                self.add_level(guard);
            }
            ctx.set_level_cursor(level);
            ctx.reset_retries();
            let key = ctx.key().clone();
            match self.insert_interior(level, &key, down_link, &mut ctx, guard) {
                Some(node) => {
                    down_link = node;
                    tower.push(node);
                }
                None => break, // retry budget exhausted: tower truncated here
            }
        }

        for node in &tower {
            let node_ref = unsafe { node.deref() };
            debug_assert!(node_ref.is_deletable(), "tower node published twice");
            node_ref.make_published();
        }
        Ok(true)
    }

    /// Locates the bottom node matching `(key, value)`, tombstones it, and
    /// unlinks its tower top-down. Returns `true` iff this call performed
    /// the tombstoning (idempotent: a repeat call returns `false`).
    pub fn delete(&self, key: &K, value: ItemPointer) -> bool {
        let guard = &epoch::pin();
        let min0 = self.go_to_level(0, guard);
        let start = self.find_lt(min0, key, guard);
        let mut cursor = unsafe { start.deref() }.next(guard);
        let mut target = None;
        loop {
            let node = unsafe { cursor.deref() };
            if node.is_nil() || node.key.as_ref() != Some(key) {
                break;
            }
            if node.value() == value {
                target = Some(cursor);
                break;
            }
            cursor = node.next(guard);
        }

        let target = match target {
            Some(t) => t,
            None => return false,
        };
        let target_ref = unsafe { target.deref() };

        // The matching insert call still owns this node until its whole
        // tower is linked; tombstoning and unlinking any earlier than that
        // would race it and orphan the interior nodes whose `down` points
        // here. The wait is bounded since the inserter always publishes,
        // even a tower truncated by its own retry budget.
        let mut wait_attempts = 0u32;
        while !target_ref.is_published() {
            wait_attempts += 1;
            if wait_attempts > self.config.max_insert_reattempts {
                log::warn!("delete proceeding on a still-publishing node after exhausting wait budget");
                break;
            }
            std::hint::spin_loop();
        }

        if !target_ref.make_deleted() {
            return false; // another thread already tombstoned it
        }
        self.size.fetch_sub(1, Ordering::Relaxed);
        self.unlink_tower(key, target, guard);
        true
    }

    /// Ordered forward walk between `low`/`high`, filtering through
    /// `predicate`. There is no backward chain to stream from directly, so
    /// `ScanDirection::Backward` materializes every match in the range and
    /// reverses it, applying `limit`/`offset` from that reversed (i.e. the
    /// true backward) end; `Forward` applies them during the walk itself
    /// and can stop as soon as the window is filled.
    #[allow(clippy::too_many_arguments)]
    pub fn scan(
        &self,
        low: Bound<K>,
        high: Bound<K>,
        direction: ScanDirection,
        mut predicate: impl FnMut(&K, ItemPointer) -> bool,
        limit: Option<usize>,
        offset: usize,
    ) -> Vec<ItemPointer> {
        let guard = &epoch::pin();
        let min0 = self.go_to_level(0, guard);

        let mut cursor = match &low {
            Bound::Unbounded => unsafe { min0.deref() }.next(guard),
            Bound::Included(k) => unsafe { self.find_lt(min0, k, guard).deref() }.next(guard),
            Bound::Excluded(k) => unsafe { self.find_le(min0, k, guard).deref() }.next(guard),
        };

        let mut out = Vec::new();
        let mut skipped = 0usize;
        loop {
            let node = unsafe { cursor.deref() };
            if node.is_nil() {
                break;
            }
            let key = node.key.as_ref().expect("bottom node always carries a key");
            let past_high = match &high {
                Bound::Unbounded => false,
                Bound::Included(k) => key > k,
                Bound::Excluded(k) => key >= k,
            };
            if past_high {
                break;
            }
            if !node.is_deleted() && predicate(key, node.value()) {
                match direction {
                    ScanDirection::Forward => {
                        if skipped < offset {
                            skipped += 1;
                        } else {
                            out.push(node.value());
                            if limit.is_some_and(|l| out.len() >= l) {
                                break;
                            }
                        }
                    }
                    // Offset/limit can't be applied until the true (reversed)
                    // order is known, so collect every match here instead.
                    ScanDirection::Backward => out.push(node.value()),
                }
            }
            cursor = node.next(guard);
        }

        if direction == ScanDirection::Backward {
            out.reverse();
            if offset > 0 {
                out.drain(..offset.min(out.len()));
            }
            if let Some(l) = limit {
                out.truncate(l);
            }
        }
        out
    }

    // -- internals ----------------------------------------------------

    fn random_height(&self) -> u32 {
        let mut rng = self.rng.lock();
        let mut height = 1;
        while height < self.config.max_level && rng.gen_bool(0.5) {
            height += 1;
        }
        height
    }

    /// Descends the min-sentinel spine from the top pointer to level `level`
    fn go_to_level<'g>(&self, level: u32, guard: &'g Guard) -> Shared<'g, Node<K>> {
        let mut node = self.top.load(Ordering::Acquire, guard);
        loop {
            let node_ref = unsafe { node.deref() };
            if node_ref.level == level {
                return node;
            }
            debug_assert!(
                node_ref.level > level,
                "descended past the requested level"
            );
            node = node_ref.down(guard);
        }
    }

    /// Allocates a new top level and publishes it via CAS; on a lost race
    /// the fresh sentinels are simply dropped (height is advisory).
    fn add_level(&self, guard: &Guard) -> bool {
        let cur_top = self.top.load(Ordering::Acquire, guard);
        let cur_top_ref = unsafe { cur_top.deref() };
        let new_level = cur_top_ref.level + 1;
        if new_level > self.config.max_level {
            return false;
        }

        let nil = Owned::new(Node::nil()).into_shared(guard);
        let min = Owned::new(Node::min(new_level, cur_top, nil));
        match self
            .top
            .compare_exchange(cur_top, min, Ordering::AcqRel, Ordering::Acquire, guard)
        {
            Ok(_) => {
                log::debug!("raised skip list to level {new_level}");
                true
            }
            Err(e) => {
                // Never published; safe to reclaim immediately rather than
                // deferring to the epoch collector.
                unsafe {
                    drop(nil.into_owned());
                }
                drop(e.new);
                false
            }
        }
    }

    /// Greatest predecessor `p` at the given level head with `p.key <= probe`
    fn find_le<'g>(&self, head: Shared<'g, Node<K>>, probe: &K, guard: &'g Guard) -> Shared<'g, Node<K>> {
        let mut pred = head;
        loop {
            let pred_ref = unsafe { pred.deref() };
            let next = pred_ref.next(guard);
            let next_ref = unsafe { next.deref() };
            let advance = !next_ref.is_nil()
                && next_ref
                    .key
                    .as_ref()
                    .expect("data node always carries a key")
                    <= probe;
            if advance {
                pred = next;
            } else {
                return pred;
            }
        }
    }

    /// Greatest predecessor `p` at the given level head with `p.key < probe`
    ///
    /// Used to locate the start of a run of duplicate keys: `find_le` lands
    /// on the *last* duplicate (so new inserts append in FIFO order), while
    /// callers that need to walk an entire equal-key run start here instead.
    fn find_lt<'g>(&self, head: Shared<'g, Node<K>>, probe: &K, guard: &'g Guard) -> Shared<'g, Node<K>> {
        let mut pred = head;
        loop {
            let pred_ref = unsafe { pred.deref() };
            let next = pred_ref.next(guard);
            let next_ref = unsafe { next.deref() };
            // next.key < probe  <=>  next does not already contain a key >= probe
            if !next_ref.contains_ge_key(probe) {
                pred = next;
            } else {
                return pred;
            }
        }
    }

    fn insert_bottom<'g>(
        &self,
        level0: Shared<'g, Node<K>>,
        ctx: &mut ThreadContext<K>,
        value: ItemPointer,
        unique: bool,
        guard: &'g Guard,
    ) -> Result<Option<Shared<'g, Node<K>>>> {
        loop {
            let pred = self.find_le(level0, ctx.key(), guard);
            let pred_ref = unsafe { pred.deref() };

            if unique && !pred_ref.is_min() && pred_ref.key.as_ref() == Some(ctx.key()) {
                return Ok(None);
            }

            let succ = pred_ref.next(guard);
            let new_node = Owned::new(Node::bottom(ctx.key().clone(), value, succ));
            match pred_ref.cas_next(succ, new_node, guard) {
                Ok(linked) => return Ok(Some(linked)),
                Err(_) => {
                    if !ctx.record_retry(self.config.max_insert_reattempts) {
                        log::warn!("insert retry budget exhausted at level 0");
                        return Ok(None);
                    }
                }
            }
        }
    }

    fn insert_interior<'g>(
        &self,
        level: u32,
        key: &K,
        down_link: Shared<'g, Node<K>>,
        ctx: &mut ThreadContext<K>,
        guard: &'g Guard,
    ) -> Option<Shared<'g, Node<K>>> {
        debug_assert_eq!(ctx.level_cursor(), level, "context out of sync with tower build");
        loop {
            let level_head = self.go_to_level(level, guard);
            let pred = self.find_le(level_head, key, guard);
            let pred_ref = unsafe { pred.deref() };
            let succ = pred_ref.next(guard);
            let new_node = Owned::new(Node::interior(key.clone(), down_link, succ));
            match pred_ref.cas_next(succ, new_node, guard) {
                Ok(linked) => return Some(linked),
                Err(_) => {
                    if !ctx.record_retry(self.config.max_insert_reattempts) {
                        log::warn!("insert retry budget exhausted at level {level}");
                        return None;
                    }
                }
            }
        }
    }

    /// Finds `(predecessor, node)` at `level` where `node.down` is exactly
    /// `down_target` (identity, not key equality — duplicates mean several
    /// nodes at a level can share a key but only one owns a given tower
    /// link).
    fn find_tower_node_at_level<'g>(
        &self,
        level: u32,
        key: &K,
        down_target: Shared<'g, Node<K>>,
        guard: &'g Guard,
    ) -> Option<PredAndNode<'g, K>> {
        let level_head = self.go_to_level(level, guard);
        let mut pred = self.find_lt(level_head, key, guard);
        loop {
            let node_shared = unsafe { pred.deref() }.next(guard);
            let node = unsafe { node_shared.deref() };
            if node.is_nil() || node.key.as_ref() != Some(key) {
                return None;
            }
            if node.down(guard) == down_target {
                return Some((pred, node_shared));
            }
            pred = node_shared;
        }
    }

    fn unlink_at_level(&self, level: u32, key: &K, target: Shared<'_, Node<K>>, guard: &Guard) -> bool {
        let mut attempts = 0u32;
        loop {
            let (pred, node) = match self.find_tower_node_at_level(level, key, target, guard) {
                Some(found) => found,
                None => return false, // already unlinked by a racing delete
            };
            let next = unsafe { node.deref() }.next(guard);
            let pred_ref = unsafe { pred.deref() };
            match pred_ref
                .forward
                .compare_exchange(node, next, Ordering::AcqRel, Ordering::Acquire, guard)
            {
                Ok(_) => {
                    unsafe { guard.defer_destroy(node) };
                    return true;
                }
                Err(_) => {
                    attempts += 1;
                    if attempts > self.config.max_insert_reattempts {
                        return false;
                    }
                }
            }
        }
    }

    fn unlink_bottom(&self, key: &K, target: Shared<'_, Node<K>>, guard: &Guard) {
        let mut attempts = 0u32;
        loop {
            let min0 = self.go_to_level(0, guard);
            let mut pred = self.find_lt(min0, key, guard);
            let found = loop {
                let node_shared = unsafe { pred.deref() }.next(guard);
                let node = unsafe { node_shared.deref() };
                if node.is_nil() || node.key.as_ref() != Some(key) {
                    break None;
                }
                if node_shared == target {
                    break Some(pred);
                }
                pred = node_shared;
            };
            let pred = match found {
                Some(p) => p,
                None => return, // already unlinked
            };
            let next = unsafe { target.deref() }.next(guard);
            let pred_ref = unsafe { pred.deref() };
            match pred_ref
                .forward
                .compare_exchange(target, next, Ordering::AcqRel, Ordering::Acquire, guard)
            {
                Ok(_) => {
                    unsafe { guard.defer_destroy(target) };
                    return;
                }
                Err(_) => {
                    attempts += 1;
                    if attempts > self.config.max_insert_reattempts {
                        return;
                    }
                }
            }
        }
    }

    /// Discovers a tombstoned bottom node's tower bottom-up (via down-link
    /// identity), then unlinks it top-down, per the node state machine.
    fn unlink_tower(&self, key: &K, bottom: Shared<'_, Node<K>>, guard: &Guard) {
        let mut tower = vec![bottom];
        let mut level = 1;
        while level <= self.get_top_level() {
            match self.find_tower_node_at_level(level, key, *tower.last().unwrap(), guard) {
                Some((_, node)) => {
                    tower.push(node);
                    level += 1;
                }
                None => break,
            }
        }

        for lvl in (1..tower.len() as u32).rev() {
            self.unlink_at_level(lvl, key, tower[lvl as usize], guard);
        }
        self.unlink_bottom(key, bottom, guard);
    }
}

// `assert_send_sync` style check left to the type system: `Atomic<Node<K>>`
// and `Mutex<StdRng>` are `Send + Sync` whenever `K: Send + Sync`, which
// `KeyAdapter` already requires, so `SkipList<K>` is `Send + Sync` for free.

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Generic;
    use proptest::prelude::*;
    use std::sync::Arc;
    use std::thread;

    fn list() -> SkipList<Generic<8>> {
        SkipList::new(SkipListConfig::default()).unwrap()
    }

    fn key(s: &[u8]) -> Generic<8> {
        Generic::<8>::new(s)
    }

    #[test]
    fn s1_empty_index() {
        let sl = list();
        assert!(sl.search(&key(b"42")).is_empty());
        assert!(!sl.delete(&key(b"42"), 1));
        assert_eq!(sl.get_top_level(), 9);
    }

    #[test]
    fn s2_ordered_walk_with_duplicates_across_keys() {
        let sl = list();
        sl.insert(key(b"10"), 100, false).unwrap();
        sl.insert(key(b"20"), 200, false).unwrap();
        sl.insert(key(b"15"), 150, false).unwrap();

        let all = sl.scan(Bound::Unbounded, Bound::Unbounded, ScanDirection::Forward, |_, _| true, None, 0);
        assert_eq!(all, vec![100, 150, 200]);
        assert_eq!(sl.search(&key(b"15")), vec![150]);
    }

    #[test]
    fn s3_unique_mode_rejects_duplicate() {
        let sl = list();
        assert!(sl.insert(key(b"7"), 1, true).unwrap());
        assert!(!sl.insert(key(b"7"), 2, true).unwrap());
        assert_eq!(sl.search(&key(b"7")), vec![1]);
    }

    #[test]
    fn s4_duplicate_mode_preserves_insertion_order() {
        let sl = list();
        sl.insert(key(b"5"), 1, false).unwrap();
        sl.insert(key(b"5"), 2, false).unwrap();
        assert_eq!(sl.search(&key(b"5")), vec![1, 2]);

        assert!(sl.delete(&key(b"5"), 1));
        assert_eq!(sl.search(&key(b"5")), vec![2]);
    }

    #[test]
    fn s5_concurrent_disjoint_inserts_yield_sorted_scan() {
        let sl = Arc::new(list());
        let mut handles = vec![];
        for t in 0..4u32 {
            let sl = sl.clone();
            handles.push(thread::spawn(move || {
                for i in 0..2_500u32 {
                    let n = t * 2_500 + i;
                    sl.insert(key(format!("{n:08}").as_bytes()), n as u64, false)
                        .unwrap();
                }
            }));
        }
        for h in handles {
            h.join().unwrap();
        }

        let all = sl.scan(Bound::Unbounded, Bound::Unbounded, ScanDirection::Forward, |_, _| true, None, 0);
        assert_eq!(all.len(), 10_000);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn s6_scan_during_concurrent_insert_is_monotone_subsequence() {
        let sl = Arc::new(list());
        let producer_sl = sl.clone();
        let producer = thread::spawn(move || {
            for i in 1..=1_000u32 {
                producer_sl
                    .insert(key(format!("{i:08}").as_bytes()), i as u64, false)
                    .unwrap();
            }
        });

        for _ in 0..50 {
            let values = sl.scan(Bound::Unbounded, Bound::Unbounded, ScanDirection::Forward, |_, _| true, None, 0);
            // Each individual scan must itself be sorted and a prefix of 1..1000.
            assert!(values.windows(2).all(|w| w[0] < w[1]));
            assert!(values.iter().enumerate().all(|(i, &v)| v == (i as u64) + 1));
        }
        producer.join().unwrap();
    }

    #[test]
    fn delete_is_idempotent() {
        let sl = list();
        sl.insert(key(b"9"), 1, false).unwrap();
        assert!(sl.delete(&key(b"9"), 1));
        assert!(!sl.delete(&key(b"9"), 1));
    }

    #[test]
    fn tower_is_consistent_after_many_inserts() {
        let sl = list();
        for i in 0..500u32 {
            sl.insert(key(format!("{i:08}").as_bytes()), i as u64, false)
                .unwrap();
        }
        assert_eq!(sl.len(), 500);
        let all = sl.scan(Bound::Unbounded, Bound::Unbounded, ScanDirection::Forward, |_, _| true, None, 0);
        assert_eq!(all.len(), 500);
        assert!(all.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn scan_limit_and_offset() {
        let sl = list();
        for i in 0..10u32 {
            sl.insert(key(format!("{i:08}").as_bytes()), i as u64, false)
                .unwrap();
        }
        let page = sl.scan(
            Bound::Unbounded,
            Bound::Unbounded,
            ScanDirection::Forward,
            |_, _| true,
            Some(3),
            2,
        );
        assert_eq!(page, vec![2, 3, 4]);
    }

    #[test]
    fn backward_scan_limit_and_offset_take_from_the_high_end() {
        let sl = list();
        for i in 1..=10u32 {
            sl.insert(key(format!("{i:08}").as_bytes()), i as u64, false)
                .unwrap();
        }

        let full_backward = sl.scan(Bound::Unbounded, Bound::Unbounded, ScanDirection::Backward, |_, _| true, None, 0);
        assert_eq!(full_backward, vec![10, 9, 8, 7, 6, 5, 4, 3, 2, 1]);

        let page = sl.scan(
            Bound::Unbounded,
            Bound::Unbounded,
            ScanDirection::Backward,
            |_, _| true,
            Some(3),
            0,
        );
        assert_eq!(page, vec![10, 9, 8]);

        let offset_page = sl.scan(
            Bound::Unbounded,
            Bound::Unbounded,
            ScanDirection::Backward,
            |_, _| true,
            Some(3),
            2,
        );
        assert_eq!(offset_page, vec![8, 7, 6]);
    }

    #[test]
    fn delete_waits_for_concurrent_insert_to_publish_before_unlinking() {
        // A delete racing the tail end of the matching insert must not
        // unlink the bottom node while an interior level above it is still
        // being linked, or the interior node is orphaned (never reclaimed,
        // and its key keeps appearing above level 0 with no live bottom).
        let sl = Arc::new(list());
        for i in 0..200u32 {
            sl.insert(key(format!("{i:08}").as_bytes()), i as u64, false)
                .unwrap();
        }

        let mut handles = vec![];
        for i in 200..400u32 {
            let sl = sl.clone();
            handles.push(thread::spawn(move || {
                let k = key(format!("{i:08}").as_bytes());
                sl.insert(k, i as u64, false).unwrap();
                sl.delete(&k, i as u64);
            }));
        }
        for h in handles {
            h.join().unwrap();
        }

        let remaining = sl.scan(Bound::Unbounded, Bound::Unbounded, ScanDirection::Forward, |_, _| true, None, 0);
        assert_eq!(remaining.len(), 200);
        assert!(remaining.iter().all(|&v| v < 200));
    }

    proptest! {
        /// Property 1 (Order): whatever order a batch of unique keys is
        /// inserted in, a forward walk at level 0 comes back sorted.
        #[test]
        fn order_holds_for_any_insertion_sequence(mut values in prop::collection::hash_set(0u32..5_000, 1..200)) {
            let sl = list();
            let mut values: Vec<u32> = values.drain().collect();
            for &v in &values {
                sl.insert(key(format!("{v:08}").as_bytes()), v as u64, false).unwrap();
            }
            values.sort_unstable();

            let scanned = sl.scan(Bound::Unbounded, Bound::Unbounded, ScanDirection::Forward, |_, _| true, None, 0);
            prop_assert_eq!(scanned, values.into_iter().map(|v| v as u64).collect::<Vec<_>>());
        }

        /// Property 5 (Round-trip): insert then delete of the same pair
        /// leaves the observable multiset unchanged.
        #[test]
        fn insert_then_delete_is_a_no_op(v in 0u32..10_000) {
            let sl = list();
            let before = sl.scan(Bound::Unbounded, Bound::Unbounded, ScanDirection::Forward, |_, _| true, None, 0);
            let k = key(format!("{:08}", v).as_bytes());
            sl.insert(k, v as u64, false).unwrap();
            let deleted = sl.delete(&k, v as u64);
            prop_assert!(deleted);
            let after = sl.scan(Bound::Unbounded, Bound::Unbounded, ScanDirection::Forward, |_, _| true, None, 0);
            prop_assert_eq!(before, after);
        }
    }
}
