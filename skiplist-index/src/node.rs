//! Node types (C2)
//!
//! Node kinds are expressed as a tag plus a flat field layout rather than as
//! a payload enum or class hierarchy: a payload enum would balloon
//! [`Node`]'s size depending on which variant is live, which works against
//! `Atomic<Node<K>>`'s fixed-size, CAS-friendly representation. `MIN_NODE`,
//! `NIL_NODE` and `IS_BOTTOM` from the specification's flag bit field become
//! the immutable [`NodeKind`] tag; `IS_DELETABLE`/`IS_DELETED` remain a
//! mutable bitset since they transition during the node's lifecycle.

use crate::keys::KeyAdapter;
use crossbeam::epoch::{Atomic, Guard, Owned, Shared};
use skiplist_core::ItemPointer;
use std::sync::atomic::{AtomicU8, Ordering};

const FLAG_DELETABLE: u8 = 0b01;
const FLAG_DELETED: u8 = 0b10;

/// The fixed role a node plays within its level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeKind {
    /// Head of a level; compares as -infinity
    Min,
    /// Tail of a level; compares as +infinity
    Nil,
    /// Interior (non-bottom) data node, carrying a down-pointer
    Interior,
    /// Level-0 data node, carrying a value
    Bottom,
}

/// A node in one level of the skip list
///
/// `down` is populated for `Min` and `Interior` nodes (pointing at the
/// corresponding node one level down) and left null for `Nil`/`Bottom`
/// nodes. `value` is populated for `Bottom` nodes only. The single key slot
/// matches `ARR_SIZE = 1`; the struct leaves room to grow to a small array
/// without changing call sites, but nothing here populates more than slot 0.
pub(crate) struct Node<K: KeyAdapter> {
    pub(crate) kind: NodeKind,
    /// Height this node sits at; meaningful for `Min` nodes (used by
    /// `get_top_level`/`go_to_level`), unused elsewhere.
    pub(crate) level: u32,
    pub(crate) key: Option<K>,
    pub(crate) value: ItemPointer,
    pub(crate) down: Atomic<Node<K>>,
    pub(crate) forward: Atomic<Node<K>>,
    flags: AtomicU8,
}

impl<K: KeyAdapter> Node<K> {
    pub(crate) fn min(level: u32, down: Shared<'_, Node<K>>, forward: Shared<'_, Node<K>>) -> Self {
        Self {
            kind: NodeKind::Min,
            level,
            key: None,
            value: 0,
            down: Atomic::from(down),
            forward: Atomic::from(forward),
            flags: AtomicU8::new(0),
        }
    }

    pub(crate) fn nil() -> Self {
        Self {
            kind: NodeKind::Nil,
            level: 0,
            key: None,
            value: 0,
            down: Atomic::null(),
            forward: Atomic::null(),
            flags: AtomicU8::new(0),
        }
    }

    pub(crate) fn interior(key: K, down: Shared<'_, Node<K>>, forward: Shared<'_, Node<K>>) -> Self {
        Self {
            kind: NodeKind::Interior,
            level: 0,
            key: Some(key),
            value: 0,
            down: Atomic::from(down),
            forward: Atomic::from(forward),
            // Freshly built towers start deletable=false (not yet linked);
            // the inserter clears it once the whole tower is published.
            flags: AtomicU8::new(FLAG_DELETABLE),
        }
    }

    pub(crate) fn bottom(key: K, value: ItemPointer, forward: Shared<'_, Node<K>>) -> Self {
        Self {
            kind: NodeKind::Bottom,
            level: 0,
            key: Some(key),
            value,
            down: Atomic::null(),
            forward: Atomic::from(forward),
            flags: AtomicU8::new(FLAG_DELETABLE),
        }
    }

    #[inline]
    pub(crate) fn is_min(&self) -> bool {
        self.kind == NodeKind::Min
    }

    #[inline]
    pub(crate) fn is_nil(&self) -> bool {
        self.kind == NodeKind::Nil
    }

    #[inline]
    pub(crate) fn is_bottom(&self) -> bool {
        self.kind == NodeKind::Bottom
    }

    /// True iff any key in the node is >= `probe` (ARR_SIZE = 1, so this is
    /// just `key >= probe`; `Nil` is trivially true, `Min` trivially false).
    pub(crate) fn contains_ge_key(&self, probe: &K) -> bool {
        match self.kind {
            NodeKind::Nil => true,
            NodeKind::Min => false,
            NodeKind::Interior | NodeKind::Bottom => {
                self.key.as_ref().expect("data node always carries a key") >= probe
            }
        }
    }

    pub(crate) fn next<'g>(&self, guard: &'g Guard) -> Shared<'g, Node<K>> {
        self.forward.load(Ordering::Acquire, guard)
    }

    pub(crate) fn down<'g>(&self, guard: &'g Guard) -> Shared<'g, Node<K>> {
        self.down.load(Ordering::Acquire, guard)
    }

    pub(crate) fn cas_next<'g>(
        &self,
        current: Shared<'g, Node<K>>,
        new: Owned<Node<K>>,
        guard: &'g Guard,
    ) -> Result<Shared<'g, Node<K>>, Shared<'g, Node<K>>> {
        self.forward
            .compare_exchange(
                current,
                new,
                Ordering::AcqRel,
                Ordering::Acquire,
                guard,
            )
            .map_err(|e| e.current)
    }

    pub(crate) fn value(&self) -> ItemPointer {
        debug_assert!(self.is_bottom());
        self.value
    }

    pub(crate) fn is_deletable(&self) -> bool {
        self.flags.load(Ordering::Acquire) & FLAG_DELETABLE != 0
    }

    /// True once the node's whole tower has been linked
    ///
    /// The inverse of [`Self::is_deletable`]: a node starts fresh
    /// (deletable, unpublished) and becomes published when its inserter
    /// clears the flag. `delete` must wait for this before tombstoning,
    /// or it can race the still-linking insert and unlink a bottom node
    /// while an interior node above it still holds a `down` pointer at it.
    pub(crate) fn is_published(&self) -> bool {
        !self.is_deletable()
    }

    pub(crate) fn is_deleted(&self) -> bool {
        self.flags.load(Ordering::Acquire) & FLAG_DELETED != 0
    }

    /// Clears the deletable flag once the node's full tower has been linked
    pub(crate) fn make_published(&self) {
        self.flags.fetch_and(!FLAG_DELETABLE, Ordering::AcqRel);
    }

    /// Sets the deleted flag, returning whether *this* call performed the
    /// fresh->deleted transition (idempotent: a second caller observes
    /// `false`).
    pub(crate) fn make_deleted(&self) -> bool {
        let previous = self.flags.fetch_or(FLAG_DELETED, Ordering::AcqRel);
        previous & FLAG_DELETED == 0
    }
}
