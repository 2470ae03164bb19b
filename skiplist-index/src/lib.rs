//! A concurrent, ordered, multi-level skip-list secondary index
//!
//! This crate implements an in-memory index structure for a relational
//! database's secondary-index interface:
//!
//! - **Key adapters**: typed key families (compact integers, generic byte
//!   buffers, composite tuples) sharing one `Ord`/`Eq` contract.
//! - **Skip list**: the lock-free, multi-level structure itself, with
//!   epoch-based reclamation of unlinked nodes.
//! - **Index façade**: adapts the skip list to a generic insert/delete/scan
//!   contract, with an instantiation registry that picks a key family from
//!   a schema.
//!
//! # Architecture
//!
//! ```text
//! Index façade (insert_entry/delete_entry/scan/...)
//!          │
//!          ▼
//! SkipList<K>  ──uses──▶  Node<K> (tagged min/nil/interior/bottom)
//!          │
//!          ▼
//! crossbeam::epoch (deferred reclamation of unlinked nodes)
//! ```
//!
//! # Example
//!
//! ```no_run
//! use skiplist_index::{Index, SkipListConfig, SkipListIndex};
//! use skiplist_index::keys::Generic;
//!
//! let index = SkipListIndex::<Generic<8>>::new(SkipListConfig::default()).unwrap();
//! index.insert_entry(b"alice", 1);
//! assert_eq!(index.scan_key(b"alice"), vec![1]);
//! ```

pub mod config;
pub mod context;
pub mod index;
pub mod keys;
pub mod node;
pub mod registry;
pub mod skiplist;

pub use config::SkipListConfig;
pub use index::{Index, SkipListIndex};
pub use registry::{build_index, IndexSchema};
pub use skiplist::SkipList;
