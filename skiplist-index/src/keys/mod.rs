//! Key adapters (C1)
//!
//! A key adapter is a value type that gives the skip-list core a strict
//! total order (`<`) and an equivalence (`==`) over one key family, plus a
//! way to materialize an instance from the family's raw representation. The
//! core never inspects a key's bytes directly — it only ever calls `Ord`/`Eq`
//! methods on whatever [`KeyAdapter`] it was instantiated with, so a caller's
//! broken `Ord` impl (inconsistent with `Eq`) is a contract violation the
//! core cannot detect, per the error handling design.

mod compact_ints;
mod generic;
mod tuple;

pub use compact_ints::CompactInts;
pub use generic::Generic;
pub use tuple::TupleKey;

/// A key family usable as the skip list's key type
///
/// Implementors must be trivially comparable without touching external
/// storage: `cmp`/`eq` read only bytes already resident in the key value
/// itself.
pub trait KeyAdapter: Ord + Eq + Clone + std::fmt::Debug + Send + Sync + 'static {
    /// The raw, caller-facing representation this adapter is built from
    type Raw: ?Sized;

    /// Materializes a key from its raw representation
    fn from_raw(raw: &Self::Raw) -> Self;
}

/// A [`KeyAdapter`] that can also be materialized from an already-encoded
/// byte string
///
/// The index façade is object-safe over `dyn Index` (§4.6's instantiation
/// registry), so its trait-object boundary standardizes on byte-encoded
/// keys rather than each family's native `Raw` type: callers that already
/// hold a typed key still go through `KeyAdapter::from_raw` directly.
pub trait BytesKeyAdapter: KeyAdapter {
    fn from_bytes(bytes: &[u8]) -> Self;
}
