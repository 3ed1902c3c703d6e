//! Identity allocation for SSA values and blocks.
//!
//! Each [`crate::Func`] owns two independent [`IdAlloc`]s — one for block
//! ids, one for value ids. Ids are issued strictly increasing from 0 and
//! are never reused, even if the owning entity is later discarded. That
//! makes [`IdAlloc::count`] a safe size for dense per-id side tables in
//! later passes, without those passes having to track liveness.

use std::fmt;

/// SSA value ID within a function.
///
/// Identifies one [`crate::Value`] in a single [`crate::Func`]. IDs are
/// allocated sequentially starting from 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct ValueId(u32);

impl ValueId {
    /// Create a new value ID from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize` (for indexing into `Vec`s).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for ValueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Basic block ID within a function.
///
/// Identifies one [`crate::Block`] in a single [`crate::Func`]. IDs are
/// allocated sequentially starting from 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct BlockId(u32);

impl BlockId {
    /// Create a new block ID from a raw index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw `u32` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the index as `usize` (for indexing into `Vec`s).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for BlockId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "b{}", self.0)
    }
}

/// Monotonic id source.
///
/// `next()` issues ids strictly increasing from 0; there is no deletion or
/// compaction. `count()` is one past the highest id issued — not a count of
/// currently-live entities.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct IdAlloc {
    next: u32,
}

impl IdAlloc {
    /// A fresh allocator; the first id issued is 0.
    #[inline]
    pub const fn new() -> Self {
        IdAlloc { next: 0 }
    }

    /// Issue a fresh id, strictly greater than every id issued before.
    ///
    /// # Panics
    ///
    /// Panics if the `u32` id space is exhausted.
    #[inline]
    pub fn next(&mut self) -> u32 {
        let id = self.next;
        self.next = id
            .checked_add(1)
            .unwrap_or_else(|| panic!("id space exhausted (u32::MAX ids issued)"));
        id
    }

    /// One past the highest id issued (0 if none issued).
    #[inline]
    pub const fn count(&self) -> u32 {
        self.next
    }
}
