//! Basic blocks.
//!
//! A [`Block`] is the ordered container for the values created while it was
//! the active construction target. Value storage lives in the function's
//! arena; the block owns the *sequence* (insertion order = program order).

use crate::id::{BlockId, ValueId};

/// Terminator kind — how control leaves the block.
///
/// Opaque to this core: successor wiring and well-formedness checks belong
/// to later passes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum BlockKind {
    /// Single successor.
    Plain,
    /// Two successors chosen by a boolean control value.
    If,
    /// Call with a single successor.
    Call,
    /// Returns from the function.
    Ret,
    /// No successors.
    Exit,
}

/// A basic block: terminator kind plus values in program order.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Block {
    /// Identity from the owning function's block allocator.
    pub id: BlockId,
    /// Terminator kind.
    pub kind: BlockKind,
    /// Value ids in program order, into the owning function's arena.
    pub(crate) values: Vec<ValueId>,
}

impl Block {
    pub(crate) fn new(id: BlockId, kind: BlockKind) -> Self {
        Block {
            id,
            kind,
            values: Vec::new(),
        }
    }

    /// Values in program order.
    #[inline]
    pub fn values(&self) -> &[ValueId] {
        &self.values
    }

    /// Mutable access to the value sequence, for passes that reorder or
    /// relocate values.
    #[inline]
    pub fn values_mut(&mut self) -> &mut Vec<ValueId> {
        &mut self.values
    }

    /// Whether `v` is a member of this block's sequence.
    pub fn contains(&self, v: ValueId) -> bool {
        self.values.contains(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_block_is_empty() {
        let b = Block::new(BlockId::new(0), BlockKind::Plain);
        assert_eq!(b.id, BlockId::new(0));
        assert_eq!(b.kind, BlockKind::Plain);
        assert!(b.values().is_empty());
    }

    #[test]
    fn membership() {
        let mut b = Block::new(BlockId::new(1), BlockKind::Ret);
        b.values_mut().push(ValueId::new(4));
        assert!(b.contains(ValueId::new(4)));
        assert!(!b.contains(ValueId::new(5)));
    }

    #[test]
    fn block_kinds_are_distinct() {
        assert_ne!(BlockKind::Plain, BlockKind::If);
        assert_ne!(BlockKind::Ret, BlockKind::Exit);
    }
}
