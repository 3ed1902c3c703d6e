//! SSA values — instruction nodes in the def-use graph.
//!
//! A [`Value`] carries its opcode, result type, ordered operand list, two
//! auxiliary metadata slots, a source span, and the id of the block it was
//! created in. Operand references are non-owning edges: a value may appear
//! as an operand of arbitrarily many other values, and storage for all
//! values belongs to the enclosing [`crate::Func`].

use smallvec::SmallVec;

use crate::id::{BlockId, ValueId};
use crate::span::Span;
use crate::token::{Name, Op, TypeIdx};

/// Inline operand capacity. The vast majority of instructions take 0–2
/// operands; three covers the rest without a separate allocation.
pub(crate) const INLINE_ARGS: usize = 3;

/// Polymorphic auxiliary payload.
///
/// A closed set over the payload kinds opcodes actually produce. There is
/// deliberately no 64-bit-integer variant: integer metadata routes
/// exclusively through [`Value::aux_int`], so the invalid state is
/// unrepresentable at the type level.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Aux {
    /// Reference to an interned symbol (function, global, field).
    Sym(Name),
    /// IEEE-754 bit pattern of a floating-point constant.
    Float(u64),
    /// Reference to a type in the type pool.
    TypeRef(TypeIdx),
}

impl Aux {
    /// True if this payload is a 64-bit integer in disguise.
    ///
    /// Integer metadata must go through [`Value::aux_int`]; the
    /// payload-accepting constructors reject any variant for which this
    /// returns true. The match is exhaustive on purpose: a new variant
    /// cannot be added without declaring its answer here.
    pub fn encodes_int64(&self) -> bool {
        match self {
            Aux::Sym(_) | Aux::Float(_) | Aux::TypeRef(_) => false,
        }
    }
}

/// An SSA value: one instruction node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Value {
    /// Identity from the owning function's value allocator.
    pub id: ValueId,
    /// What this instruction does (opaque here, used only in diagnostics).
    pub op: Op,
    /// Result type token.
    pub ty: TypeIdx,
    /// Dedicated 64-bit integer metadata slot.
    pub aux_int: i64,
    /// Polymorphic non-integer metadata, if any.
    pub aux: Option<Aux>,
    /// Source position, carried for diagnostics and never interpreted.
    pub span: Span,
    /// The block this value was created in. Fixed at creation; relocation
    /// between blocks is an optimization-pass concern.
    pub block: BlockId,
    /// Ordered operands. Position is semantically meaningful (e.g. operand
    /// 0 minus operand 1). Up to three entries live inline in the value
    /// itself; longer lists spill to the heap.
    pub(crate) args: SmallVec<[ValueId; INLINE_ARGS]>,
}

impl Value {
    /// Ordered operand list.
    #[inline]
    pub fn args(&self) -> &[ValueId] {
        &self.args
    }

    /// The `i`-th operand.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn arg(&self, i: usize) -> ValueId {
        self.args[i]
    }

    /// Number of operands.
    #[inline]
    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// Overwrite the `i`-th operand in place.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of range.
    #[inline]
    pub fn set_arg(&mut self, i: usize, arg: ValueId) {
        self.args[i] = arg;
    }

    /// Append an operand, preserving order. Spills to the heap past the
    /// inline capacity.
    #[inline]
    pub fn push_arg(&mut self, arg: ValueId) {
        self.args.push(arg);
    }

    /// True while the operand list still fits inside the value itself.
    #[inline]
    pub fn args_inline(&self) -> bool {
        !self.args.spilled()
    }
}

#[cfg(test)]
mod tests {
    use smallvec::smallvec;

    use super::*;

    fn test_value(args: SmallVec<[ValueId; INLINE_ARGS]>) -> Value {
        Value {
            id: ValueId::new(0),
            op: Op::Add,
            ty: TypeIdx::INT,
            aux_int: 0,
            aux: None,
            span: Span::DUMMY,
            block: BlockId::new(0),
            args,
        }
    }

    #[test]
    fn no_aux_variant_encodes_int64() {
        // Tripwire: any future variant that smuggles an i64 must be routed
        // through aux_int instead, and this list must stay all-false.
        let variants = [
            Aux::Sym(Name::from_raw(1)),
            Aux::Float(1.5f64.to_bits()),
            Aux::TypeRef(TypeIdx::STR),
        ];
        for aux in variants {
            assert!(!aux.encodes_int64(), "{aux:?} must not encode an int64");
        }
    }

    #[test]
    fn args_read_back_in_order() {
        let v = test_value(smallvec![ValueId::new(3), ValueId::new(1), ValueId::new(2)]);
        assert_eq!(v.arg_count(), 3);
        assert_eq!(v.arg(0), ValueId::new(3));
        assert_eq!(v.arg(1), ValueId::new(1));
        assert_eq!(v.arg(2), ValueId::new(2));
        assert_eq!(
            v.args(),
            &[ValueId::new(3), ValueId::new(1), ValueId::new(2)]
        );
    }

    #[test]
    fn inline_storage_up_to_capacity() {
        let mut v = test_value(SmallVec::new());
        assert!(v.args_inline());
        for i in 0..INLINE_ARGS {
            v.push_arg(ValueId::new(i as u32));
        }
        assert!(v.args_inline());
        assert_eq!(v.arg_count(), INLINE_ARGS);
    }

    #[test]
    fn spilled_storage_behaves_identically() {
        let mut v = test_value(SmallVec::new());
        for i in 0..10u32 {
            v.push_arg(ValueId::new(i));
        }
        assert!(!v.args_inline());
        for i in 0..10u32 {
            assert_eq!(v.arg(i as usize), ValueId::new(i));
        }
        v.set_arg(7, ValueId::new(99));
        assert_eq!(v.arg(7), ValueId::new(99));
        assert_eq!(v.arg(6), ValueId::new(6));
        assert_eq!(v.arg(8), ValueId::new(8));
    }

    #[test]
    fn set_arg_on_inline_storage() {
        let mut v = test_value(smallvec![ValueId::new(0), ValueId::new(1)]);
        v.set_arg(1, ValueId::new(42));
        assert_eq!(v.args(), &[ValueId::new(0), ValueId::new(42)]);
        assert!(v.args_inline());
    }
}
