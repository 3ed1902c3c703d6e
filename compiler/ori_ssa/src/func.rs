//! SSA functions and the value-construction API.
//!
//! A [`Func`] is built incrementally by an external builder: ask the
//! function for new blocks, then construct values scoped to a block,
//! wiring operand edges to previously constructed values. Nothing here
//! traverses, validates, or rewrites the graph — this layer only allocates
//! identity and stores structure.
//!
//! # Identity and storage
//!
//! The function owns two arenas (blocks and values) addressed by their
//! dense ids; during construction nothing is removed, so arena index and
//! id coincide. Ids are never reused, which is why
//! [`block_count`](Func::block_count) / [`value_count`](Func::value_count)
//! — allocator counts, not collection lengths — are the required sizes for
//! per-id side tables in later passes.

#![allow(clippy::too_many_arguments)]

use smallvec::{smallvec, SmallVec};

use crate::block::{Block, BlockKind};
use crate::error::SsaError;
use crate::id::{BlockId, IdAlloc, ValueId};
use crate::span::Span;
use crate::token::{Config, Op, TypeIdx};
use crate::value::{Aux, Value, INLINE_ARGS};

/// Storage location assigned by register allocation.
///
/// Stored on the [`Func`]; interpreted by the emitter, not by this crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Location {
    /// Machine register, numbered by the target descriptor.
    Register(u16),
    /// Stack slot at a frame offset.
    Stack(i64),
}

/// One function's SSA graph.
///
/// Each function is compiled independently: it has its own pair of id
/// allocators and its own block/value storage, so distinct functions can be
/// built on distinct threads without coordination.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Func {
    /// Target descriptor (opaque configuration).
    pub config: Config,
    /// The function's mangled name.
    pub name: String,
    /// Signature type token.
    pub ty: TypeIdx,
    blocks: Vec<Block>,
    values: Vec<Value>,
    entry: Option<BlockId>,
    bid: IdAlloc,
    vid: IdAlloc,
    /// Value id → location, filled in by register allocation.
    pub reg_alloc: Vec<Location>,
    /// Stack frame size, filled in by stack allocation.
    pub frame_size: i64,
}

fn check_aux(op: Op, ty: TypeIdx, aux: &Aux) -> Result<(), SsaError> {
    if aux.encodes_int64() {
        return Err(SsaError::IntAuxPayload { op, ty, aux: *aux });
    }
    Ok(())
}

impl Func {
    /// Create an empty function. The builder adds blocks and values.
    pub fn new(config: Config, name: impl Into<String>, ty: TypeIdx) -> Self {
        let name = name.into();
        tracing::debug!(function = %name, "new ssa function");
        Func {
            config,
            name,
            ty,
            blocks: Vec::new(),
            values: Vec::new(),
            entry: None,
            bid: IdAlloc::new(),
            vid: IdAlloc::new(),
            reg_alloc: Vec::new(),
            frame_size: 0,
        }
    }

    // ── blocks ──────────────────────────────────────────────────────

    /// Allocate a new block of `kind` with a fresh id and add it to the
    /// function. Total; no failure mode.
    pub fn new_block(&mut self, kind: BlockKind) -> BlockId {
        let id = BlockId::new(self.bid.next());
        debug_assert_eq!(id.index(), self.blocks.len());
        self.blocks.push(Block::new(id, kind));
        tracing::trace!(block = id.raw(), ?kind, "new block");
        id
    }

    /// One past the highest block id ever issued.
    ///
    /// Later passes must size per-block side tables with this, not with the
    /// number of live blocks: ids are never reused or compacted.
    #[inline]
    pub fn block_count(&self) -> usize {
        self.bid.count() as usize
    }

    /// One past the highest value id ever issued. Same contract as
    /// [`block_count`](Self::block_count).
    #[inline]
    pub fn value_count(&self) -> usize {
        self.vid.count() as usize
    }

    /// Designate the entry block. Membership in this function is a trusted
    /// precondition, not validated here.
    pub fn set_entry(&mut self, id: BlockId) {
        self.entry = Some(id);
    }

    /// The designated entry block.
    ///
    /// # Panics
    ///
    /// Panics if no entry block has been designated.
    pub fn entry(&self) -> BlockId {
        self.entry
            .unwrap_or_else(|| panic!("no entry block designated for `{}`", self.name))
    }

    /// Shared access to a block by id.
    #[inline]
    pub fn block(&self, id: BlockId) -> &Block {
        &self.blocks[id.index()]
    }

    /// Mutable access to a block by id.
    #[inline]
    pub fn block_mut(&mut self, id: BlockId) -> &mut Block {
        &mut self.blocks[id.index()]
    }

    /// All blocks. Iteration order carries no control-flow meaning.
    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter()
    }

    /// Shared access to a value by id.
    #[inline]
    pub fn value(&self, id: ValueId) -> &Value {
        &self.values[id.index()]
    }

    /// Mutable access to a value by id.
    #[inline]
    pub fn value_mut(&mut self, id: ValueId) -> &mut Value {
        &mut self.values[id.index()]
    }

    /// All values, in creation order.
    pub fn values(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }

    // ── value construction ──────────────────────────────────────────
    //
    // The arity × aux surface below is mechanical; everything funnels
    // through `new_value_raw`, which allocates the id, fixes block
    // membership, and appends to the block's sequence. Payload-accepting
    // variants check exclusivity first, so an `Err` leaves no partial
    // state behind.

    fn new_value_raw(
        &mut self,
        block: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux_int: i64,
        aux: Option<Aux>,
        args: SmallVec<[ValueId; INLINE_ARGS]>,
    ) -> ValueId {
        let id = ValueId::new(self.vid.next());
        debug_assert_eq!(id.index(), self.values.len());
        self.values.push(Value {
            id,
            op,
            ty,
            aux_int,
            aux,
            span,
            block,
            args,
        });
        self.blocks[block.index()].values.push(id);
        id
    }

    /// New value with no operands and no aux.
    pub fn new_value0(&mut self, b: BlockId, span: Span, op: Op, ty: TypeIdx) -> ValueId {
        self.new_value_raw(b, span, op, ty, 0, None, SmallVec::new())
    }

    /// New value with no operands and an `aux_int`.
    pub fn new_value0_int(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux_int: i64,
    ) -> ValueId {
        self.new_value_raw(b, span, op, ty, aux_int, None, SmallVec::new())
    }

    /// New value with no operands and an aux payload.
    pub fn new_value0_aux(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux: Aux,
    ) -> Result<ValueId, SsaError> {
        check_aux(op, ty, &aux)?;
        Ok(self.new_value_raw(b, span, op, ty, 0, Some(aux), SmallVec::new()))
    }

    /// New value with no operands and both aux slots.
    pub fn new_value0_int_aux(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux_int: i64,
        aux: Aux,
    ) -> Result<ValueId, SsaError> {
        check_aux(op, ty, &aux)?;
        Ok(self.new_value_raw(b, span, op, ty, aux_int, Some(aux), SmallVec::new()))
    }

    /// New value with one operand and no aux.
    pub fn new_value1(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        arg: ValueId,
    ) -> ValueId {
        self.new_value_raw(b, span, op, ty, 0, None, smallvec![arg])
    }

    /// New value with one operand and an `aux_int`.
    pub fn new_value1_int(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux_int: i64,
        arg: ValueId,
    ) -> ValueId {
        self.new_value_raw(b, span, op, ty, aux_int, None, smallvec![arg])
    }

    /// New value with one operand and an aux payload.
    pub fn new_value1_aux(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux: Aux,
        arg: ValueId,
    ) -> Result<ValueId, SsaError> {
        check_aux(op, ty, &aux)?;
        Ok(self.new_value_raw(b, span, op, ty, 0, Some(aux), smallvec![arg]))
    }

    /// New value with one operand and both aux slots.
    pub fn new_value1_int_aux(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux_int: i64,
        aux: Aux,
        arg: ValueId,
    ) -> Result<ValueId, SsaError> {
        check_aux(op, ty, &aux)?;
        Ok(self.new_value_raw(b, span, op, ty, aux_int, Some(aux), smallvec![arg]))
    }

    /// New value with two operands and no aux.
    pub fn new_value2(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        arg0: ValueId,
        arg1: ValueId,
    ) -> ValueId {
        self.new_value_raw(b, span, op, ty, 0, None, smallvec![arg0, arg1])
    }

    /// New value with two operands and an `aux_int`.
    pub fn new_value2_int(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux_int: i64,
        arg0: ValueId,
        arg1: ValueId,
    ) -> ValueId {
        self.new_value_raw(b, span, op, ty, aux_int, None, smallvec![arg0, arg1])
    }

    /// New value with two operands and an aux payload.
    pub fn new_value2_aux(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux: Aux,
        arg0: ValueId,
        arg1: ValueId,
    ) -> Result<ValueId, SsaError> {
        check_aux(op, ty, &aux)?;
        Ok(self.new_value_raw(b, span, op, ty, 0, Some(aux), smallvec![arg0, arg1]))
    }

    /// New value with two operands and both aux slots.
    pub fn new_value2_int_aux(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux_int: i64,
        aux: Aux,
        arg0: ValueId,
        arg1: ValueId,
    ) -> Result<ValueId, SsaError> {
        check_aux(op, ty, &aux)?;
        Ok(self.new_value_raw(b, span, op, ty, aux_int, Some(aux), smallvec![arg0, arg1]))
    }

    /// New value with three operands and no aux.
    pub fn new_value3(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        arg0: ValueId,
        arg1: ValueId,
        arg2: ValueId,
    ) -> ValueId {
        self.new_value_raw(b, span, op, ty, 0, None, smallvec![arg0, arg1, arg2])
    }

    /// New value with three operands and an `aux_int`.
    pub fn new_value3_int(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux_int: i64,
        arg0: ValueId,
        arg1: ValueId,
        arg2: ValueId,
    ) -> ValueId {
        self.new_value_raw(b, span, op, ty, aux_int, None, smallvec![arg0, arg1, arg2])
    }

    /// New value with three operands and an aux payload.
    pub fn new_value3_aux(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux: Aux,
        arg0: ValueId,
        arg1: ValueId,
        arg2: ValueId,
    ) -> Result<ValueId, SsaError> {
        check_aux(op, ty, &aux)?;
        Ok(self.new_value_raw(b, span, op, ty, 0, Some(aux), smallvec![arg0, arg1, arg2]))
    }

    /// New value with three operands and both aux slots.
    pub fn new_value3_int_aux(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux_int: i64,
        aux: Aux,
        arg0: ValueId,
        arg1: ValueId,
        arg2: ValueId,
    ) -> Result<ValueId, SsaError> {
        check_aux(op, ty, &aux)?;
        Ok(self.new_value_raw(
            b,
            span,
            op,
            ty,
            aux_int,
            Some(aux),
            smallvec![arg0, arg1, arg2],
        ))
    }

    /// New value with any number of operands and no aux.
    pub fn new_value_n(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        args: &[ValueId],
    ) -> ValueId {
        self.new_value_raw(b, span, op, ty, 0, None, SmallVec::from_slice(args))
    }

    /// New value with any number of operands and an `aux_int`.
    pub fn new_value_n_int(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux_int: i64,
        args: &[ValueId],
    ) -> ValueId {
        self.new_value_raw(b, span, op, ty, aux_int, None, SmallVec::from_slice(args))
    }

    /// New value with any number of operands and an aux payload.
    pub fn new_value_n_aux(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux: Aux,
        args: &[ValueId],
    ) -> Result<ValueId, SsaError> {
        check_aux(op, ty, &aux)?;
        Ok(self.new_value_raw(b, span, op, ty, 0, Some(aux), SmallVec::from_slice(args)))
    }

    /// New value with any number of operands and both aux slots.
    pub fn new_value_n_int_aux(
        &mut self,
        b: BlockId,
        span: Span,
        op: Op,
        ty: TypeIdx,
        aux_int: i64,
        aux: Aux,
        args: &[ValueId],
    ) -> Result<ValueId, SsaError> {
        check_aux(op, ty, &aux)?;
        Ok(self.new_value_raw(
            b,
            span,
            op,
            ty,
            aux_int,
            Some(aux),
            SmallVec::from_slice(args),
        ))
    }

    // ── convenience ─────────────────────────────────────────────────

    /// Integer-constant value, always homed in the entry block regardless
    /// of the active construction target. Function-wide constants collect
    /// in one canonical place; no deduplication is performed — repeated
    /// calls with identical arguments produce distinct values, so callers
    /// needing sharing must cache externally.
    ///
    /// # Panics
    ///
    /// Panics if no entry block has been designated.
    pub fn const_int(&mut self, span: Span, ty: TypeIdx, c: i64) -> ValueId {
        let entry = self.entry();
        self.new_value0_int(entry, span, Op::Const, ty, c)
    }
}
