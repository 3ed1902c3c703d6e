//! SSA graph construction for the Ori compiler.
//!
//! This crate is the construction layer of the SSA intermediate
//! representation: per compiled function it builds a control-flow graph of
//! basic blocks populated with instruction values, assigns stable
//! identities, and stores operand edges. Every later pass (optimization,
//! scheduling, register allocation, emission) reads and mutates the
//! structures built here.
//!
//! # Architecture
//!
//! - **[`Func`]** — one function's graph: blocks, the entry block, and two
//!   id allocators (one per identity space)
//! - **[`Block`]** — a basic block: terminator kind plus values in program
//!   order
//! - **[`Value`]** — one instruction: opcode, result type, ordered operands,
//!   and two auxiliary slots (a dedicated `i64` and a polymorphic [`Aux`])
//! - **[`IdAlloc`]** — monotonic id source; ids are never reused, so
//!   `count()` always bounds dense per-id side tables
//!
//! # Design
//!
//! Block↔value and value↔value (operand) links are dense `u32` ids into
//! arenas owned by the [`Func`] — there is no per-edge reference counting.
//! A value may be used as an operand by arbitrarily many other values, and
//! everything lives and dies with its `Func`. Operand lists of up to three
//! entries are stored inline in the [`Value`] itself (the overwhelmingly
//! common case); longer lists spill to the heap.
//!
//! Construction is single-threaded per function. Distinct `Func`s share no
//! identity space or storage, so separate functions may be built on
//! separate threads without coordination.
//!
//! This crate does not validate control flow, check opcode/type
//! compatibility, or print IR — those belong to later passes.

pub mod block;
pub mod error;
pub mod func;
pub mod id;
pub mod span;
pub mod token;
pub mod value;

pub use block::{Block, BlockKind};
pub use error::SsaError;
pub use func::{Func, Location};
pub use id::{BlockId, IdAlloc, ValueId};
pub use span::Span;
pub use token::{Config, Name, Op, TypeIdx};
pub use value::{Aux, Value};
