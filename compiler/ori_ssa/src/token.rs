//! Opaque collaborator tokens consumed by the SSA core.
//!
//! The opcode catalogue, the type pool, the symbol interner, and the target
//! descriptor all live outside this crate. Construction carries their
//! tokens through without introspecting them: [`Op`] is read only when
//! formatting diagnostics, [`TypeIdx`] only for equality, [`Name`] and
//! [`Config`] not at all.

use std::fmt;

/// Opcode token — the operation an instruction performs.
///
/// Semantics (operand counts, result types, lowering rules) are defined by
/// the opcode catalogue, not here. The construction core uses opcodes only
/// in diagnostic messages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub enum Op {
    /// Integer constant; the value lives in the `aux_int` slot.
    Const,
    /// Incoming function argument.
    Arg,
    /// SSA phi join.
    Phi,
    /// Copy of another value.
    Copy,
    Add,
    Sub,
    Mul,
    Load,
    Store,
    Call,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Op::Const => "Const",
            Op::Arg => "Arg",
            Op::Phi => "Phi",
            Op::Copy => "Copy",
            Op::Add => "Add",
            Op::Sub => "Sub",
            Op::Mul => "Mul",
            Op::Load => "Load",
            Op::Store => "Store",
            Op::Call => "Call",
        };
        f.write_str(name)
    }
}

/// A 32-bit index into the type pool.
///
/// Types are compared by index equality (O(1)); the pool itself lives
/// outside this crate. Primitive types have fixed indices pre-interned at
/// pool creation.
#[derive(Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct TypeIdx(u32);

impl TypeIdx {
    /// The `int` type (64-bit signed integer).
    pub const INT: Self = Self(0);
    /// The `float` type (64-bit floating point).
    pub const FLOAT: Self = Self(1);
    /// The `bool` type.
    pub const BOOL: Self = Self(2);
    /// The `str` type.
    pub const STR: Self = Self(3);
    /// The unit type.
    pub const UNIT: Self = Self(4);

    /// Create a type index from a raw pool index.
    #[inline]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw `u32` index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for TypeIdx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            TypeIdx::INT => f.write_str("int"),
            TypeIdx::FLOAT => f.write_str("float"),
            TypeIdx::BOOL => f.write_str("bool"),
            TypeIdx::STR => f.write_str("str"),
            TypeIdx::UNIT => f.write_str("unit"),
            TypeIdx(n) => write!(f, "type#{n}"),
        }
    }
}

/// Interned-symbol index.
///
/// Resolution back to text is the interner's business; aux payloads
/// reference symbols (functions, globals, fields) by this id.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
#[repr(transparent)]
pub struct Name(u32);

impl Name {
    /// Create a name from a raw interner index.
    #[inline]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Get the raw `u32` index.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

/// Target-architecture descriptor.
///
/// Opaque configuration carried on the [`crate::Func`] for later passes;
/// construction never reads it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "cache", derive(serde::Serialize, serde::Deserialize))]
pub struct Config {
    /// Architecture name, e.g. `"amd64"`.
    pub arch: String,
    /// Size of the native integer type in bytes.
    pub int_size: u8,
    /// Size of a pointer in bytes.
    pub ptr_size: u8,
}

impl Config {
    /// Create a target descriptor.
    pub fn new(arch: impl Into<String>, int_size: u8, ptr_size: u8) -> Self {
        Config {
            arch: arch.into(),
            int_size,
            ptr_size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_display() {
        assert_eq!(Op::Const.to_string(), "Const");
        assert_eq!(Op::Add.to_string(), "Add");
    }

    #[test]
    fn type_idx_equality_is_index_equality() {
        assert_eq!(TypeIdx::INT, TypeIdx::new(0));
        assert_ne!(TypeIdx::INT, TypeIdx::FLOAT);
        assert_eq!(TypeIdx::new(100), TypeIdx::new(100));
    }

    #[test]
    fn type_idx_debug() {
        assert_eq!(format!("{:?}", TypeIdx::INT), "int");
        assert_eq!(format!("{:?}", TypeIdx::new(77)), "type#77");
    }

    #[test]
    fn name_roundtrip() {
        let n = Name::from_raw(123);
        assert_eq!(n.raw(), 123);
        assert_eq!(n, Name::from_raw(123));
    }

    #[test]
    fn config_fields() {
        let c = Config::new("amd64", 8, 8);
        assert_eq!(c.arch, "amd64");
        assert_eq!(c.int_size, 8);
        assert_eq!(c.ptr_size, 8);
    }
}
