//! Construction-time internal-invariant errors.

use thiserror::Error;

use crate::token::{Op, TypeIdx};
use crate::value::Aux;

/// Internal-invariant violation detected during construction.
///
/// Not a user-facing diagnostic: an `Err` of this type means compiler code
/// used the wrong constructor. The driver must abort or turn it into a
/// compiler-internal panic — never suppress it, retry, or treat it as a
/// recoverable outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SsaError {
    /// A polymorphic aux payload encoded a 64-bit integer. Integer metadata
    /// belongs in the dedicated `aux_int` slot (`new_value*_int`).
    #[error("aux payload encodes an int64: op={op} type={ty:?} aux={aux:?}; use the aux_int field")]
    IntAuxPayload {
        /// Opcode of the value under construction.
        op: Op,
        /// Its result type.
        ty: TypeIdx,
        /// The offending payload.
        aux: Aux,
    },
}

#[cfg(test)]
mod tests {
    use crate::token::Name;

    use super::*;

    #[test]
    fn error_message_names_op_and_type() {
        let err = SsaError::IntAuxPayload {
            op: Op::Const,
            ty: TypeIdx::INT,
            aux: Aux::Sym(Name::from_raw(9)),
        };
        let msg = err.to_string();
        assert!(msg.contains("op=Const"), "message was: {msg}");
        assert!(msg.contains("type=int"), "message was: {msg}");
        assert!(msg.contains("aux_int"), "message was: {msg}");
    }
}
