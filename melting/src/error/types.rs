//! Primary error enum for melt operations.

use thiserror::Error;

use crate::field::FieldPath;
use crate::operand::OperandKind;

/// Convenience alias for results returned by melt operations.
pub type MeltResult<T = ()> = Result<T, MeltError>;

/// Errors that can occur while melting a source value into a destination.
///
/// Every variant aborts the merge at the point it is raised. Fields already
/// copied before the failure stay copied: callers needing all-or-nothing
/// semantics must snapshot the destination beforehand.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MeltError {
    /// The destination was not handed over as an exclusive reference, so
    /// any mutation would be invisible to the caller.
    #[error("destination must be an exclusive reference, got {operand} value of type `{type_name}`")]
    NotAReference {
        /// How the destination operand was supplied.
        operand: OperandKind,
        /// Runtime type of the rejected destination.
        type_name: &'static str,
    },

    /// A matched destination field cannot be written.
    #[error("destination field '{path}' is not settable")]
    NotSettable {
        /// Path of the read-only field from the merge root.
        path: FieldPath,
    },

    /// A matched field pair has incompatible types.
    #[error("cannot assign type `{source_type}` to `{destination_type}` at '{path}'")]
    TypeMismatch {
        /// Path of the offending field from the merge root.
        path: FieldPath,
        /// Runtime type of the source value.
        source_type: &'static str,
        /// Runtime type of the destination value.
        destination_type: &'static str,
    },
}
