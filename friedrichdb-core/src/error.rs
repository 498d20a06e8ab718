use thiserror::Error;

use crate::FieldKind;

/// Crate-local result type.
pub type Result<T> = core::result::Result<T, FieldError>;

/// Errors produced while accessing, mutating or comparing [`Field`](crate::Field)s.
///
/// `InvariantViolation` and `InvalidComparison` signal programming errors: the caller
/// asked for something the field's current kind cannot do. `KeyNotFound` and
/// `OutOfRange` are ordinary data errors.
#[derive(Debug, Error)]
pub enum FieldError {
    /// Operation is not defined for the field's current kind.
    #[error("{operation} requires {expected}, found {found}")]
    InvariantViolation {
        /// Operation that was attempted.
        operation: &'static str,
        /// Kinds the operation accepts.
        expected: &'static str,
        /// Kind the field actually had.
        found: FieldKind,
    },
    /// Object has no entry for the key.
    #[error("key not found: {key:?}")]
    KeyNotFound {
        /// Requested key.
        key: String,
    },
    /// Array index is past the end.
    #[error("index {index} out of range for array of length {len}")]
    OutOfRange {
        /// Requested index.
        index: usize,
        /// Array length.
        len: usize,
    },
    /// Two composite fields have no defined ordering.
    #[error("no ordering defined between {left} and {right}")]
    InvalidComparison {
        /// Kind of the left operand.
        left: FieldKind,
        /// Kind of the right operand.
        right: FieldKind,
    },
    /// Floats must be finite to be stored.
    #[error("number is not finite: {0}")]
    NonFiniteNumber(f64),
    /// The allocator policy was already fixed.
    #[error("payload allocator already installed")]
    AllocatorAlreadyInstalled,
    /// JSON text could not be produced or parsed.
    #[cfg(feature = "serde")]
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl FieldError {
    pub(crate) fn violation(operation: &'static str, expected: &'static str, found: FieldKind) -> Self {
        Self::InvariantViolation {
            operation,
            expected,
            found,
        }
    }
}
