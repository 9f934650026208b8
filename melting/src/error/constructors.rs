//! Constructors and accessors for `MeltError`.

use crate::Melt;
use crate::field::FieldPath;
use crate::operand::Operand;

use super::MeltError;

impl MeltError {
    /// Build a [`MeltError::NotAReference`] describing a rejected destination.
    ///
    /// # Examples
    ///
    /// ```
    /// use melting::{MeltError, Operand};
    ///
    /// let value = 15.0_f64;
    /// let err = MeltError::not_a_reference(&Operand::from(&value));
    /// assert!(matches!(err, MeltError::NotAReference { .. }));
    /// ```
    #[must_use]
    pub fn not_a_reference(operand: &Operand<'_>) -> Self {
        Self::NotAReference {
            operand: operand.kind(),
            type_name: operand.value().type_name(),
        }
    }

    /// Build a [`MeltError::NotSettable`] for the field at `path`.
    #[must_use]
    pub fn not_settable(path: &FieldPath) -> Self {
        Self::NotSettable { path: path.clone() }
    }

    /// Build a [`MeltError::TypeMismatch`] from the two values that failed to
    /// line up.
    ///
    /// # Examples
    ///
    /// ```
    /// use melting::{FieldPath, MeltError};
    ///
    /// let err = MeltError::type_mismatch(&FieldPath::root(), &2.5_f64, &15_i32);
    /// assert_eq!(
    ///     err.to_string(),
    ///     "cannot assign type `f64` to `i32` at '<root>'"
    /// );
    /// ```
    #[must_use]
    pub fn type_mismatch(path: &FieldPath, source: &dyn Melt, destination: &dyn Melt) -> Self {
        Self::TypeMismatch {
            path: path.clone(),
            source_type: source.type_name(),
            destination_type: destination.type_name(),
        }
    }

    /// Path of the field that triggered the error, if the error is tied to
    /// one.
    #[must_use]
    pub const fn path(&self) -> Option<&FieldPath> {
        match self {
            Self::NotAReference { .. } => None,
            Self::NotSettable { path } | Self::TypeMismatch { path, .. } => Some(path),
        }
    }
}
