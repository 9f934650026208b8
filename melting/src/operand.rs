//! Untyped handles accepted by the melt entry points.
//!
//! An [`Operand`] records *how* a value was handed over as well as the value
//! itself. Sources may arrive in any form and are dereferenced once; a
//! destination must be [`Operand::Exclusive`], otherwise the entry points
//! fail with [`crate::MeltError::NotAReference`] before touching anything.

use std::fmt;

use crate::Melt;

/// How an operand was supplied to a melt call.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum OperandKind {
    /// Moved into the call by value.
    Owned,
    /// Borrowed through a shared reference.
    Shared,
    /// Borrowed through an exclusive reference.
    Exclusive,
}

impl fmt::Display for OperandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Owned => "an owned",
            Self::Shared => "a shared",
            Self::Exclusive => "an exclusive",
        })
    }
}

/// A source or destination handed to [`crate::melt`].
///
/// References convert with [`From`], so callers normally write
/// `melt(&source, &mut destination)`. Owned values go through
/// [`Operand::owned`].
///
/// # Examples
///
/// ```
/// use melting::{Operand, OperandKind};
///
/// let mut value = 3_u8;
/// assert_eq!(Operand::from(&value).kind(), OperandKind::Shared);
/// assert_eq!(Operand::from(&mut value).kind(), OperandKind::Exclusive);
/// assert_eq!(Operand::owned(value).kind(), OperandKind::Owned);
/// ```
pub enum Operand<'a> {
    /// A value moved into the call.
    Owned(Box<dyn Melt>),
    /// A shared reference.
    Shared(&'a dyn Melt),
    /// An exclusive reference; the only form accepted as a destination.
    Exclusive(&'a mut dyn Melt),
}

impl<'a> Operand<'a> {
    /// Wrap a value moved into the call.
    #[must_use]
    pub fn owned<T: Melt>(value: T) -> Self {
        Self::Owned(Box::new(value))
    }

    /// How the operand was supplied.
    #[must_use]
    pub const fn kind(&self) -> OperandKind {
        match self {
            Self::Owned(_) => OperandKind::Owned,
            Self::Shared(_) => OperandKind::Shared,
            Self::Exclusive(_) => OperandKind::Exclusive,
        }
    }

    /// The referenced value, dereferenced exactly once.
    ///
    /// A boxed value passed through [`Operand::owned`] is unwrapped from the
    /// operand, but a `Box<T>` that is itself the value stays a `Box<T>`.
    #[must_use]
    pub fn value(&self) -> &dyn Melt {
        match self {
            Self::Owned(value) => value.as_ref(),
            Self::Shared(value) => *value,
            Self::Exclusive(value) => &**value,
        }
    }

    /// The exclusive reference, or the operand back if it is not one.
    ///
    /// # Errors
    ///
    /// Returns `self` unchanged when the operand is owned or shared.
    pub fn into_exclusive(self) -> Result<&'a mut dyn Melt, Self> {
        match self {
            Self::Exclusive(value) => Ok(value),
            other => Err(other),
        }
    }
}

impl fmt::Debug for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Operand")
            .field("kind", &self.kind())
            .field("type_name", &self.value().type_name())
            .finish()
    }
}

impl<'a, T: Melt> From<&'a T> for Operand<'a> {
    fn from(value: &'a T) -> Self {
        Self::Shared(value)
    }
}

impl<'a, T: Melt> From<&'a mut T> for Operand<'a> {
    fn from(value: &'a mut T) -> Self {
        Self::Exclusive(value)
    }
}

impl<'a> From<&'a dyn Melt> for Operand<'a> {
    fn from(value: &'a dyn Melt) -> Self {
        Self::Shared(value)
    }
}

impl<'a> From<&'a mut dyn Melt> for Operand<'a> {
    fn from(value: &'a mut dyn Melt) -> Self {
        Self::Exclusive(value)
    }
}
