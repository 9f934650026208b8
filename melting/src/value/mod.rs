//! Introspection traits implemented by values taking part in a merge.
//!
//! [`Melt`] is the dyn-compatible capability every participating value
//! exposes: its runtime type name, whether it is a structured record, and how
//! to overwrite it from another value. Structured records additionally expose
//! a [`Record`] view listing their fields by name.
//!
//! Records are normally produced with `#[derive(Melt)]`; leaf
//! implementations for the standard library types live in [`leaf`].

use std::any::Any;

use crate::field::{Field, FieldKind};

pub mod leaf;

pub use leaf::assign_cloned;

/// Capability implemented by every value that can be melted.
///
/// # Examples
///
/// ```
/// use melting::{FieldKind, Melt};
///
/// let mut destination = 15.0_f64;
/// assert_eq!(destination.kind(), FieldKind::Leaf);
/// assert!(destination.assign(&2.5_f64));
/// assert!(!destination.assign(&15_i32));
/// assert_eq!(destination, 2.5);
/// ```
pub trait Melt: Any {
    /// Runtime name of the concrete type, used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Structured-record view of the value, if it is one.
    fn as_record(&self) -> Option<&dyn Record> {
        None
    }

    /// Mutable structured-record view of the value, if it is one.
    fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
        None
    }

    /// Whether the value is merged field by field or assigned whole.
    fn kind(&self) -> FieldKind {
        if self.as_record().is_some() {
            FieldKind::Record
        } else {
            FieldKind::Leaf
        }
    }

    /// Overwrite `self` with `source`.
    ///
    /// Returns `false`, leaving `self` untouched, when `source` is not of a
    /// type `self` accepts. No conversion is attempted. Records never accept
    /// direct assignment; they are merged through [`Melt::as_record_mut`].
    fn assign(&mut self, _source: &dyn Melt) -> bool {
        false
    }
}

/// Field table of a structured record.
///
/// Implementations list every exposed field once, in declaration order, and
/// resolve the same names in [`Record::field_value`] and
/// [`Record::field_value_mut`]. Names are matched exactly.
pub trait Record {
    /// Exposed fields in declaration order.
    fn fields(&self) -> &'static [Field];

    /// Read access to the field called `name`.
    fn field_value(&self, name: &str) -> Option<&dyn Melt>;

    /// Write access to the field called `name`.
    ///
    /// Returns `None` for unknown names and for read-only fields.
    fn field_value_mut(&mut self, name: &str) -> Option<&mut dyn Melt>;

    /// Schema entry of the field called `name`.
    fn field(&self, name: &str) -> Option<&'static Field> {
        self.fields().iter().find(|field| field.name() == name)
    }
}
