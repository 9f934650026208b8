//! Merge structs of different types by matching field names.
//!
//! `melting` copies the fields a source value shares with a destination
//! value, recursing into nested records and leaving everything else alone:
//!
//! - a field present in both is overwritten in the destination;
//! - a field present only in the destination keeps its value;
//! - a field present only in the source is ignored.
//!
//! Field order does not matter. Records describe their fields through the
//! [`Record`] trait, normally generated with `#[derive(Melt)]`; every other
//! value is a leaf assigned whole, and only from a value of exactly the same
//! type.
//!
//! ```
//! use melting::{Melt, melt};
//!
//! #[derive(Melt)]
//! struct Source {
//!     f1: i32,
//!     f2: String,
//! }
//!
//! #[derive(Melt)]
//! struct Dest {
//!     f1: i32,
//!     f3: f32,
//!     f2: String,
//! }
//!
//! let source = Source { f1: 3, f2: "a".into() };
//! let mut dest = Dest { f1: 4, f3: 3.5, f2: "b".into() };
//!
//! // `f1` and `f2` come from the source; `f3` is left alone.
//! melt(&source, &mut dest)?;
//! assert_eq!(dest.f1, 3);
//! assert_eq!(dest.f2, "a");
//! # Ok::<(), melting::MeltError>(())
//! ```
//!
//! A merge is not transactional: when it fails part way, fields merged
//! before the failure keep their new values.

// Lets derive output refer to `::melting` from inside this crate.
extern crate self as melting;

pub use melting_macros::Melt;

mod error;
pub mod field;
pub mod filter;
mod melt;
mod melter;
mod operand;
pub mod value;

pub use error::{MeltError, MeltResult};
pub use field::{Field, FieldDescriptor, FieldKind, FieldPath};
pub use filter::{
    AcceptAll, ExcludeFields, ExcludePaths, FieldFilter, FieldFilterExt, OnlyFields,
};
pub use melt::{melt, melt_with_filter};
pub use melter::Melter;
pub use operand::{Operand, OperandKind};
pub use value::{Melt, Record, assign_cloned};
