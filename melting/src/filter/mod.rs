//! The filter hook consulted before each matched field is merged.
//!
//! A [`FieldFilter`] can veto individual field pairs without changing how
//! the rest of the merge behaves. The default, [`AcceptAll`], approves every
//! pair. This module also provides name- and path-based filters and the
//! [`FieldFilterExt`] combinators.

mod combinators;
mod names;

pub use combinators::{And, FieldFilterExt, Not, Or};
pub use names::{ByName, ExcludeFields, ExcludePaths, OnlyFields, by_name};

use crate::Melt;
use crate::field::FieldDescriptor;

/// Predicate deciding whether a matched field pair is merged.
///
/// Filters are invoked synchronously, once per matched pair, before the
/// matcher recurses into or assigns the destination field. Implementations
/// are expected to be free of side effects; the matcher does not check this.
///
/// References and boxes of filters are filters too, so a filter owned
/// elsewhere can be lent to a [`crate::Melter`] or a combinator. Functions
/// and closures become filters through [`from_fn`].
pub trait FieldFilter {
    /// Returns `true` when the pair should be merged.
    ///
    /// `source_field` and `destination_field` share a name and path; their
    /// kinds and declared types may differ. `source` and `destination` are
    /// the current field values.
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        destination_field: &FieldDescriptor<'_>,
        source: &dyn Melt,
        destination: &dyn Melt,
    ) -> bool;
}

/// Filter approving every field pair.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct AcceptAll;

impl FieldFilter for AcceptAll {
    fn should_merge(
        &self,
        _source_field: &FieldDescriptor<'_>,
        _destination_field: &FieldDescriptor<'_>,
        _source: &dyn Melt,
        _destination: &dyn Melt,
    ) -> bool {
        true
    }
}

impl<F: FieldFilter + ?Sized> FieldFilter for &F {
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        destination_field: &FieldDescriptor<'_>,
        source: &dyn Melt,
        destination: &dyn Melt,
    ) -> bool {
        (**self).should_merge(source_field, destination_field, source, destination)
    }
}

impl<F: FieldFilter + ?Sized> FieldFilter for Box<F> {
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        destination_field: &FieldDescriptor<'_>,
        source: &dyn Melt,
        destination: &dyn Melt,
    ) -> bool {
        (**self).should_merge(source_field, destination_field, source, destination)
    }
}

/// Filter built from a function over the full field pair. See [`from_fn`].
#[derive(Clone, Copy, Debug)]
pub struct FromFn<F> {
    predicate: F,
}

/// Build a filter from a function or closure taking the same arguments as
/// [`FieldFilter::should_merge`].
///
/// # Examples
///
/// ```
/// use melting::{FieldDescriptor, Melt, Melter, filter::from_fn};
///
/// fn skip_records(
///     source: &FieldDescriptor<'_>,
///     _destination: &FieldDescriptor<'_>,
///     _source_value: &dyn Melt,
///     _destination_value: &dyn Melt,
/// ) -> bool {
///     !source.is_record()
/// }
///
/// let melter = Melter::new().filter(from_fn(skip_records));
/// assert_eq!(melter.len(), 1);
/// ```
#[must_use]
pub const fn from_fn<F>(predicate: F) -> FromFn<F>
where
    F: Fn(&FieldDescriptor<'_>, &FieldDescriptor<'_>, &dyn Melt, &dyn Melt) -> bool,
{
    FromFn { predicate }
}

impl<F> FieldFilter for FromFn<F>
where
    F: Fn(&FieldDescriptor<'_>, &FieldDescriptor<'_>, &dyn Melt, &dyn Melt) -> bool,
{
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        destination_field: &FieldDescriptor<'_>,
        source: &dyn Melt,
        destination: &dyn Melt,
    ) -> bool {
        (self.predicate)(source_field, destination_field, source, destination)
    }
}
