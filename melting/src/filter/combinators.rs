//! Boolean combinators over filters.

use crate::Melt;
use crate::field::FieldDescriptor;

use super::FieldFilter;

/// Approves a pair only when both filters approve. See [`FieldFilterExt::and`].
#[derive(Clone, Copy, Debug, Default)]
pub struct And<A, B>(A, B);

/// Approves a pair when either filter approves. See [`FieldFilterExt::or`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Or<A, B>(A, B);

/// Inverts a filter. See [`FieldFilterExt::not`].
#[derive(Clone, Copy, Debug, Default)]
pub struct Not<F>(F);

/// Combinators available on every sized [`FieldFilter`].
///
/// # Examples
///
/// ```
/// use melting::{ExcludeFields, FieldFilterExt, filter::by_name};
///
/// let filter = ExcludeFields::new(["password"]).and(by_name(|name| !name.starts_with('_')));
/// # let _ = filter;
/// ```
pub trait FieldFilterExt: FieldFilter + Sized {
    /// Require both `self` and `other` to approve. `other` is not consulted
    /// once `self` rejects.
    fn and<G: FieldFilter>(self, other: G) -> And<Self, G> {
        And(self, other)
    }

    /// Require either `self` or `other` to approve. `other` is not consulted
    /// once `self` approves.
    fn or<G: FieldFilter>(self, other: G) -> Or<Self, G> {
        Or(self, other)
    }

    /// Invert the decision of `self`.
    fn not(self) -> Not<Self> {
        Not(self)
    }
}

impl<F: FieldFilter> FieldFilterExt for F {}

impl<A: FieldFilter, B: FieldFilter> FieldFilter for And<A, B> {
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        destination_field: &FieldDescriptor<'_>,
        source: &dyn Melt,
        destination: &dyn Melt,
    ) -> bool {
        self.0
            .should_merge(source_field, destination_field, source, destination)
            && self
                .1
                .should_merge(source_field, destination_field, source, destination)
    }
}

impl<A: FieldFilter, B: FieldFilter> FieldFilter for Or<A, B> {
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        destination_field: &FieldDescriptor<'_>,
        source: &dyn Melt,
        destination: &dyn Melt,
    ) -> bool {
        self.0
            .should_merge(source_field, destination_field, source, destination)
            || self
                .1
                .should_merge(source_field, destination_field, source, destination)
    }
}

impl<F: FieldFilter> FieldFilter for Not<F> {
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        destination_field: &FieldDescriptor<'_>,
        source: &dyn Melt,
        destination: &dyn Melt,
    ) -> bool {
        !self
            .0
            .should_merge(source_field, destination_field, source, destination)
    }
}
