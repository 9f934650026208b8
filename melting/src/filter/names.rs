//! Filters that decide by field name or path.

use std::collections::BTreeSet;

use crate::Melt;
use crate::field::FieldDescriptor;

use super::FieldFilter;

/// Rejects every field whose name appears in the set, at any depth.
///
/// # Examples
///
/// ```
/// use melting::{ExcludeFields, Melt, melt_with_filter};
///
/// #[derive(Melt)]
/// struct Patch {
///     name: String,
///     id: u64,
/// }
///
/// #[derive(Melt)]
/// struct Account {
///     id: u64,
///     name: String,
/// }
///
/// let patch = Patch { name: "renamed".into(), id: 99 };
/// let mut account = Account { id: 1, name: "original".into() };
/// melt_with_filter(&patch, &mut account, &ExcludeFields::new(["id"]))?;
///
/// assert_eq!(account.id, 1);
/// assert_eq!(account.name, "renamed");
/// # Ok::<(), melting::MeltError>(())
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExcludeFields {
    names: BTreeSet<String>,
}

impl ExcludeFields {
    /// Exclude the given field names.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether `name` is excluded.
    #[must_use]
    pub fn excludes(&self, name: &str) -> bool {
        self.names.contains(name)
    }
}

impl FieldFilter for ExcludeFields {
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        _destination_field: &FieldDescriptor<'_>,
        _source: &dyn Melt,
        _destination: &dyn Melt,
    ) -> bool {
        !self.excludes(source_field.name())
    }
}

/// Rejects fields by dotted path from the merge root, such as
/// `"server.port"`.
///
/// Unlike [`ExcludeFields`], a nested field is only rejected at the listed
/// location; other fields sharing its name are still merged. Excluding a
/// record field skips everything beneath it.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct ExcludePaths {
    paths: Vec<String>,
}

impl ExcludePaths {
    /// Exclude the given dotted paths.
    #[must_use]
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }
}

impl FieldFilter for ExcludePaths {
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        _destination_field: &FieldDescriptor<'_>,
        _source: &dyn Melt,
        _destination: &dyn Melt,
    ) -> bool {
        let path = source_field.path();
        !self.paths.iter().any(|excluded| path.matches(excluded))
    }
}

/// Merges only fields whose name appears in the set.
///
/// Nested records must be listed themselves for their fields to be reached.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct OnlyFields {
    names: BTreeSet<String>,
}

impl OnlyFields {
    /// Allow only the given field names.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            names: names.into_iter().map(Into::into).collect(),
        }
    }
}

impl FieldFilter for OnlyFields {
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        _destination_field: &FieldDescriptor<'_>,
        _source: &dyn Melt,
        _destination: &dyn Melt,
    ) -> bool {
        self.names.contains(source_field.name())
    }
}

/// Filter built from a predicate over the field name. See [`by_name`].
#[derive(Clone, Copy, Debug)]
pub struct ByName<F> {
    predicate: F,
}

/// Build a filter from a predicate over the field name.
///
/// # Examples
///
/// ```
/// use melting::{FieldFilter, filter::by_name};
///
/// let public_only = by_name(|name| !name.starts_with('_'));
/// # fn assert_filter<F: FieldFilter>(_: &F) {}
/// # assert_filter(&public_only);
/// ```
#[must_use]
pub const fn by_name<F>(predicate: F) -> ByName<F>
where
    F: Fn(&str) -> bool,
{
    ByName { predicate }
}

impl<F> FieldFilter for ByName<F>
where
    F: Fn(&str) -> bool,
{
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        _destination_field: &FieldDescriptor<'_>,
        _source: &dyn Melt,
        _destination: &dyn Melt,
    ) -> bool {
        (self.predicate)(source_field.name())
    }
}
