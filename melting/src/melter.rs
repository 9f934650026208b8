//! Reusable melt configuration.
//!
//! [`Melter`] collects filters once and applies them to any number of melt
//! calls. Every registered filter must approve a field pair for it to be
//! merged; a `Melter` without filters approves everything.

use std::fmt;

use crate::Melt;
use crate::error::MeltResult;
use crate::field::FieldDescriptor;
use crate::filter::{ExcludeFields, ExcludePaths, FieldFilter, OnlyFields};
use crate::melt::melt_with_filter;
use crate::operand::Operand;

/// Builder holding the filters applied by [`Melter::melt`].
///
/// # Examples
///
/// ```
/// use melting::{Melt, Melter};
///
/// #[derive(Melt)]
/// struct Server {
///     host: String,
///     port: u16,
/// }
///
/// #[derive(Melt)]
/// struct Settings {
///     name: String,
///     server: Server,
/// }
///
/// let update = Settings {
///     name: "edge".into(),
///     server: Server { host: "example.org".into(), port: 8443 },
/// };
/// let mut live = Settings {
///     name: "core".into(),
///     server: Server { host: "localhost".into(), port: 8080 },
/// };
///
/// let melter = Melter::new().exclude_paths(["server.port"]);
/// melter.melt(&update, &mut live)?;
///
/// assert_eq!(live.name, "edge");
/// assert_eq!(live.server.host, "example.org");
/// assert_eq!(live.server.port, 8080);
/// # Ok::<(), melting::MeltError>(())
/// ```
#[derive(Default)]
pub struct Melter<'f> {
    filters: Vec<Box<dyn FieldFilter + Send + Sync + 'f>>,
}

impl<'f> Melter<'f> {
    /// Create a melter that merges every matched field.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            filters: Vec::new(),
        }
    }

    /// Add a filter. All added filters must approve a pair.
    #[must_use]
    pub fn filter<F>(mut self, filter: F) -> Self
    where
        F: FieldFilter + Send + Sync + 'f,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Skip fields with the given names at any depth.
    #[must_use]
    pub fn exclude<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter(ExcludeFields::new(names))
    }

    /// Skip fields at the given dotted paths.
    #[must_use]
    pub fn exclude_paths<I, S>(self, paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter(ExcludePaths::new(paths))
    }

    /// Merge only fields with the given names.
    #[must_use]
    pub fn only<I, S>(self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.filter(OnlyFields::new(names))
    }

    /// Number of registered filters.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.filters.len()
    }

    /// Whether no filter has been registered.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Melt `source` into `destination` using the registered filters.
    ///
    /// # Errors
    ///
    /// See [`crate::melt`].
    pub fn melt<'s, 'd>(
        &self,
        source: impl Into<Operand<'s>>,
        destination: impl Into<Operand<'d>>,
    ) -> MeltResult {
        melt_with_filter(source, destination, self)
    }
}

impl FieldFilter for Melter<'_> {
    fn should_merge(
        &self,
        source_field: &FieldDescriptor<'_>,
        destination_field: &FieldDescriptor<'_>,
        source: &dyn Melt,
        destination: &dyn Melt,
    ) -> bool {
        self.filters
            .iter()
            .all(|filter| filter.should_merge(source_field, destination_field, source, destination))
    }
}

impl fmt::Debug for Melter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Melter")
            .field("filters", &self.filters.len())
            .finish()
    }
}
