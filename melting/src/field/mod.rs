//! Field schema entries and the descriptors handed to filters.
//!
//! A [`Field`] is the static part of a record's schema, emitted as a `const`
//! table by `#[derive(Melt)]`. A [`FieldDescriptor`] pairs that entry with
//! facts only known while a merge is running: the runtime shape of the value
//! and where the field sits relative to the merge root.

mod path;

pub use path::FieldPath;

/// Shape of a value taking part in a merge.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum FieldKind {
    /// A structured record merged field by field.
    Record,
    /// Any other value, merged by direct assignment.
    Leaf,
}

/// Static schema entry for a single record field.
///
/// # Examples
///
/// ```
/// use melting::Field;
///
/// const FIELDS: &[Field] = &[Field::new("id", "u64").read_only(), Field::new("name", "String")];
///
/// assert_eq!(FIELDS[0].name(), "id");
/// assert!(!FIELDS[0].is_settable());
/// assert!(FIELDS[1].is_settable());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Field {
    name: &'static str,
    type_name: &'static str,
    settable: bool,
}

impl Field {
    /// Describe a writable field called `name` declared with `type_name`.
    #[must_use]
    pub const fn new(name: &'static str, type_name: &'static str) -> Self {
        Self {
            name,
            type_name,
            settable: true,
        }
    }

    /// Mark the field as readable only.
    ///
    /// Read-only fields still act as merge sources, but matching them as a
    /// destination fails with [`crate::MeltError::NotSettable`].
    #[must_use]
    pub const fn read_only(self) -> Self {
        Self {
            settable: false,
            ..self
        }
    }

    /// Field name used for matching.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Type of the field as written in its declaration.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the field accepts writes.
    #[must_use]
    pub const fn is_settable(&self) -> bool {
        self.settable
    }
}

/// Description of one side of a matched field pair, passed to
/// [`crate::FieldFilter::should_merge`].
#[derive(Clone, Copy, Debug)]
pub struct FieldDescriptor<'a> {
    field: &'static Field,
    kind: FieldKind,
    path: &'a FieldPath,
}

impl<'a> FieldDescriptor<'a> {
    /// Pair a schema entry with its runtime shape and location.
    #[must_use]
    pub const fn new(field: &'static Field, kind: FieldKind, path: &'a FieldPath) -> Self {
        Self { field, kind, path }
    }

    /// Static schema entry backing this descriptor.
    #[must_use]
    pub const fn field(&self) -> &'static Field {
        self.field
    }

    /// Field name used for matching.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.field.name()
    }

    /// Type of the field as written in its declaration.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.field.type_name()
    }

    /// Runtime shape of the field's value.
    #[must_use]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Whether the field's value is a nested record.
    #[must_use]
    pub const fn is_record(&self) -> bool {
        matches!(self.kind, FieldKind::Record)
    }

    /// Whether the field accepts writes.
    #[must_use]
    pub const fn is_settable(&self) -> bool {
        self.field.is_settable()
    }

    /// Location of the field relative to the merge root, including the
    /// field's own name.
    #[must_use]
    pub const fn path(&self) -> &'a FieldPath {
        self.path
    }
}
