//! Dotted paths locating a field relative to the merge root.

use std::fmt;

/// Ordered field names leading from the merge root to a nested field.
///
/// The matcher pushes a segment before descending into a field and pops it
/// on the way back out, so a path observed during a merge always ends with
/// the field currently being considered.
///
/// # Examples
///
/// ```
/// use melting::FieldPath;
///
/// let mut path = FieldPath::root();
/// assert_eq!(path.to_string(), "<root>");
///
/// path.push("server");
/// path.push("port");
/// assert_eq!(path.to_string(), "server.port");
/// assert_eq!(path.last(), Some("port"));
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct FieldPath {
    segments: Vec<&'static str>,
}

impl FieldPath {
    /// The empty path, naming the merge root itself.
    #[must_use]
    pub const fn root() -> Self {
        Self {
            segments: Vec::new(),
        }
    }

    /// Append a field name.
    pub fn push(&mut self, segment: &'static str) {
        self.segments.push(segment);
    }

    /// Remove and return the last field name.
    pub fn pop(&mut self) -> Option<&'static str> {
        self.segments.pop()
    }

    /// Name of the innermost field, or `None` at the root.
    #[must_use]
    pub fn last(&self) -> Option<&'static str> {
        self.segments.last().copied()
    }

    /// Number of segments; zero at the root.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.segments.len()
    }

    /// Whether the path names the merge root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    /// Iterate the segments from the root outwards.
    pub fn segments(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.segments.iter().copied()
    }

    /// Whether the path spells `dotted`, e.g. `"server.port"`.
    #[must_use]
    pub fn matches(&self, dotted: &str) -> bool {
        let mut parts = dotted.split('.');
        self.segments()
            .all(|segment| parts.next() == Some(segment))
            && parts.next().is_none()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.segments.is_empty() {
            return f.write_str("<root>");
        }
        for (index, segment) in self.segments.iter().enumerate() {
            if index > 0 {
                f.write_str(".")?;
            }
            f.write_str(segment)?;
        }
        Ok(())
    }
}

impl FromIterator<&'static str> for FieldPath {
    fn from_iter<I: IntoIterator<Item = &'static str>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}
