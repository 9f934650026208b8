//! Entry points validating operands before handing over to the matcher.

mod matcher;

use tracing::debug_span;

use crate::error::{MeltError, MeltResult};
use crate::field::FieldPath;
use crate::filter::{AcceptAll, FieldFilter};
use crate::operand::Operand;

/// Melt `source` into `destination`, merging every matched field.
///
/// Fields are matched by exact name. Nested records are merged field by
/// field; every other matched field is overwritten by a clone of the source
/// value. Destination fields missing from the source keep their value and
/// source fields missing from the destination are ignored.
///
/// # Examples
///
/// ```
/// use melting::{Melt, melt};
///
/// #[derive(Debug, Melt)]
/// struct Source {
///     f1: i32,
///     f2: String,
/// }
///
/// #[derive(Debug, Melt)]
/// struct Dest {
///     f1: i32,
///     f3: f32,
///     f2: String,
/// }
///
/// let source = Source { f1: 3, f2: "a".into() };
/// let mut dest = Dest { f1: 4, f3: 3.5, f2: "b".into() };
/// melt(&source, &mut dest)?;
///
/// assert_eq!((dest.f1, dest.f3, dest.f2.as_str()), (3, 3.5, "a"));
/// # Ok::<(), melting::MeltError>(())
/// ```
///
/// # Errors
///
/// Returns [`MeltError::NotAReference`] when `destination` is not an
/// exclusive reference, [`MeltError::NotSettable`] when a matched
/// destination field is read-only, and [`MeltError::TypeMismatch`] when a
/// matched pair has incompatible types. Fields merged before a failure stay
/// merged.
pub fn melt<'s, 'd>(
    source: impl Into<Operand<'s>>,
    destination: impl Into<Operand<'d>>,
) -> MeltResult {
    melt_with_filter(source, destination, &AcceptAll)
}

/// Melt `source` into `destination`, consulting `filter` before each matched
/// field.
///
/// A field pair the filter rejects is skipped entirely: the destination
/// field keeps its value and, for records, nothing beneath it is visited.
///
/// # Examples
///
/// ```
/// use melting::{ExcludeFields, Melt, melt_with_filter};
///
/// #[derive(Melt)]
/// struct Simple {
///     f1: String,
///     f2: bool,
///     f3: i32,
/// }
///
/// let source = Simple { f1: "a".into(), f2: true, f3: 7 };
/// let mut dest = Simple { f1: "b".into(), f2: false, f3: 8 };
/// melt_with_filter(&source, &mut dest, &ExcludeFields::new(["f2"]))?;
///
/// assert_eq!((dest.f1.as_str(), dest.f2, dest.f3), ("a", false, 7));
/// # Ok::<(), melting::MeltError>(())
/// ```
///
/// # Errors
///
/// See [`melt`].
pub fn melt_with_filter<'s, 'd, F>(
    source: impl Into<Operand<'s>>,
    destination: impl Into<Operand<'d>>,
    filter: &F,
) -> MeltResult
where
    F: FieldFilter + ?Sized,
{
    let target = destination
        .into()
        .into_exclusive()
        .map_err(|operand| MeltError::not_a_reference(&operand))?;
    let operand = source.into();
    let value = operand.value();

    let span = debug_span!(
        "melt",
        source = value.type_name(),
        destination = target.type_name()
    );
    let _entered = span.enter();

    matcher::melt_value(value, target, filter, &mut FieldPath::root())
}

#[cfg(test)]
mod tests;
