//! Recursive field matcher.
//!
//! Walks the destination's fields, looks each one up by name in the source,
//! consults the filter, then either recurses into nested records or assigns
//! leaves. Errors abort the walk immediately; fields already written stay
//! written.

use tracing::trace;

use crate::error::{MeltError, MeltResult};
use crate::field::{Field, FieldDescriptor, FieldPath};
use crate::filter::FieldFilter;
use crate::value::{Melt, Record};

/// Dispatch on the destination's shape.
pub(super) fn melt_value<F>(
    source: &dyn Melt,
    destination: &mut dyn Melt,
    filter: &F,
    path: &mut FieldPath,
) -> MeltResult
where
    F: FieldFilter + ?Sized,
{
    let destination_type = destination.type_name();
    match destination.as_record_mut() {
        Some(destination_record) => match source.as_record() {
            Some(source_record) => melt_record(source_record, destination_record, filter, path),
            None => Err(MeltError::TypeMismatch {
                path: path.clone(),
                source_type: source.type_name(),
                destination_type,
            }),
        },
        None => melt_leaf(source, destination, path),
    }
}

fn melt_record<F>(
    source: &dyn Record,
    destination: &mut dyn Record,
    filter: &F,
    path: &mut FieldPath,
) -> MeltResult
where
    F: FieldFilter + ?Sized,
{
    for field in destination.fields() {
        let name = field.name();
        let (Some(source_field), Some(source_value)) = (source.field(name), source.field_value(name))
        else {
            trace!(%path, field = name, "no matching source field");
            continue;
        };

        path.push(name);
        let result = melt_field(source_field, source_value, field, destination, filter, path);
        path.pop();
        result?;
    }
    Ok(())
}

fn melt_field<F>(
    source_field: &'static Field,
    source_value: &dyn Melt,
    destination_field: &'static Field,
    destination: &mut dyn Record,
    filter: &F,
    path: &mut FieldPath,
) -> MeltResult
where
    F: FieldFilter + ?Sized,
{
    let name = destination_field.name();
    let approved = match destination.field_value(name) {
        Some(current) => filter.should_merge(
            &FieldDescriptor::new(source_field, source_value.kind(), path),
            &FieldDescriptor::new(destination_field, current.kind(), path),
            source_value,
            current,
        ),
        // A listed field without a readable value is hidden from matching.
        None => return Ok(()),
    };
    if !approved {
        trace!(%path, "field rejected by filter");
        return Ok(());
    }

    let target = destination
        .field_value_mut(name)
        .filter(|_| destination_field.is_settable())
        .ok_or_else(|| MeltError::not_settable(path))?;
    trace!(%path, kind = ?target.kind(), "merging field");
    melt_value(source_value, target, filter, path)
}

/// Overwrite a leaf, rejecting incompatible types.
fn melt_leaf(source: &dyn Melt, destination: &mut dyn Melt, path: &FieldPath) -> MeltResult {
    if destination.assign(source) {
        Ok(())
    } else {
        Err(MeltError::type_mismatch(path, source, destination))
    }
}
