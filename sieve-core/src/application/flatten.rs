// sieve-core/src/application/flatten.rs

use tracing::{debug, error, info, instrument};

use crate::domain::error::DomainError;
use crate::error::SieveError;
use crate::ports::frame::{ColumnShape, NestedFrame, Projection};

/// Flattens every struct and array column of `frame`.
///
/// Each pass lifts struct fields to top-level columns and explodes the array
/// columns found at the start of the pass. A pass strictly lowers the maximum
/// nesting depth, so the loop runs at most `max_nesting_depth()` times. A frame
/// without nested columns comes back untouched.
///
/// `column_name_prefix` only governs the first pass. Fields lifted by later
/// passes are always prefixed with their parent, so `a.b.c` without prefix
/// becomes `b_c`.
#[instrument(skip(frame))]
pub fn flatten<F: NestedFrame>(frame: F, column_name_prefix: bool) -> Result<F, SieveError> {
    let max_passes = frame.max_nesting_depth();
    let mut current = frame;
    let mut passes = 0;

    while current.has_nested_columns() {
        if passes >= max_passes {
            error!(passes, "Frame is still nested after the expected number of passes");
            return Err(DomainError::FlattenDidNotConverge { passes }.into());
        }
        let prefix = column_name_prefix || passes > 0;
        current = flatten_pass(current, prefix)?;
        passes += 1;
        debug!(pass = passes, depth = current.max_nesting_depth(), "Flatten pass done");
    }

    info!(passes, "Flattening finished");
    Ok(current)
}

fn flatten_pass<F: NestedFrame>(frame: F, column_name_prefix: bool) -> Result<F, SieveError> {
    let (projections, to_explode) = plan_pass(&frame.column_shapes(), column_name_prefix);

    let mut projected = frame.project(&projections)?;
    for column in &to_explode {
        projected = projected.explode_outer(column)?;
    }
    Ok(projected)
}

/// Projection list (struct columns replaced in place by their fields) and the
/// array columns to explode afterwards.
pub fn plan_pass(
    shapes: &[(String, ColumnShape)],
    column_name_prefix: bool,
) -> (Vec<Projection>, Vec<String>) {
    let mut projections = Vec::with_capacity(shapes.len());
    let mut to_explode = Vec::new();

    for (name, shape) in shapes {
        match shape {
            ColumnShape::Struct(fields) => {
                projections.extend(fields.iter().map(|field| Projection::Field {
                    parent: name.clone(),
                    field: field.clone(),
                    alias: flat_alias(name, field, column_name_prefix),
                }));
            }
            ColumnShape::Array => {
                to_explode.push(name.clone());
                projections.push(Projection::Keep(name.clone()));
            }
            ColumnShape::Scalar => projections.push(Projection::Keep(name.clone())),
        }
    }

    (projections, to_explode)
}

/// `<parent>_<field>` (or `<field>`), parentheses removed from the field name.
pub fn flat_alias(parent: &str, field: &str, column_name_prefix: bool) -> String {
    let cleaned: String = field.chars().filter(|c| !matches!(c, '(' | ')')).collect();
    if column_name_prefix {
        format!("{}_{}", parent, cleaned)
    } else {
        cleaned
    }
}
