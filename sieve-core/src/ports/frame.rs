// sieve-core/src/ports/frame.rs

// What the flattener needs from a tabular engine, without knowing which engine.
// DataFusion's DataFrame is the production adapter (infrastructure/adapters/datafusion.rs).

use crate::error::SieveError;

/// Shape of a top-level column, as far as flattening is concerned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnShape {
    /// Nested record, with the names of its fields in declaration order.
    Struct(Vec<String>),
    /// List of a single element type.
    Array,
    /// Anything else (maps included).
    Scalar,
}

impl ColumnShape {
    pub fn is_nested(&self) -> bool {
        !matches!(self, Self::Scalar)
    }
}

/// One output column of a projection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Projection {
    /// Pass the column through under its own name.
    Keep(String),
    /// Lift `parent.field` to a top-level column named `alias`.
    Field {
        parent: String,
        field: String,
        alias: String,
    },
}

pub trait NestedFrame: Sized {
    /// `(column name, shape)` pairs in column order.
    fn column_shapes(&self) -> Vec<(String, ColumnShape)>;

    /// Deepest struct/array nesting over all columns. A flat frame is 0.
    fn max_nesting_depth(&self) -> usize;

    /// New frame with exactly these columns, in this order.
    fn project(self, projections: &[Projection]) -> Result<Self, SieveError>;

    /// One row per element of `column`, same column name. Null or empty
    /// arrays keep their row, with a null value.
    fn explode_outer(self, column: &str) -> Result<Self, SieveError>;

    fn has_nested_columns(&self) -> bool {
        self.column_shapes()
            .iter()
            .any(|(_, shape)| shape.is_nested())
    }
}
