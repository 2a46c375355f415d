// sieve-core/src/infrastructure/adapters/datafusion.rs

use std::path::Path;
use std::sync::Arc;

use datafusion::arrow::datatypes::{DataType, Schema};
use datafusion::arrow::record_batch::RecordBatch;
use datafusion::common::UnnestOptions;
use datafusion::dataframe::DataFrameWriteOptions;
use datafusion::error::DataFusionError;
use datafusion::functions::core::expr_ext::FieldAccessor;
use datafusion::functions_nested::expr_fn::cardinality;
use datafusion::logical_expr::when;
use datafusion::prelude::*;
use datafusion::scalar::ScalarValue;
use tracing::{debug, info, instrument};

// Hexagonal Imports
use crate::error::SieveError;
use crate::infrastructure::adapters::arrow_schema::nesting_depth;
use crate::infrastructure::error::InfrastructureError;
use crate::ports::frame::{ColumnShape, NestedFrame, Projection};

impl NestedFrame for DataFrame {
    fn column_shapes(&self) -> Vec<(String, ColumnShape)> {
        self.schema()
            .fields()
            .iter()
            .map(|field| (field.name().clone(), shape_of(field.data_type())))
            .collect()
    }

    fn max_nesting_depth(&self) -> usize {
        self.schema()
            .fields()
            .iter()
            .map(|field| nesting_depth(field.data_type()))
            .max()
            .unwrap_or(0)
    }

    fn project(self, projections: &[Projection]) -> Result<Self, SieveError> {
        let exprs: Vec<Expr> = projections.iter().map(projection_expr).collect();
        self.select(exprs)
            .map_err(|e| operator_failure("select", e))
    }

    fn explode_outer(self, column: &str) -> Result<Self, SieveError> {
        let options = UnnestOptions::new().with_preserve_nulls(true);
        null_empty_arrays(self, column)
            .and_then(|df| df.unnest_columns_with_options(&[column], options))
            .map_err(|e| operator_failure("explode_outer", e))
    }
}

// preserve_nulls only keeps null arrays, an empty one would lose its row.
fn null_empty_arrays(df: DataFrame, column: &str) -> datafusion::error::Result<DataFrame> {
    let data_type = df
        .schema()
        .field_with_unqualified_name(column)?
        .data_type()
        .clone();
    let typed_null = ScalarValue::try_from(&data_type)?;
    let expr = when(cardinality(ident(column)).eq(lit(0u64)), lit(typed_null))
        .otherwise(ident(column))?;
    df.with_column(column, expr)
}

fn shape_of(data_type: &DataType) -> ColumnShape {
    match data_type {
        DataType::Struct(fields) => {
            ColumnShape::Struct(fields.iter().map(|f| f.name().clone()).collect())
        }
        DataType::List(_) | DataType::LargeList(_) | DataType::FixedSizeList(_, _) => {
            ColumnShape::Array
        }
        _ => ColumnShape::Scalar,
    }
}

// `ident` keeps dots and parentheses in names instead of parsing them as qualifiers.
fn projection_expr(projection: &Projection) -> Expr {
    match projection {
        Projection::Keep(name) => ident(name),
        Projection::Field {
            parent,
            field,
            alias,
        } => ident(parent).field(field.as_str()).alias(alias),
    }
}

fn operator_failure(operation: &str, source: DataFusionError) -> SieveError {
    SieveError::Infrastructure(InfrastructureError::FlattenOperatorFailure {
        operation: operation.to_string(),
        source,
    })
}

// --- I/O HELPERS (CLI) ---

/// Registers an empty frame with the given schema. Useful to preview what a
/// configured schema looks like once flattened.
pub fn empty_frame(ctx: &SessionContext, schema: Schema) -> Result<DataFrame, SieveError> {
    let batch = RecordBatch::new_empty(Arc::new(schema));
    Ok(ctx.read_batch(batch)?)
}

/// Reads a CSV, Parquet or newline-delimited JSON file, chosen by extension.
#[instrument(skip(ctx))]
pub async fn read_dataset(ctx: &SessionContext, path: &Path) -> Result<DataFrame, SieveError> {
    let path_str = path.to_str().ok_or_else(|| {
        SieveError::InternalError(format!("Invalid dataset path: {:?}", path))
    })?;
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    debug!(extension = %extension, "Reading dataset");

    let df = match extension.as_str() {
        "csv" => ctx.read_csv(path_str, CsvReadOptions::new()).await?,
        "parquet" => ctx.read_parquet(path_str, ParquetReadOptions::default()).await?,
        "json" | "ndjson" | "jsonl" => {
            let file_extension = format!(".{}", extension);
            let options = NdJsonReadOptions::default().file_extension(&file_extension);
            ctx.read_json(path_str, options).await?
        }
        other => {
            return Err(SieveError::Infrastructure(InfrastructureError::ConfigError(
                format!(
                    "Unsupported dataset extension '{}' (expected csv, parquet, json, ndjson or jsonl)",
                    other
                ),
            )));
        }
    };

    info!(path = ?path, columns = df.schema().fields().len(), "Dataset loaded");
    Ok(df)
}

pub async fn write_parquet(df: DataFrame, path: &Path) -> Result<(), SieveError> {
    let path_str = path
        .to_str()
        .ok_or_else(|| SieveError::InternalError("Invalid parquet path".into()))?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent)?;
    }

    df.write_parquet(path_str, DataFrameWriteOptions::new(), None)
        .await?;
    info!(path = ?path, "Flattened dataset written");
    Ok(())
}
