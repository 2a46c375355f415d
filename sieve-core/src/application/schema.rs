// sieve-core/src/application/schema.rs

use datafusion::arrow::datatypes::{DataType, Schema};
use std::path::PathBuf;
use tracing::{error, info, instrument, warn};
use walkdir::WalkDir;

use crate::domain::project::PipelineContext;
use crate::error::SieveError;
use crate::infrastructure::adapters::arrow_schema;
use crate::infrastructure::config::load_schema_file;
use crate::infrastructure::error::InfrastructureError;

const SCHEMA_SUFFIX: &str = "_schema.yml";

/// Loads `<record_type>_schema.yml` of the context's layer and builds the Arrow
/// type of `action_type`'s schema.
#[instrument(skip(ctx), fields(layer = %ctx.layer))]
pub fn load_schema_for_action(
    ctx: &PipelineContext,
    record_type: &str,
    action_type: &str,
) -> Result<DataType, SieveError> {
    let file = load_schema_file(ctx, record_type).inspect_err(|e| {
        error!(record_type, "Schema file could not be loaded: {}", e);
    })?;

    let description = file
        .describe_action(record_type, action_type)
        .inspect_err(|e| {
            error!(record_type, action_type, "Schema could not be described: {}", e);
        })?;

    let data_type = arrow_schema::build(&description);
    info!(
        record_type,
        action_type,
        depth = arrow_schema::nesting_depth(&data_type),
        "Schema built"
    );
    Ok(data_type)
}

/// Same as [`load_schema_for_action`], as a table schema (top-level struct only).
pub fn load_table_schema_for_action(
    ctx: &PipelineContext,
    record_type: &str,
    action_type: &str,
) -> Result<Schema, SieveError> {
    let file = load_schema_file(ctx, record_type)?;
    let description = file.describe_action(record_type, action_type)?;
    Ok(arrow_schema::build_schema(&description)?)
}

// --- LAYER VALIDATION ---

#[derive(Debug, Default)]
pub struct SchemaValidationReport {
    /// `(record_type, action_type)` pairs that built successfully.
    pub valid: Vec<(String, String)>,
    /// Files or actions that failed, with the reason.
    pub invalid: Vec<SchemaIssue>,
}

#[derive(Debug)]
pub struct SchemaIssue {
    pub file: PathBuf,
    pub action_type: Option<String>,
    pub reason: String,
}

impl SchemaValidationReport {
    pub fn is_ok(&self) -> bool {
        self.invalid.is_empty()
    }
}

/// Parses every `*_schema.yml` of the layer and builds every action's schema.
/// Failures are collected, not returned, so one broken file does not hide the others.
#[instrument(skip(ctx), fields(layer = %ctx.layer))]
pub fn validate_layer_schemas(ctx: &PipelineContext) -> Result<SchemaValidationReport, SieveError> {
    let layer_dir = ctx.layer_dir();
    if !layer_dir.is_dir() {
        return Err(InfrastructureError::ConfigNotFound(layer_dir.display().to_string()).into());
    }

    let mut files: Vec<PathBuf> = WalkDir::new(&layer_dir)
        .max_depth(1)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(SCHEMA_SUFFIX))
        })
        .collect();
    files.sort();

    let mut report = SchemaValidationReport::default();

    for path in files {
        let Some(record_type) = path
            .file_name()
            .and_then(|n| n.to_str())
            .and_then(|n| n.strip_suffix(SCHEMA_SUFFIX))
            .map(str::to_string)
        else {
            continue;
        };

        let file = match load_schema_file(ctx, &record_type) {
            Ok(f) => f,
            Err(e) => {
                warn!(file = ?path, "Invalid schema file: {}", e);
                report.invalid.push(SchemaIssue {
                    file: path,
                    action_type: None,
                    reason: e.to_string(),
                });
                continue;
            }
        };

        for action_type in file.action_types.keys() {
            match file.describe_action(&record_type, action_type) {
                Ok(_) => report.valid.push((record_type.clone(), action_type.clone())),
                Err(e) => {
                    warn!(file = ?path, action_type, "Invalid schema: {}", e);
                    report.invalid.push(SchemaIssue {
                        file: path.clone(),
                        action_type: Some(action_type.clone()),
                        reason: e.to_string(),
                    });
                }
            }
        }
    }

    info!(
        valid = report.valid.len(),
        invalid = report.invalid.len(),
        "Layer schemas validated"
    );
    Ok(report)
}
