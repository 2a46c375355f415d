// sieve/src/commands/mod.rs

pub mod actions;
pub mod checks;
pub mod flatten;
pub mod quarantine;
pub mod schema;
pub mod validate;

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use std::path::Path;
use tracing::info;

use sieve_core::PipelineContext;
use sieve_core::infrastructure::config::load_project_config;

/// Pipeline context from `sieve.yaml`, with `--layer` and `--quality-check-file`
/// applied last.
pub fn resolve_context(
    project_dir: &Path,
    layer: Option<String>,
    quality_check_file: Option<String>,
) -> anyhow::Result<PipelineContext> {
    let config = load_project_config(project_dir)?;
    let mut ctx = config.pipeline;
    if let Some(layer) = layer {
        ctx.layer = layer;
    }
    if let Some(file) = quality_check_file {
        ctx = ctx.with_quality_check_file(file);
    }
    ctx.check()?;

    info!(
        project = %config.name,
        layer = %ctx.layer,
        config = %ctx.config_path,
        quality_check_file = %ctx.quality_check_file,
        "Context resolved"
    );
    Ok(ctx)
}

pub(crate) fn new_table(headers: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(
            headers
                .iter()
                .map(|h| Cell::new(h).add_attribute(Attribute::Bold)),
        );
    table
}
