// sieve-core/src/infrastructure/config/quality.rs

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

use crate::domain::project::PipelineContext;
use crate::domain::quality::QualityRule;
use crate::infrastructure::config::loader::load_config;
use crate::infrastructure::error::InfrastructureError;

/// `layer.<layer>.tables.<table>: [ {type, field}, ... ]`
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct QualityCheckFile {
    pub layer: HashMap<String, LayerQuality>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct LayerQuality {
    pub tables: HashMap<String, Option<Vec<QualityRule>>>,
}

impl QualityCheckFile {
    /// Rules of one table. An unknown table has no rules; an unknown layer is an error.
    pub fn table_rules(
        &self,
        layer: &str,
        table_name: &str,
    ) -> Result<Vec<QualityRule>, InfrastructureError> {
        let layer_config = self.layer.get(layer).ok_or_else(|| {
            InfrastructureError::ConfigError(format!(
                "layer '{}' is not declared in the quality check file",
                layer
            ))
        })?;

        Ok(layer_config
            .tables
            .get(table_name)
            .cloned()
            .flatten()
            .unwrap_or_default())
    }
}

#[instrument(skip(ctx), fields(layer = %ctx.layer))]
pub fn load_table_rules(
    ctx: &PipelineContext,
    table_name: &str,
) -> Result<Vec<QualityRule>, InfrastructureError> {
    let file: QualityCheckFile = load_config(&ctx.quality_check_path())?;
    let rules = file.table_rules(&ctx.layer, table_name)?;
    debug!(rules = rules.len(), "Quality rules loaded");
    Ok(rules)
}
