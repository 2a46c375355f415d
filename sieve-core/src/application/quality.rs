// sieve-core/src/application/quality.rs

use tracing::{info, instrument, warn};

use crate::domain::project::PipelineContext;
use crate::domain::quality::{QualityCheckSet, QuarantineRuleSet};
use crate::error::SieveError;
use crate::infrastructure::config::load_table_rules;

/// Quality checks of `table_name` in the context's layer, in declared order.
/// Any failure is wrapped with the table name.
#[instrument(skip(ctx), fields(layer = %ctx.layer))]
pub fn compile_checks(
    ctx: &PipelineContext,
    table_name: &str,
) -> Result<QualityCheckSet, SieveError> {
    let wrap = |source: SieveError| SieveError::QualityChecks {
        table: table_name.to_string(),
        source: Box::new(source),
    };

    let rules = load_table_rules(ctx, table_name).map_err(|e| wrap(e.into()))?;
    let checks = QualityCheckSet::compile(&rules).map_err(|e| wrap(e.into()))?;

    info!(checks = checks.len(), "Quality checks compiled");
    Ok(checks)
}

/// Quarantine predicate of `table_name`: a row is quarantined when any check fails.
#[instrument(skip(ctx), fields(layer = %ctx.layer))]
pub fn derive_quarantine(
    ctx: &PipelineContext,
    table_name: &str,
) -> Result<QuarantineRuleSet, SieveError> {
    let checks = compile_checks(ctx, table_name)?;
    let rules = QuarantineRuleSet::derive(&checks);

    if rules.is_degenerate() {
        warn!(
            predicate = rules.invalid_data(),
            "No quality checks for this table, the quarantine predicate is not valid SQL"
        );
    }
    Ok(rules)
}
