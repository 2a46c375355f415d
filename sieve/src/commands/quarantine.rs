// sieve/src/commands/quarantine.rs
//
// USE CASE: Derive the quarantine rule of a table.

use sieve_core::PipelineContext;
use sieve_core::application::derive_quarantine;

use crate::cli::OutputFormat;
use crate::commands::new_table;

pub fn execute(ctx: &PipelineContext, table: String, format: OutputFormat) -> anyhow::Result<()> {
    let rules = derive_quarantine(ctx, &table)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&rules)?),
        OutputFormat::Table => {
            println!("🚧 Quarantine rule for '{}'", table);
            let mut out = new_table(&["Rule", "Predicate"]);
            for (name, predicate) in rules.iter() {
                out.add_row(vec![name, predicate]);
            }
            println!("{out}");
        }
    }

    if rules.is_degenerate() {
        eprintln!("⚠️  '{}' has no quality checks: the predicate is not valid SQL.", table);
    }
    Ok(())
}
