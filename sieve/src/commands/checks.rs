// sieve/src/commands/checks.rs
//
// USE CASE: Compile the quality checks of a table.

use sieve_core::PipelineContext;
use sieve_core::application::compile_checks;

use crate::cli::OutputFormat;
use crate::commands::new_table;

pub fn execute(ctx: &PipelineContext, table: String, format: OutputFormat) -> anyhow::Result<()> {
    let checks = compile_checks(ctx, &table)?;

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&checks)?),
        OutputFormat::Table => {
            println!("🧪 Quality checks for '{}'", table);
            if checks.is_empty() {
                println!("   ⚠️ No checks configured");
                return Ok(());
            }
            let mut out = new_table(&["Check", "Expression"]);
            for check in checks.iter() {
                out.add_row(vec![check.name.clone(), check.expression.clone()]);
            }
            println!("{out}");
        }
    }
    Ok(())
}
