// sieve/src/commands/validate.rs
//
// USE CASE: Parse every schema file of the layer, CI-friendly exit code.

use sieve_core::PipelineContext;
use sieve_core::application::validate_layer_schemas;

pub fn execute(ctx: &PipelineContext) -> anyhow::Result<()> {
    println!("🔎 Validating schemas in {}", ctx.layer_dir().display());

    let report = validate_layer_schemas(ctx)?;

    for (record_type, action_type) in &report.valid {
        println!("   ✅ {}/{}", record_type, action_type);
    }
    for issue in &report.invalid {
        let location = match &issue.action_type {
            Some(action) => format!("{} [{}]", issue.file.display(), action),
            None => issue.file.display().to_string(),
        };
        eprintln!("   ❌ {}: {}", location, issue.reason);
    }

    if !report.is_ok() {
        anyhow::bail!("{} invalid schema(s)", report.invalid.len());
    }

    println!("✨ {} schema(s) valid", report.valid.len());
    Ok(())
}
