// sieve/src/commands/actions.rs

use sieve_core::PipelineContext;
use sieve_core::infrastructure::config::list_actions;

pub fn execute(ctx: &PipelineContext, record_type: String) -> anyhow::Result<()> {
    let actions = list_actions(ctx, &record_type)?;

    println!("📋 Action types for '{}' ({}):", record_type, actions.len());
    for action in &actions {
        println!("   ➜ {}", action);
    }
    Ok(())
}
