// sieve/src/commands/schema.rs
//
// USE CASE: Show the Arrow schema configured for (record type, action type).

use datafusion::arrow::datatypes::{DataType, Schema};
use datafusion::prelude::SessionContext;

use sieve_core::PipelineContext;
use sieve_core::application::{flatten, load_schema_for_action, load_table_schema_for_action};
use sieve_core::infrastructure::adapters::arrow_schema::render_type;
use sieve_core::infrastructure::adapters::datafusion::empty_frame;

use crate::cli::OutputFormat;
use crate::commands::new_table;

pub fn execute(
    ctx: &PipelineContext,
    record_type: String,
    action: String,
    format: OutputFormat,
    flattened: bool,
) -> anyhow::Result<()> {
    let schema = if flattened {
        let table_schema = load_table_schema_for_action(ctx, &record_type, &action)?;
        let session = SessionContext::new();
        let frame = flatten(empty_frame(&session, table_schema)?, true)?;
        frame.schema().as_arrow().clone()
    } else {
        let data_type = load_schema_for_action(ctx, &record_type, &action)?;
        match data_type {
            DataType::Struct(fields) => Schema::new(fields),
            other => {
                match format {
                    OutputFormat::Json => println!(
                        "{}",
                        serde_json::json!({ "type": render_type(&other) })
                    ),
                    OutputFormat::Table => {
                        println!("🧬 Schema for {}/{}", record_type, action);
                        println!("   Type: {}", render_type(&other));
                    }
                }
                return Ok(());
            }
        }
    };

    match format {
        // stdout carries the JSON document only
        OutputFormat::Json => {
            let columns: Vec<serde_json::Value> = schema
                .fields()
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "name": f.name(),
                        "type": render_type(f.data_type()),
                        "nullable": f.is_nullable(),
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&columns)?);
        }
        OutputFormat::Table => {
            println!("🧬 Schema for {}/{}", record_type, action);
            let mut table = new_table(&["Column", "Type", "Nullable"]);
            for field in schema.fields() {
                table.add_row(vec![
                    field.name().clone(),
                    render_type(field.data_type()),
                    if field.is_nullable() { "yes" } else { "no" }.to_string(),
                ]);
            }
            println!("{table}");
            println!("✨ {} column(s)", schema.fields().len());
        }
    }

    Ok(())
}
