// sieve/src/commands/flatten.rs
//
// USE CASE: Flatten a nested dataset, preview it and optionally write it as parquet.

use std::path::PathBuf;
use std::time::Instant;

use datafusion::prelude::SessionContext;

use sieve_core::application::flatten;
use sieve_core::infrastructure::adapters::arrow_schema::render_type;
use sieve_core::infrastructure::adapters::datafusion::{read_dataset, write_parquet};

pub async fn execute(
    input: PathBuf,
    output: Option<PathBuf>,
    no_prefix: bool,
    limit: usize,
) -> anyhow::Result<()> {
    let start = Instant::now();
    println!("🪗 Flattening {}", input.display());

    let session = SessionContext::new();
    let df = read_dataset(&session, &input).await?;
    let flat = flatten(df, !no_prefix)?;

    let columns: Vec<String> = flat
        .schema()
        .fields()
        .iter()
        .map(|f| format!("{}:{}", f.name(), render_type(f.data_type())))
        .collect();
    println!("   Columns: [{}]", columns.join(", "));

    if limit > 0 {
        println!("   --- Rows (Limit {}) ---", limit);
        flat.clone().limit(0, Some(limit))?.show().await?;
    }

    if let Some(path) = output {
        write_parquet(flat, &path).await?;
        println!("💾 Written to {}", path.display());
    }

    println!("✨ Done in {:.2?}", start.elapsed());
    Ok(())
}
