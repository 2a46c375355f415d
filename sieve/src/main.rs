// sieve/src/main.rs

mod cli;
mod commands;

use clap::Parser;
use miette::Diagnostic;
use tracing_subscriber::EnvFilter;

use sieve_core::SieveError;

use crate::cli::{Cli, Commands};

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // 1. Setup Logging (Tracing)
    // RUST_LOG=sieve_core=debug sieve checks ... pour voir les détails
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("\n❌ {:#}", e);
        if let Some(help) = diagnostic_help(&e) {
            eprintln!("👉 {}", help);
        }
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let context = || {
        commands::resolve_context(
            &cli.project_dir,
            cli.layer.clone(),
            cli.quality_check_file.clone(),
        )
    };

    match cli.command {
        Commands::Schema {
            record_type,
            action,
            format,
            flattened,
        } => commands::schema::execute(&context()?, record_type, action, format, flattened),

        Commands::Actions { record_type } => commands::actions::execute(&context()?, record_type),

        Commands::Checks { table, format } => commands::checks::execute(&context()?, table, format),

        Commands::Quarantine { table, format } => {
            commands::quarantine::execute(&context()?, table, format)
        }

        // No project config needed
        Commands::Flatten {
            input,
            output,
            no_prefix,
            limit,
        } => commands::flatten::execute(input, output, no_prefix, limit).await,

        Commands::Validate => commands::validate::execute(&context()?),
    }
}

// Logs go to stderr: stdout stays parseable with --format json.
fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "{level},sieve={level},sieve_core={level},datafusion=warn",
            level = default_level
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// First `help` found on a diagnostic in the error chain.
fn diagnostic_help(err: &anyhow::Error) -> Option<String> {
    err.chain().find_map(|cause| match cause.downcast_ref::<SieveError>()? {
        SieveError::Domain(e) => e.help().map(|h| h.to_string()),
        SieveError::Infrastructure(e) => e.help().map(|h| h.to_string()),
        _ => None,
    })
}
