// sieve/src/cli.rs
//
// Single source of truth for all CLI definitions (Clap structs).

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sieve")]
#[command(about = "Schema, flattening and data quality rules for layered pipelines", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Project directory (holds sieve.yaml)
    #[arg(long, global = true, default_value = ".")]
    pub project_dir: PathBuf,

    /// Layer to work on, overrides the project's layer (ex: "silver")
    #[arg(long, global = true)]
    pub layer: Option<String>,

    /// Quality check file of the layer, overrides the project's (ex: "dq.yml")
    #[arg(long, global = true)]
    pub quality_check_file: Option<String>,

    /// Debug logs (RUST_LOG still wins when set)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 🧬 Shows the schema configured for a record type and action
    Schema {
        /// Record type (file `<record_type>_schema.yml`)
        #[arg(long, short)]
        record_type: String,

        /// Action type (exact, case-sensitive)
        #[arg(long, short)]
        action: String,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// Show the columns once flattened
        #[arg(long)]
        flattened: bool,
    },

    /// 📋 Lists the action types declared for a record type
    Actions {
        #[arg(long, short)]
        record_type: String,
    },

    /// 🧪 Compiles the quality checks of a table
    Checks {
        #[arg(long, short)]
        table: String,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// 🚧 Derives the quarantine rule of a table
    Quarantine {
        #[arg(long, short)]
        table: String,

        #[arg(long, value_enum, default_value = "table")]
        format: OutputFormat,
    },

    /// 🪗 Flattens a dataset (json, ndjson, csv, parquet)
    Flatten {
        /// Input file
        #[arg(long, short)]
        input: PathBuf,

        /// Write the flattened rows to this parquet file
        #[arg(long, short)]
        output: Option<PathBuf>,

        /// Name top-level struct fields `<field>` instead of `<parent>_<field>`.
        /// Deeper fields stay prefixed.
        #[arg(long)]
        no_prefix: bool,

        /// Number of sample rows to display
        #[arg(long, default_value = "10")]
        limit: usize,
    },

    /// ✅ Validates every schema file of the layer
    Validate,
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Result, bail};
    use clap::Parser;

    #[test]
    fn test_cli_parse_schema_defaults() -> Result<()> {
        let args = Cli::parse_from(["sieve", "schema", "--record-type", "orders", "-a", "create"]);
        assert_eq!(args.project_dir.to_string_lossy(), ".");
        assert_eq!(args.layer, None);
        assert_eq!(args.quality_check_file, None);
        match args.command {
            Commands::Schema {
                record_type,
                action,
                format,
                flattened,
            } => {
                assert_eq!(record_type, "orders");
                assert_eq!(action, "create");
                assert_eq!(format, OutputFormat::Table);
                assert!(!flattened);
                Ok(())
            }
            _ => bail!("Expected Schema command"),
        }
    }

    #[test]
    fn test_cli_global_flags_after_subcommand() -> Result<()> {
        let args = Cli::parse_from([
            "sieve",
            "checks",
            "--table",
            "orders",
            "--layer",
            "gold",
            "--project-dir",
            "/tmp",
            "--format",
            "json",
            "--quality-check-file",
            "dq.yml",
        ]);
        assert_eq!(args.layer.as_deref(), Some("gold"));
        assert_eq!(args.quality_check_file.as_deref(), Some("dq.yml"));
        assert_eq!(args.project_dir.to_string_lossy(), "/tmp");
        match args.command {
            Commands::Checks { table, format } => {
                assert_eq!(table, "orders");
                assert_eq!(format, OutputFormat::Json);
                Ok(())
            }
            _ => bail!("Expected Checks command"),
        }
    }

    #[test]
    fn test_cli_parse_flatten() -> Result<()> {
        let args = Cli::parse_from(["sieve", "-v", "flatten", "-i", "in.json", "--no-prefix"]);
        assert!(args.verbose);
        match args.command {
            Commands::Flatten {
                input,
                output,
                no_prefix,
                limit,
            } => {
                assert_eq!(input.to_string_lossy(), "in.json");
                assert_eq!(output, None);
                assert!(no_prefix);
                assert_eq!(limit, 10);
                Ok(())
            }
            _ => bail!("Expected Flatten command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_format() {
        let result =
            Cli::try_parse_from(["sieve", "quarantine", "-t", "orders", "--format", "xml"]);
        assert!(result.is_err());
    }
}
