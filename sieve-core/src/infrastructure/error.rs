// sieve-core/src/infrastructure/error.rs

use datafusion::error::DataFusionError;
use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum InfrastructureError {
    // --- FILESYSTEM (IO) ---
    #[error("File System Error: {0}")]
    #[diagnostic(
        code(sieve::infra::io),
        help("Check file permissions or path validity.")
    )]
    Io(#[from] std::io::Error),

    // --- CONFIG / YAML ---
    #[error("Configuration file not found at '{0}'")]
    #[diagnostic(code(sieve::infra::config_missing))]
    ConfigNotFound(String),

    #[error("YAML Parsing Error in '{path}': {source}")]
    #[diagnostic(
        code(sieve::infra::yaml),
        help("Check your YAML syntax (indentation, types).")
    )]
    ConfigParseError {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Configuration Error: {0}")]
    #[diagnostic(code(sieve::infra::config))]
    ConfigError(String),

    // --- ENGINE (DataFusion) ---
    #[error("Flatten operator '{operation}' failed: {source}")]
    #[diagnostic(
        code(sieve::infra::flatten_operator),
        help("The engine rejected a projection or an explode. Check for duplicated flattened column names.")
    )]
    FlattenOperatorFailure {
        operation: String,
        #[source]
        source: DataFusionError,
    },

    #[error("DataFusion Engine Error: {0}")]
    #[diagnostic(
        code(sieve::infra::datafusion),
        help("An error occurred inside the query engine.")
    )]
    Engine(#[from] DataFusionError),
}
