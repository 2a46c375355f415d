// sieve-core/src/application/mod.rs

pub mod flatten;
pub mod quality;
pub mod schema;

// --- RE-EXPORTS (FACADE PATTERN) ---
// Le CLI fait `use sieve_core::application::{flatten, compile_checks, ...};`
// sans connaître la structure interne des fichiers.

pub use flatten::flatten;
pub use quality::{compile_checks, derive_quarantine};
pub use schema::{
    SchemaIssue, SchemaValidationReport, load_schema_for_action, load_table_schema_for_action,
    validate_layer_schemas,
};
