// sieve-core/src/domain/error.rs

use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Debug, Diagnostic)]
pub enum DomainError {
    #[error("Schema field missing: '{key}' at {path}")]
    #[diagnostic(
        code(sieve::domain::schema_field_missing),
        help("Every node needs 'type', a struct needs 'fields', an array needs 'elementType' and a struct field needs 'name'.")
    )]
    SchemaFieldMissing { path: String, key: &'static str },

    #[error("Action type '{action_type}' not found for record type '{record_type}'")]
    #[diagnostic(
        code(sieve::domain::unknown_action_type),
        help("Available action types: [{available}]. Matching is case-sensitive.")
    )]
    UnknownActionType {
        record_type: String,
        action_type: String,
        available: String,
    },

    #[error("Invalid quality rule: {0}")]
    #[diagnostic(
        code(sieve::domain::quality_rule),
        help("A 'not_null' rule needs a 'field' key.")
    )]
    InvalidQualityRule(String),

    #[error("Flattening did not converge after {passes} passes")]
    #[diagnostic(
        code(sieve::domain::flatten),
        help("Every pass must reduce the nesting depth. The engine returned a frame that is still nested.")
    )]
    FlattenDidNotConverge { passes: usize },

    #[error("Schema Error: {0}")]
    #[diagnostic(code(sieve::domain::schema))]
    SchemaError(String),

    #[error("Invalid pipeline context: {0}")]
    #[diagnostic(code(sieve::domain::context))]
    InvalidContext(String),
}
