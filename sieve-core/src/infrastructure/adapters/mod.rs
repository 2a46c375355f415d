// sieve-core/src/infrastructure/adapters/mod.rs

pub mod arrow_schema;
pub mod datafusion;
