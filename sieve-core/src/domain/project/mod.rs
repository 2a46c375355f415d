// sieve-core/src/domain/project/mod.rs

pub mod configuration;
pub mod context;

pub use configuration::ProjectConfig;
pub use context::{DEFAULT_QUALITY_CHECK_FILE, PipelineContext};
