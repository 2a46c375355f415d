pub mod loader;
pub mod project;
pub mod quality;
pub mod schema;

pub use crate::domain::project::ProjectConfig;
pub use loader::load_config;
pub use project::load_project_config;
pub use quality::{QualityCheckFile, load_table_rules};
pub use schema::{ActionEntry, SchemaFile, list_actions, load_schema_file};
