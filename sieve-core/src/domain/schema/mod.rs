// sieve-core/src/domain/schema/mod.rs

pub mod description;
pub mod types;

pub use description::{FieldDescription, RawElementType, RawSchemaNode, SchemaDescription};
pub use types::{PrimitiveType, map_primitive};
