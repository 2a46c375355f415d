// sieve-core/src/domain/schema/types.rs

use serde::{Deserialize, Serialize};

/// Column type tags understood by the schema files.
///
/// `Struct` is only a marker: a real struct is described with `fields`,
/// so the bare name `struct` can only show up as an array `elementType`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveType {
    #[default]
    String,
    Integer,
    Double,
    Boolean,
    Struct,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Integer => "integer",
            Self::Double => "double",
            Self::Boolean => "boolean",
            Self::Struct => "struct",
        }
    }
}

impl std::fmt::Display for PrimitiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for PrimitiveType {
    fn from(name: &str) -> Self {
        map_primitive(name)
    }
}

/// Resolves a type name (case-insensitive). Unknown names fall back to `String`.
pub fn map_primitive(name: &str) -> PrimitiveType {
    match name.to_lowercase().as_str() {
        "string" => PrimitiveType::String,
        "integer" => PrimitiveType::Integer,
        "double" => PrimitiveType::Double,
        "boolean" => PrimitiveType::Boolean,
        "struct" => PrimitiveType::Struct,
        _ => PrimitiveType::String,
    }
}
