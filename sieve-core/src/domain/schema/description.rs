// sieve-core/src/domain/schema/description.rs

use serde::{Deserialize, Serialize};

use crate::domain::error::DomainError;
use crate::domain::schema::types::{PrimitiveType, map_primitive};

// =============================================================================
//  1. RAW FORM (as written in the YAML files)
// =============================================================================

/// Permissive shape of a schema node. The same shape is used for a whole
/// schema, a struct field and a nested `elementType`.
#[derive(Debug, Deserialize, Serialize, Clone, Default, PartialEq)]
pub struct RawSchemaNode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<RawSchemaNode>>,

    #[serde(
        rename = "elementType",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub element_type: Option<RawElementType>,

    #[serde(
        rename = "containsNull",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub contains_null: Option<bool>,
}

/// `elementType: integer` or `elementType: { type: struct, fields: [...] }`
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum RawElementType {
    Named(String),
    Nested(Box<RawSchemaNode>),
}

// =============================================================================
//  2. VALIDATED FORM
// =============================================================================

#[derive(Debug, Clone, PartialEq)]
pub enum SchemaDescription {
    Primitive(PrimitiveType),
    Struct(Vec<FieldDescription>),
    Array {
        element: Box<SchemaDescription>,
        contains_null: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescription {
    pub name: String,
    pub data_type: SchemaDescription,
    pub nullable: bool,
}

impl SchemaDescription {
    /// Validates a raw node. `path` locates the node in its file and ends up
    /// in every `SchemaFieldMissing` error.
    pub fn from_raw(node: &RawSchemaNode, path: &str) -> Result<Self, DomainError> {
        let kind = node
            .kind
            .as_deref()
            .ok_or_else(|| missing(path, "type"))?;

        match kind.to_lowercase().as_str() {
            "struct" => {
                let raw_fields = node.fields.as_ref().ok_or_else(|| missing(path, "fields"))?;
                let fields = raw_fields
                    .iter()
                    .enumerate()
                    .map(|(i, field)| {
                        FieldDescription::from_raw(field, &format!("{}.fields[{}]", path, i))
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(Self::Struct(fields))
            }
            "array" => {
                let raw_element = node
                    .element_type
                    .as_ref()
                    .ok_or_else(|| missing(path, "elementType"))?;
                let element = element_from_raw(raw_element, &format!("{}.elementType", path))?;
                Ok(Self::Array {
                    element: Box::new(element),
                    contains_null: node.contains_null.unwrap_or(true),
                })
            }
            other => Ok(Self::Primitive(map_primitive(other))),
        }
    }

    pub fn is_struct(&self) -> bool {
        matches!(self, Self::Struct(_))
    }

    /// Short name of the node kind, as written in the YAML files.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Primitive(p) => p.as_str(),
            Self::Struct(_) => "struct",
            Self::Array { .. } => "array",
        }
    }
}

impl FieldDescription {
    fn from_raw(node: &RawSchemaNode, path: &str) -> Result<Self, DomainError> {
        let name = node.name.clone().ok_or_else(|| missing(path, "name"))?;
        let data_type = SchemaDescription::from_raw(node, path)?;
        Ok(Self {
            name,
            data_type,
            nullable: node.nullable.unwrap_or(true),
        })
    }
}

fn element_from_raw(
    element: &RawElementType,
    path: &str,
) -> Result<SchemaDescription, DomainError> {
    match element {
        RawElementType::Named(name) => Ok(SchemaDescription::Primitive(map_primitive(name))),
        RawElementType::Nested(node) => SchemaDescription::from_raw(node, path),
    }
}

fn missing(path: &str, key: &'static str) -> DomainError {
    DomainError::SchemaFieldMissing {
        path: path.to_string(),
        key,
    }
}
