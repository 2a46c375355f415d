// src/infrastructure/config/schema.rs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, instrument};

use crate::domain::error::DomainError;
use crate::domain::project::PipelineContext;
use crate::domain::schema::{RawSchemaNode, SchemaDescription};
use crate::infrastructure::config::loader::load_config;
use crate::infrastructure::error::InfrastructureError;

// =============================================================================
//  1. DATA CONTRACT (`<record_type>_schema.yml`)
// =============================================================================

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SchemaFile {
    #[serde(rename = "actionType")]
    pub action_types: BTreeMap<String, ActionEntry>,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct ActionEntry {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<RawSchemaNode>,
}

// =============================================================================
//  2. LOADERS
// =============================================================================

#[instrument(skip(ctx), fields(layer = %ctx.layer))]
pub fn load_schema_file(
    ctx: &PipelineContext,
    record_type: &str,
) -> Result<SchemaFile, InfrastructureError> {
    let path = ctx.schema_path(record_type);
    let file: SchemaFile = load_config(&path)?;
    debug!(path = ?path, actions = file.action_types.len(), "Schema file loaded");
    Ok(file)
}

/// Action types declared in a record type's schema file, sorted.
pub fn list_actions(
    ctx: &PipelineContext,
    record_type: &str,
) -> Result<Vec<String>, InfrastructureError> {
    Ok(load_schema_file(ctx, record_type)?
        .action_types
        .into_keys()
        .collect())
}

impl SchemaFile {
    /// Exact, case-sensitive lookup of `action_type`, validated into a description.
    pub fn describe_action(
        &self,
        record_type: &str,
        action_type: &str,
    ) -> Result<SchemaDescription, DomainError> {
        let entry = self.action_types.get(action_type).ok_or_else(|| {
            DomainError::UnknownActionType {
                record_type: record_type.to_string(),
                action_type: action_type.to_string(),
                available: self
                    .action_types
                    .keys()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", "),
            }
        })?;

        let path = format!("actionType.{}", action_type);
        let raw = entry
            .schema
            .as_ref()
            .ok_or_else(|| DomainError::SchemaFieldMissing {
                path: path.clone(),
                key: "schema",
            })?;

        SchemaDescription::from_raw(raw, &format!("{}.schema", path))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const ORDERS: &str = r#"
actionType:
  create:
    schema:
      type: struct
      fields:
        - name: id
          type: string
          nullable: false
  Delete:
    schema:
      type: struct
      fields:
        - name: id
          type: string
  broken: {}
"#;

    fn ctx_with_orders() -> (tempfile::TempDir, PipelineContext) {
        let dir = tempdir().unwrap();
        let layer_dir = dir.path().join("silver");
        fs::create_dir_all(&layer_dir).unwrap();
        fs::write(layer_dir.join("orders_schema.yml"), ORDERS).unwrap();
        let ctx = PipelineContext::new(dir.path().to_string_lossy(), "silver");
        (dir, ctx)
    }

    #[test]
    fn test_record_type_is_lower_cased_in_path() {
        let (_dir, ctx) = ctx_with_orders();
        let file = load_schema_file(&ctx, "ORDERS").unwrap();
        assert_eq!(file.action_types.len(), 3);
    }

    #[test]
    fn test_list_actions_sorted() {
        let (_dir, ctx) = ctx_with_orders();
        assert_eq!(
            list_actions(&ctx, "orders").unwrap(),
            vec!["Delete", "broken", "create"]
        );
    }

    #[test]
    fn test_action_lookup_is_case_sensitive() {
        let (_dir, ctx) = ctx_with_orders();
        let file = load_schema_file(&ctx, "orders").unwrap();

        assert!(file.describe_action("orders", "create").is_ok());
        match file.describe_action("orders", "Create") {
            Err(DomainError::UnknownActionType { available, .. }) => {
                assert_eq!(available, "Delete, broken, create");
            }
            other => panic!("Expected UnknownActionType, got {:?}", other),
        }
    }

    #[test]
    fn test_action_without_schema_is_missing_field() {
        let (_dir, ctx) = ctx_with_orders();
        let file = load_schema_file(&ctx, "orders").unwrap();

        match file.describe_action("orders", "broken") {
            Err(DomainError::SchemaFieldMissing { path, key }) => {
                assert_eq!(path, "actionType.broken");
                assert_eq!(key, "schema");
            }
            other => panic!("Expected SchemaFieldMissing, got {:?}", other),
        }
    }

    #[test]
    fn test_file_without_action_type_key_fails_to_parse() {
        let dir = tempdir().unwrap();
        let layer_dir = dir.path().join("bronze");
        fs::create_dir_all(&layer_dir).unwrap();
        fs::write(layer_dir.join("events_schema.yml"), "schema: {}\n").unwrap();
        let ctx = PipelineContext::new(dir.path().to_string_lossy(), "bronze");

        let result = load_schema_file(&ctx, "events");
        assert!(matches!(
            result,
            Err(InfrastructureError::ConfigParseError { .. })
        ));
    }
}
