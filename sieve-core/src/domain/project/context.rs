// sieve-core/src/domain/project/context.rs

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use validator::Validate;

use crate::domain::error::DomainError;

pub const DEFAULT_QUALITY_CHECK_FILE: &str = "quality_checks.yml";

/// Where configuration lives and which layer is being processed.
/// Passed explicitly to every loader.
#[derive(Debug, Deserialize, Serialize, Validate, Clone, PartialEq)]
pub struct PipelineContext {
    #[serde(rename = "config-path")]
    #[validate(length(min = 1, message = "config-path cannot be empty"))]
    pub config_path: String,

    #[validate(length(min = 1, message = "layer cannot be empty"))]
    pub layer: String,

    #[serde(rename = "quality-check-file", default = "default_quality_check_file")]
    #[validate(length(min = 1, message = "quality-check-file cannot be empty"))]
    pub quality_check_file: String,
}

fn default_quality_check_file() -> String {
    DEFAULT_QUALITY_CHECK_FILE.to_string()
}

impl PipelineContext {
    pub fn new(config_path: impl Into<String>, layer: impl Into<String>) -> Self {
        Self {
            config_path: config_path.into(),
            layer: layer.into(),
            quality_check_file: default_quality_check_file(),
        }
    }

    pub fn with_quality_check_file(mut self, file: impl Into<String>) -> Self {
        self.quality_check_file = file.into();
        self
    }

    /// `<config_path>/<layer>`
    pub fn layer_dir(&self) -> PathBuf {
        Path::new(&self.config_path).join(&self.layer)
    }

    /// `<config_path>/<layer>/<record_type>_schema.yml`, record type lower-cased.
    pub fn schema_path(&self, record_type: &str) -> PathBuf {
        self.layer_dir()
            .join(format!("{}_schema.yml", record_type.to_lowercase()))
    }

    /// `<config_path>/<layer>/<quality_check_file>`
    pub fn quality_check_path(&self) -> PathBuf {
        self.layer_dir().join(&self.quality_check_file)
    }

    pub fn check(&self) -> Result<(), DomainError> {
        self.validate()
            .map_err(|e| DomainError::InvalidContext(e.to_string()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_follow_layer_layout() {
        let ctx = PipelineContext::new("/etc/pipeline", "silver");

        assert_eq!(ctx.layer_dir(), PathBuf::from("/etc/pipeline/silver"));
        assert_eq!(
            ctx.schema_path("Orders"),
            PathBuf::from("/etc/pipeline/silver/orders_schema.yml")
        );
        assert_eq!(
            ctx.quality_check_path(),
            PathBuf::from("/etc/pipeline/silver/quality_checks.yml")
        );
    }

    #[test]
    fn test_custom_quality_check_file() {
        let ctx = PipelineContext::new("conf", "gold").with_quality_check_file("dq.yaml");
        assert_eq!(ctx.quality_check_path(), PathBuf::from("conf/gold/dq.yaml"));
    }

    #[test]
    fn test_empty_layer_is_invalid() {
        let ctx = PipelineContext::new("conf", "");
        assert!(matches!(ctx.check(), Err(DomainError::InvalidContext(_))));
        assert!(PipelineContext::new("conf", "bronze").check().is_ok());
    }

    #[test]
    fn test_deserialize_with_default_quality_file() {
        let ctx: PipelineContext =
            serde_yaml::from_str("config-path: conf\nlayer: bronze\n").unwrap();
        assert_eq!(ctx.quality_check_file, DEFAULT_QUALITY_CHECK_FILE);
    }
}
