// sieve-core/src/domain/quality/checks.rs

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use tracing::debug;

use crate::domain::error::DomainError;

pub const NOT_NULL: &str = "not_null";

/// One rule descriptor of `layer.<layer>.tables.<table>`.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct QualityRule {
    #[serde(rename = "type")]
    pub rule_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl QualityRule {
    pub fn not_null(field: impl Into<String>) -> Self {
        Self {
            rule_type: NOT_NULL.to_string(),
            field: Some(field.into()),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityCheck {
    pub name: String,
    pub expression: String,
}

/// Named boolean expressions, kept in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualityCheckSet {
    checks: Vec<QualityCheck>,
}

impl QualityCheckSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compiles rule descriptors. Only `not_null` produces a check; other
    /// types are skipped.
    pub fn compile(rules: &[QualityRule]) -> Result<Self, DomainError> {
        let mut set = Self::new();
        for rule in rules {
            match rule.rule_type.as_str() {
                NOT_NULL => {
                    let field = rule.field.as_deref().ok_or_else(|| {
                        DomainError::InvalidQualityRule(format!(
                            "'{}' rule without a 'field'",
                            NOT_NULL
                        ))
                    })?;
                    set.insert(not_null_check_name(field), not_null_expression(field));
                }
                other => {
                    debug!(
                        rule_type = other,
                        field = ?rule.field,
                        "Skipping unsupported quality rule"
                    );
                }
            }
        }
        Ok(set)
    }

    /// Adds a check. A name seen before keeps its position and takes the new expression.
    pub fn insert(&mut self, name: impl Into<String>, expression: impl Into<String>) {
        let name = name.into();
        let expression = expression.into();
        if let Some(existing) = self.checks.iter_mut().find(|c| c.name == name) {
            existing.expression = expression;
        } else {
            self.checks.push(QualityCheck { name, expression });
        }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.checks
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.expression.as_str())
    }

    pub fn len(&self) -> usize {
        self.checks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checks.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &QualityCheck> {
        self.checks.iter()
    }

    pub fn expressions(&self) -> impl Iterator<Item = &str> {
        self.checks.iter().map(|c| c.expression.as_str())
    }
}

impl Serialize for QualityCheckSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.checks.len()))?;
        for check in &self.checks {
            map.serialize_entry(&check.name, &check.expression)?;
        }
        map.end()
    }
}

pub fn not_null_check_name(field: &str) -> String {
    format!("{}_nullChk", field)
}

/// Non-null and non-empty string.
pub fn not_null_expression(field: &str) -> String {
    format!("({field} IS NOT NULL AND !({field}=''))")
}
