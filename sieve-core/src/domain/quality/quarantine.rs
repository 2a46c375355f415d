// sieve-core/src/domain/quality/quarantine.rs

use serde::Serialize;

use crate::domain::quality::checks::QualityCheckSet;

pub const INVALID_DATA: &str = "invalid_data";

/// Predicate routing a row to quarantine: true when at least one quality check fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuarantineRuleSet {
    invalid_data: String,
    #[serde(skip)]
    degenerate: bool,
}

impl QuarantineRuleSet {
    /// `NOT(<check> AND <check> ...)`, checks in set order.
    ///
    /// An empty set gives `NOT()`, which no SQL engine accepts. The value is
    /// still returned and flagged through [`QuarantineRuleSet::is_degenerate`].
    pub fn derive(checks: &QualityCheckSet) -> Self {
        let conjunction = checks.expressions().collect::<Vec<_>>().join(" AND ");
        Self {
            invalid_data: format!("NOT({})", conjunction),
            degenerate: checks.is_empty(),
        }
    }

    pub fn invalid_data(&self) -> &str {
        &self.invalid_data
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        (key == INVALID_DATA).then_some(self.invalid_data.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        std::iter::once((INVALID_DATA, self.invalid_data.as_str()))
    }

    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::quality::checks::QualityRule;

    #[test]
    fn test_orders_scenario() {
        let checks = QualityCheckSet::compile(&[
            QualityRule::not_null("amount"),
            QualityRule::not_null("id"),
        ])
        .unwrap();

        let rules = QuarantineRuleSet::derive(&checks);

        assert_eq!(
            rules.get(INVALID_DATA),
            Some(
                "NOT((amount IS NOT NULL AND !(amount='')) AND (id IS NOT NULL AND !(id='')))"
            )
        );
        assert!(!rules.is_degenerate());
    }

    #[test]
    fn test_single_check() {
        let mut checks = QualityCheckSet::new();
        checks.insert("id_nullChk", "(id IS NOT NULL AND !(id=''))");
        let rules = QuarantineRuleSet::derive(&checks);
        assert_eq!(rules.invalid_data(), "NOT((id IS NOT NULL AND !(id='')))");
    }

    #[test]
    fn test_empty_checks_yield_documented_degenerate_rule() {
        let rules = QuarantineRuleSet::derive(&QualityCheckSet::new());
        assert_eq!(rules.invalid_data(), "NOT()");
        assert!(rules.is_degenerate());
    }

    #[test]
    fn test_single_well_known_key() {
        let rules = QuarantineRuleSet::derive(&QualityCheckSet::new());
        let keys: Vec<&str> = rules.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![INVALID_DATA]);
        assert_eq!(rules.get("other"), None);

        let json = serde_json::to_string(&rules).unwrap();
        assert_eq!(json, r#"{"invalid_data":"NOT()"}"#);
    }
}
