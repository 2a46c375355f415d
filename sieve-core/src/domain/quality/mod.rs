// sieve-core/src/domain/quality/mod.rs

pub mod checks;
pub mod quarantine;

pub use checks::{NOT_NULL, QualityCheck, QualityCheckSet, QualityRule};
pub use quarantine::{INVALID_DATA, QuarantineRuleSet};
