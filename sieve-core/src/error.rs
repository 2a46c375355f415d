// sieve-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SieveError {
    // --- ERREURS DU DOMAINE (Schema, Quality rules, Flatten) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, YAML, DataFusion) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREURS APPLICATIVES ---
    #[error("Loading quality checks for '{table}' failed: {source}")]
    QualityChecks {
        table: String,
        #[source]
        source: Box<SieveError>,
    },

    #[error("Internal Error: {0}")]
    InternalError(String),
}

impl From<std::io::Error> for SieveError {
    fn from(err: std::io::Error) -> Self {
        SieveError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<datafusion::error::DataFusionError> for SieveError {
    fn from(err: datafusion::error::DataFusionError) -> Self {
        SieveError::Infrastructure(InfrastructureError::Engine(err))
    }
}
