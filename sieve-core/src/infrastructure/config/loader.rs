// sieve-core/src/infrastructure/config/loader.rs

use serde::de::DeserializeOwned;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, error, instrument};

use crate::infrastructure::error::InfrastructureError;

/// Charge un fichier YAML typé.
/// A missing file and a malformed file are reported as distinct errors.
#[instrument]
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T, InfrastructureError> {
    let content = fs::read_to_string(path).map_err(|e| {
        error!(path = ?path, "Loading config failed: {}", e);
        if e.kind() == ErrorKind::NotFound {
            InfrastructureError::ConfigNotFound(path.display().to_string())
        } else {
            InfrastructureError::Io(e)
        }
    })?;

    debug!(bytes = content.len(), "Config file read");

    serde_yaml::from_str(&content).map_err(|source| {
        error!(path = ?path, "Parsing config failed: {}", source);
        InfrastructureError::ConfigParseError {
            path: path.display().to_string(),
            source,
        }
    })
}
