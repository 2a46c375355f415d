// sieve-core/src/infrastructure/config/project.rs

use std::path::{Path, PathBuf};
use tracing::{info, instrument};

use crate::domain::project::ProjectConfig;
use crate::error::SieveError;
use crate::infrastructure::config::loader::load_config;
use crate::infrastructure::error::InfrastructureError;

pub const ENV_CONFIG_PATH: &str = "SIEVE_CONFIG_PATH";
pub const ENV_LAYER: &str = "SIEVE_LAYER";
pub const ENV_QUALITY_CHECK_FILE: &str = "SIEVE_QUALITY_CHECK_FILE";

// --- LOADER ---

#[instrument(skip(project_dir))]
pub fn load_project_config(project_dir: &Path) -> Result<ProjectConfig, SieveError> {
    // 1. Découverte du fichier principal
    let config_path = find_main_config(project_dir)?;
    info!(path = ?config_path, "Loading project configuration");

    // 2. Chargement YAML Base
    let mut config: ProjectConfig = load_config(&config_path)?;

    // 3. Override via Variables d'Environnement (Pattern 'Layering')
    // Permet de faire: SIEVE_LAYER=gold sieve checks --table orders
    apply_overrides(&mut config, |key| std::env::var(key).ok());

    // 4. config-path relatif => relatif au projet
    resolve_config_path(&mut config, project_dir);

    config.pipeline.check()?;
    Ok(config)
}

fn find_main_config(root: &Path) -> Result<PathBuf, InfrastructureError> {
    let candidates = ["sieve.yaml", "sieve.yml"];
    for filename in candidates {
        let p = root.join(filename);
        if p.exists() {
            return Ok(p);
        }
    }
    Err(InfrastructureError::ConfigNotFound(format!(
        "No configuration file found in {:?}. Checked: {:?}",
        root, candidates
    )))
}

fn apply_overrides<F>(config: &mut ProjectConfig, lookup: F)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(ENV_CONFIG_PATH) {
        info!(old = ?config.pipeline.config_path, new = ?val, "Overriding config path via ENV");
        config.pipeline.config_path = val;
    }
    if let Some(val) = lookup(ENV_LAYER) {
        info!(old = ?config.pipeline.layer, new = ?val, "Overriding layer via ENV");
        config.pipeline.layer = val;
    }
    if let Some(val) = lookup(ENV_QUALITY_CHECK_FILE) {
        info!(
            old = ?config.pipeline.quality_check_file,
            new = ?val,
            "Overriding quality check file via ENV"
        );
        config.pipeline.quality_check_file = val;
    }
}

fn resolve_config_path(config: &mut ProjectConfig, project_dir: &Path) {
    let configured = Path::new(&config.pipeline.config_path);
    if configured.is_relative() {
        config.pipeline.config_path = project_dir
            .join(configured)
            .to_string_lossy()
            .to_string();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::error::DomainError;
    use std::collections::HashMap;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_load_resolves_relative_config_path() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("sieve.yaml"),
            "name: sales\nconfig-path: config\nlayer: silver\n",
        )
        .unwrap();

        let config = load_project_config(dir.path()).unwrap();

        assert_eq!(config.name, "sales");
        assert_eq!(
            PathBuf::from(&config.pipeline.config_path),
            dir.path().join("config")
        );
        assert_eq!(config.pipeline.quality_check_file, "quality_checks.yml");
    }

    #[test]
    fn test_yml_extension_is_accepted() {
        let dir = tempdir().unwrap();
        fs::write(
            dir.path().join("sieve.yml"),
            "config-path: /srv/conf\nlayer: gold\nquality-check-file: dq.yml\n",
        )
        .unwrap();

        let config = load_project_config(dir.path()).unwrap();
        assert_eq!(config.pipeline.config_path, "/srv/conf");
        assert_eq!(config.pipeline.quality_check_file, "dq.yml");
    }

    #[test]
    fn test_missing_project_file() {
        let dir = tempdir().unwrap();
        let result = load_project_config(dir.path());
        assert!(matches!(
            result,
            Err(SieveError::Infrastructure(InfrastructureError::ConfigNotFound(_)))
        ));
    }

    #[test]
    fn test_empty_layer_is_rejected() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("sieve.yaml"), "config-path: c\nlayer: ''\n").unwrap();
        let result = load_project_config(dir.path());
        assert!(matches!(
            result,
            Err(SieveError::Domain(DomainError::InvalidContext(_)))
        ));
    }

    #[test]
    fn test_overrides_from_lookup() {
        let mut config: ProjectConfig =
            serde_yaml::from_str("config-path: conf\nlayer: bronze\n").unwrap();
        let env: HashMap<&str, &str> = HashMap::from([(ENV_LAYER, "gold")]);

        apply_overrides(&mut config, |key| env.get(key).map(|v| v.to_string()));

        assert_eq!(config.pipeline.layer, "gold");
        assert_eq!(config.pipeline.config_path, "conf");
    }
}
