// src/domain/project/configuration.rs

use crate::domain::project::context::PipelineContext;
use serde::{Deserialize, Serialize};

/// Content of `sieve.yaml`.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProjectConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(flatten)]
    pub pipeline: PipelineContext,
}

fn default_name() -> String {
    "sieve".to_string()
}
