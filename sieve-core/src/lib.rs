// sieve-core/src/lib.rs

// 1. Documentation
#![allow(missing_docs)] // On autorise le manque de doc pour le moment

// 2. Memory safety
#![deny(unsafe_code)]
// 3. Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
// 4. Performance
#![warn(clippy::perf)]

// --- MODULES HEXAGONAUX ---

// 1. Ports (Interfaces / Traits)
// Contract the flattener needs from a tabular engine (NestedFrame).
pub mod ports;

// 2. Domain (Cœur du métier)
// Schema descriptions, type mapping, quality checks, quarantine rules.
// Ne dépend de RIEN d'autre (ni infra, ni app).
pub mod domain;

// 3. Infrastructure (Adapters)
// YAML config files, Arrow schema builder, DataFusion frames.
pub mod infrastructure;

// 4. Application (Use Cases)
// Schema for action, flatten loop, quality checks, quarantine rules.
pub mod application;

// --- GESTION DES ERREURS GLOBALE ---
pub mod error;

// --- RE-EXPORTS (FACADE) ---
pub use domain::project::PipelineContext;
pub use error::SieveError;
