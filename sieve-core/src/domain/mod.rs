pub mod error;
pub mod project;
pub mod quality;
pub mod schema;

// Re-exports pratiques pour simplifier les imports ailleurs
pub use error::DomainError;
