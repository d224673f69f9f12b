// ABOUTME: Application-wide error types for ghcr-prune.
// ABOUTME: Uses thiserror for ergonomic error handling.

use crate::registry::RegistryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("registry `{0}` has no organization segment (expected e.g. ghcr.io/my-org)")]
    InvalidRegistry(String),

    #[error("registry error: {0}")]
    Registry(#[from] RegistryError),
}

pub type Result<T> = std::result::Result<T, Error>;
