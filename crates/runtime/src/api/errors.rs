//! Unified error types surfaced by the runtime API.
//!
//! Cast outcomes are never errors; they come back as `OperationResult`s.
//! These variants cover misuse of the driver itself and setup failures.
use skill_core::{CasterId, CatalogError, ConfigError, ErrorSeverity, SkillError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("{0} not found")]
    CasterNotFound(CasterId),

    #[error("runtime requires a skill catalog before building")]
    MissingCatalog,

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("invalid runtime configuration")]
    InvalidConfig(#[from] ConfigError),

    #[error("failed to load skill content")]
    Content(#[source] anyhow::Error),
}

impl SkillError for RuntimeError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::CasterNotFound(_) => ErrorSeverity::Validation,
            RuntimeError::Catalog(err) => err.severity(),
            RuntimeError::MissingCatalog
            | RuntimeError::InvalidConfig(_)
            | RuntimeError::Content(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            RuntimeError::CasterNotFound(_) => "RUNTIME_CASTER_NOT_FOUND",
            RuntimeError::MissingCatalog => "RUNTIME_MISSING_CATALOG",
            RuntimeError::Catalog(err) => err.error_code(),
            RuntimeError::InvalidConfig(err) => err.error_code(),
            RuntimeError::Content(_) => "RUNTIME_CONTENT_LOAD_FAILED",
        }
    }
}
