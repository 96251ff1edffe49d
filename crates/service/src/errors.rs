use thiserror::Error;

/// Errors surfaced by the car service. Passed to callers unchanged.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("store unavailable: {0}")]
    StoreUnavailable(String),
}

impl ServiceError {
    pub fn not_found(entity: &str) -> Self { Self::NotFound(format!("{} not found", entity)) }

    pub fn store(e: impl std::fmt::Display) -> Self { Self::StoreUnavailable(e.to_string()) }

    /// Stable numeric code for external mapping/logging
    pub fn code(&self) -> u16 {
        match self {
            ServiceError::NotFound(_) => 1003,
            ServiceError::StoreUnavailable(_) => 1200,
        }
    }
}

impl From<models::errors::ModelError> for ServiceError {
    fn from(e: models::errors::ModelError) -> Self {
        match e {
            models::errors::ModelError::NotFound(what) => Self::NotFound(what),
            models::errors::ModelError::Db(msg) => Self::StoreUnavailable(msg),
        }
    }
}
