// dataforge-core/src/error.rs

use crate::domain::error::DomainError;
use crate::infrastructure::error::InfrastructureError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DataforgeError {
    // --- ERREURS DU DOMAINE (Sampling, Schémas, Fenêtres de dates) ---
    #[error(transparent)]
    Domain(#[from] DomainError),

    // --- ERREURS D'INFRASTRUCTURE (IO, Config, Publishing) ---
    #[error(transparent)]
    Infrastructure(#[from] InfrastructureError),

    // --- ERREURS GÉNÉRIQUES / APPLICATIVES ---
    #[error("Internal Error: {0}")]
    InternalError(String),
}

// Manual implementation to avoid duplicate enum variant but keep ergonomics
impl From<std::io::Error> for DataforgeError {
    fn from(err: std::io::Error) -> Self {
        DataforgeError::Infrastructure(InfrastructureError::Io(err))
    }
}

impl From<crate::infrastructure::error::PublishError> for DataforgeError {
    fn from(err: crate::infrastructure::error::PublishError) -> Self {
        DataforgeError::Infrastructure(InfrastructureError::Publish(err))
    }
}
