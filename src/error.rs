use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// Worker requested while no variant is selectable.
    #[error("no service worker variant is enabled")]
    NoWorkerVariant,

    /// Manifest requested while the PWA is disabled.
    #[error("manifest requested while PWA is disabled")]
    ManifestDisabled,

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::NoWorkerVariant | AppError::ManifestDisabled => StatusCode::NOT_FOUND,
            AppError::SerializationError(e) => {
                tracing::error!("Serialization error: {}", e);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        status.into_response()
    }
}
