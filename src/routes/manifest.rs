use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::error::AppError;

/// Serve the configured manifest verbatim while the PWA is enabled.
///
/// A missing manifest with `enabled` set serializes as `null`; pairing
/// `enabled` with a manifest is the configurer's responsibility.
pub async fn asset(State(state): State<AppState>) -> Result<Response, AppError> {
    let settings = state.pwa.current();
    if !settings.enabled {
        return Err(AppError::ManifestDisabled);
    }

    let body = serde_json::to_string(&settings.manifest)?;

    Ok((
        [
            (
                header::CONTENT_TYPE,
                "application/manifest+json; charset=utf-8",
            ),
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
        ],
        body,
    )
        .into_response())
}
