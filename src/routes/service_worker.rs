use axum::{
    extract::State,
    http::{HeaderName, HeaderValue, header},
    response::{IntoResponse, Response},
};

use super::AppState;
use crate::error::AppError;
use crate::pwa::select_worker_variant;

pub const SERVICE_WORKER_ALLOWED: HeaderName = HeaderName::from_static("service-worker-allowed");

/// Serve the worker script variant the active settings call for.
///
/// Clients must re-check the worker on every visit, hence no-store caching.
pub async fn asset(State(state): State<AppState>) -> Result<Response, AppError> {
    let settings = state.pwa.current();
    let variant = select_worker_variant(&settings).ok_or(AppError::NoWorkerVariant)?;

    let mut response = (
        [
            (
                header::CONTENT_TYPE,
                "application/javascript; charset=utf-8",
            ),
            (header::CACHE_CONTROL, "no-cache, no-store, must-revalidate"),
        ],
        state.scripts.script_for(variant).to_owned(),
    )
        .into_response();

    // Omitting the header lets the client default to the script's own
    // directory scope.
    if let Some(scope) = &settings.scope {
        match HeaderValue::from_str(scope) {
            Ok(value) => {
                response.headers_mut().insert(SERVICE_WORKER_ALLOWED, value);
            }
            Err(e) => {
                tracing::error!("Configured scope is not a valid header value: {}", e);
            }
        }
    }

    Ok(response)
}
