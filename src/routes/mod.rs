use std::sync::Arc;

use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};
use tower_http::trace::TraceLayer;

use crate::config::RouteTable;
use crate::pwa::{PwaStore, ScriptTemplates};

mod health;
mod manifest;
mod service_worker;

#[derive(Clone)]
pub struct AppState {
    pub pwa: PwaStore,
    pub scripts: Arc<ScriptTemplates>,
}

/// All paths outside the PWA surface belong to the host application; here
/// they are a plain 404.
pub async fn fallback() -> impl IntoResponse {
    StatusCode::NOT_FOUND
}

pub fn router(routes: &RouteTable, state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health))
        .route(&routes.worker_path(), get(service_worker::asset))
        .route(&routes.manifest_path(), get(manifest::asset))
        .fallback(fallback)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
