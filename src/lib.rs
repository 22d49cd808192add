pub mod config;
pub mod error;
pub mod observability;
pub mod pwa;
pub mod routes;
pub mod server;

pub use routes::AppState;

use std::sync::Arc;

/// Create the app router for testing
///
/// Builds the Axum router with the PWA routes configured against the given
/// store, useful for integration testing without starting the full server.
pub fn create_app(routes: &config::RouteTable, pwa: pwa::PwaStore) -> anyhow::Result<axum::Router> {
    let scripts = Arc::new(pwa::ScriptTemplates::load()?);

    Ok(routes::router(routes, AppState { pwa, scripts }))
}
