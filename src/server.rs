use std::sync::Arc;

use anyhow::Result;

use crate::config::Config;
use crate::pwa::{PwaStore, ScriptTemplates};
use crate::routes::{self, AppState};

/// Bind and serve until the process is stopped.
///
/// Script templates load before the listener binds; a missing asset keeps the
/// server from coming up half-initialized.
pub async fn serve(config: Config) -> Result<()> {
    let scripts = Arc::new(ScriptTemplates::load()?);

    let pwa = PwaStore::new(config.pwa.clone());
    let state = AppState { pwa, scripts };

    let app = routes::router(&config.routes, state);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", listener.local_addr()?);
    tracing::info!(
        worker = %config.routes.worker_path(),
        manifest = %config.routes.manifest_path(),
        "PWA routes mounted"
    );

    axum::serve(listener, app).await?;

    Ok(())
}
