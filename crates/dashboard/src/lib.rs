//! Dashboard crate: renders the popularity ranking as HTML and serves it.
//!
//! The page is rendered once at startup with [`render_dashboard`] and then
//! served from memory; poster images are served from a static directory.

pub mod config;
pub mod error;
pub mod render;
pub mod router;
pub mod state;

pub use config::DashboardConfig;
pub use error::{DashboardError, Result};
pub use render::render_dashboard;
pub use router::create_router;
pub use state::AppState;

use tracing::{info, warn};

/// Serve the rendered page until Ctrl-C
pub async fn run_server(config: &DashboardConfig, page: String) -> Result<()> {
    config.validate()?;

    if !config.assets_dir.is_dir() {
        warn!(
            "Assets directory {:?} not found, poster requests will return 404",
            config.assets_dir
        );
    }

    let state = AppState::new(page);
    let app = create_router(state, config.images_route(), &config.assets_dir);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| DashboardError::Bind { addr, source })?;

    info!("Serving dashboard on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Dashboard server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
