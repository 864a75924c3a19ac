mod ascii;
mod auth;
mod config;
mod db;
mod error;
mod extractors;
mod routes;
mod state;
mod terminal;

use axum::Router;
use clap::Parser;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use crate::auth::session::SessionStore;
use crate::config::{Cli, Config};
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Parse CLI args and load config
    let cli = Cli::parse();
    let data_dir = Config::data_dir(&cli);
    std::fs::create_dir_all(&data_dir)?;
    tracing::info!("Data directory: {}", data_dir.display());

    let config = Config::load(&cli)?;
    if config.auth.admin_hash.is_none() {
        tracing::warn!("No admin_hash configured; /login will always fail");
    }

    // Initialize database
    let pool = db::create_pool(config.db_path())?;
    db::run_migrations(&pool)?;

    let purged = SessionStore::new(pool.clone(), config.auth.session_hours).purge_expired()?;
    if purged > 0 {
        tracing::info!("Purged {} expired sessions", purged);
    }

    // Build app state and router
    let state = AppState {
        db: pool,
        config: config.clone(),
    };

    let app = Router::new()
        .merge(routes::terminal::router())
        .merge(routes::admin::router())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    // Start server
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    tracing::info!("Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
