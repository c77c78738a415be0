//! notes-api - HTTP API server for the notes service

use std::sync::Arc;

use tracing::info;

use notes_api::config::LogConfig;
use notes_api::{build_router, logging, ApiConfig, AppState};
use notes_db::Database;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Tracing first, so config fallbacks below are logged
    let log_config = LogConfig::from_env();
    let _file_guard = logging::init_tracing(&log_config);
    info!(
        log_format = ?log_config.format,
        log_file = log_config.file.as_deref().unwrap_or("(stdout)"),
        "Logging initialized"
    );

    let config = ApiConfig::from_env();
    info!(
        allowed_origin = ?config.allowed_origin,
        swagger_ui = config.swagger_ui,
        "CORS origin and docs configured"
    );

    // Connect to database
    info!("Connecting to database...");
    let db = Database::connect_with_config(&config.database_url, config.pool.clone()).await?;
    info!("Database connected");

    if config.run_migrations {
        db.migrate().await?;
        info!("Migrations applied");
    }
    notes_db::log_pool_metrics(db.pool());

    let state = AppState::new(Arc::new(db.notes.clone()));
    let app = build_router(state, &config);

    // Start server
    let addr = config.bind_addr()?;
    info!("Starting server on {}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
