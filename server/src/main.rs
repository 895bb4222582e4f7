mod config;
mod db;
mod routes;
mod services;
mod state;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "marks server stopped");
            ExitCode::FAILURE
        }
    }
}

#[derive(Debug, thiserror::Error)]
enum StartupError {
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error("database init failed: {0}")]
    Database(#[from] sqlx::Error),
    #[error("server i/o: {0}")]
    Io(#[from] std::io::Error),
}

async fn run() -> Result<(), StartupError> {
    let cfg = config::ServerConfig::from_env()?;
    let pool = db::init_pool(&cfg.database_url, cfg.db_max_connections).await?;
    let state = state::AppState::new(pool, &cfg.image_name);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", cfg.port)).await?;

    tracing::info!(port = cfg.port, image = %cfg.image_name, "marks server listening");
    axum::serve(listener, app).await?;
    Ok(())
}
