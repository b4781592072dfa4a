use log::info;
use std::env;
use std::error::Error;
use std::sync::Arc;

use trip_planner::models::{AppConfig, AppState};
use trip_planner::router;
use trip_planner::store::SqliteStore;
use trip_planner::utils::{initialize_logger, initialize_request_tracing};

fn main() -> Result<(), Box<dyn Error>> {
    // Parse command line argument for config file path
    let config_path = env::args()
        .nth(1)
        .unwrap_or_else(|| "config.toml".to_string());

    let config = AppConfig::from_file(&config_path)
        .map_err(|e| format!("Failed to read config file {config_path}: {e}"))?;

    initialize_logger(&config.log_path, &config.log_level)?;
    initialize_request_tracing(&config.log_level)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.get_max_workers())
        .enable_all()
        .build()?;

    runtime.block_on(serve(config))
}

async fn serve(config: AppConfig) -> Result<(), Box<dyn Error>> {
    let web_base_url = config.get_web_base_url()?;

    let store = SqliteStore::open(
        &config.database_path,
        config.get_db_pool_max_size(),
        config.get_db_pool_min_idle(),
        config.get_db_pool_timeout_seconds(),
    )?;

    let state = Arc::new(AppState {
        trips: Arc::new(store),
        web_base_url,
    });

    let listener =
        tokio::net::TcpListener::bind((config.bind_address.as_str(), config.port)).await?;
    info!(
        "Trip planner listening on {}:{} with {} workers",
        config.bind_address,
        config.port,
        config.get_max_workers()
    );

    axum::serve(listener, router(state)).await?;
    Ok(())
}
