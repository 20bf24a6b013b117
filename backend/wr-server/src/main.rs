use wr_server::bootstrap::build_state;
use wr_server::{build_router, logger, metrics};

use std::error::Error;

use log::{error, info};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // .env is optional
    dotenvy::dotenv().ok();

    // Load and validate configuration
    let config = wr_config::Config::load()?;
    config.validate()?;

    // Initialize logger (before any other logging)
    logger::initialize(
        config.logging.level,
        config.log_file_path()?,
        config.logging.colored,
    )?;

    info!("Starting wr-server v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let prometheus = metrics::install_prometheus()?;

    let database_path = config.database_path()?;
    info!("Connecting to database: {}", database_path.display());
    let pool = wr_db::connect(&database_path).await?;

    let storage_root = config.storage_root()?;
    std::fs::create_dir_all(&storage_root)?;

    let state = build_state(&config, pool, Some(prometheus)).await?;
    let app = build_router(state, &storage_root);

    let listener = TcpListener::bind(config.bind_addr()).await?;
    info!("Server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => info!("Received SIGINT (Ctrl+C), shutting down"),
                Err(e) => error!("Failed to listen for SIGINT: {}", e),
            }
        })
        .await?;

    info!("Shutdown complete");
    Ok(())
}
