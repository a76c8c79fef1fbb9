use tracing_subscriber::EnvFilter;

use forecaster_server::app_state::AppState;
use forecaster_server::config::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = ServerConfig::from_env()?;
    if let Some(seed) = config.seed {
        tracing::info!("Using seeded predictions (seed {seed})");
    }

    let state = AppState::with_seed(config.seed);
    let app = forecaster_server::router::create_router(state);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Sales Forecaster API listening on {addr}");

    axum::serve(listener, app).await?;
    Ok(())
}
