use std::net::SocketAddr;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use transit_server::cache::CacheConfig;
use transit_server::dataset::{Dataset, DatasetConfig};
use transit_server::network::TravelConfig;
use transit_server::web::{AppState, create_router};

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("transit_server=info")),
        )
        .init();

    let data_dir = std::env::var("TRANSIT_DATA_DIR").unwrap_or_else(|_| "data".to_string());
    let addr: SocketAddr = std::env::var("TRANSIT_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .expect("TRANSIT_ADDR must be a socket address");

    // Load networks and cities (fail fast if unavailable)
    let dataset = match Dataset::load(&DatasetConfig::new(&data_dir)) {
        Ok(dataset) => dataset,
        Err(e) => {
            error!(dir = %data_dir, error = %e, "failed to load dataset");
            std::process::exit(1);
        }
    };

    let state = AppState::new(dataset, TravelConfig::default(), &CacheConfig::default());
    let app = create_router(state);

    info!(%addr, "transit server listening");
    info!("  GET  /health              - Health check");
    info!("  GET  /cities              - Registered cities");
    info!("  POST /maze/solve          - Solve a single maze");
    info!("  GET  /compare?from=&to=   - Compare transport modes");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("failed to bind listener");
    axum::serve(listener, app).await.expect("server error");
}
