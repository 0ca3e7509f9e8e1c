use std::net::SocketAddr;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

use civic_lookup_server::config::load_config;
use civic_lookup_server::core::error::AppError;
use civic_lookup_server::features::cicero::CiceroClient;
use civic_lookup_server::features::congress::CongressClient;
use civic_lookup_server::features::representatives::{CiceroDataSource, RepresentativeAggregator};
use civic_lookup_server::server::{AppState, build_router};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    init_tracing();

    let config = Arc::new(load_config()?);

    let cicero_client: Arc<dyn CiceroDataSource> = Arc::new(CiceroClient::new(config.clone())?);
    let aggregator = Arc::new(RepresentativeAggregator::new(cicero_client));
    let congress_client = Arc::new(CongressClient::new(config.clone())?);

    let app = build_router(AppState::new(aggregator, congress_client));

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!(%addr, "starting server");
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|err| AppError::internal(format!("failed to bind: {err}")))?;
    axum::serve(listener, app)
        .await
        .map_err(|err| AppError::internal(format!("server error: {err}")))?;

    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}
