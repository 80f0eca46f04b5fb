use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use items_api::modules::items::adapters::outbound::items_in_memory::InMemoryItemsStore;
use items_api::shared::config::AppConfig;
use items_api::shell::http::router;
use items_api::shell::state::AppState;

const DEFAULT_LOG_FILTER: &str = "items_api=info,tower_http=info";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    let _ = dotenvy::dotenv();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));
    fmt().with_env_filter(filter).init();

    let config = AppConfig::from_env()?;

    // In-memory store; contents are lost on restart
    let store = Arc::new(InMemoryItemsStore::new());
    let state = AppState::new(store, config.default_limit);
    let app = router(state, &config.allowed_origins);

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("REST endpoint: http://{}/items", addr);
    tracing::info!("GraphQL endpoint: http://{}/gql", addr);
    axum::serve(listener, app).await?;
    Ok(())
}
