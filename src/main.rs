//! Order Service entry point
//!
//! Loads `config/{env}.yaml`, initializes logging, seeds the in-memory
//! store, and serves the HTTP API.

use std::sync::Arc;

use order_service::catalog::FixedCatalog;
use order_service::config::AppConfig;
use order_service::gateway::{self, state::AppState};
use order_service::logging::init_logging;
use order_service::store::OrderStore;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env = get_env();
    let config = AppConfig::load(&env)?;
    let _guard = init_logging(&config);

    tracing::info!("Starting Order Service (env: {})", env);

    let store = Arc::new(OrderStore::new(Arc::new(FixedCatalog)));
    let state = Arc::new(AppState::new(store));

    gateway::run_server(&config, state).await
}
