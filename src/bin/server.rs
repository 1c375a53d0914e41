use std::sync::Arc;

use tracing::info;
use tracing_subscriber::EnvFilter;

use taixiu::engine::ForecastEngine;
use taixiu::env_config;
use taixiu::server::create_router;
use taixiu::source::{build_client, run_keepalive, run_poller};
use taixiu::storage::JsonFileStore;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let port = env_config::server_port();
    let store = Arc::new(JsonFileStore::new(env_config::history_file()));
    let engine = Arc::new(ForecastEngine::with_store(store));

    let client = build_client().expect("failed to build http client");
    tokio::spawn(run_poller(
        engine.clone(),
        client.clone(),
        env_config::source_url(),
    ));
    tokio::spawn(run_keepalive(client, env_config::self_url(port)));

    let app = create_router(engine);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", port))
        .await
        .unwrap();
    info!(port, "server is running, press Ctrl+C to stop");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .unwrap();

    info!("stopping server");
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("failed to install CTRL+C signal handler");
}
