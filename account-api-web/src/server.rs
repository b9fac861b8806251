use std::sync::Arc;

use account_api_core::traits::AccountStore;
use actix_web::{App, HttpServer, web};
use anyhow::Context;

use crate::config::ServerConfig;
use crate::endpoint::AccountEndpoint;
use crate::routes;

/// Bind and serve until the server receives a shutdown signal.
pub async fn run(config: &ServerConfig, store: Arc<dyn AccountStore>) -> anyhow::Result<()> {
    let endpoint = web::Data::new(AccountEndpoint::new(store));
    let workers = config.worker_count();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(endpoint.clone())
            .configure(routes::configure)
    })
    .workers(workers)
    .bind((config.host.as_str(), config.port))
    .with_context(|| format!("failed to bind {}:{}", config.host, config.port))?;

    tracing::info!(
        host = %config.host,
        port = config.port,
        workers,
        "Account API listening"
    );
    server.run().await.context("server terminated abnormally")
}
