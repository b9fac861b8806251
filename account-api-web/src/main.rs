use anyhow::Context;

use account_api_web::config::AppConfig;
use account_api_web::{logging, server, store};

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::load().context("failed to load configuration")?;
    let _log_guard = logging::init(&config.log)?;

    let store = store::build(&config.store)
        .await
        .context("failed to open account store")?;

    server::run(&config.server, store).await?;
    tracing::info!("Account API stopped");
    Ok(())
}
