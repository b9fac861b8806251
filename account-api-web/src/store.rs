use std::sync::Arc;

use account_api_core::error::CoreResult;
use account_api_core::traits::{AccountStore, InMemoryAccountStore};
use account_api_storage::SqliteStore;

use crate::config::{StoreBackend, StoreConfig};

/// Build the configured `AccountStore`.
pub async fn build(config: &StoreConfig) -> CoreResult<Arc<dyn AccountStore>> {
    match config.backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory account store");
            Ok(Arc::new(InMemoryAccountStore::new()))
        }
        StoreBackend::Sqlite => {
            tracing::info!(path = %config.path.display(), "Using SQLite account store");
            Ok(Arc::new(SqliteStore::new(&config.path).await?))
        }
    }
}
