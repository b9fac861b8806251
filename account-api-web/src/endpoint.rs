//! `AccountEndpoint`: maps HTTP operations on `/accounts` onto an `AccountStore`.

use std::sync::Arc;

use account_api_core::error::CoreError;
use account_api_core::traits::AccountStore;
use account_api_core::types::{AccountId, AccountPayload};
use actix_web::HttpResponse;

use crate::error::ApiResult;

/// Stateless request handler for the account resource.
///
/// Holds nothing but the injected store, so one instance is shared by every
/// worker. Update and delete are check-then-act; atomicity across the two
/// store calls is left to the store.
#[derive(Clone)]
pub struct AccountEndpoint {
    store: Arc<dyn AccountStore>,
}

impl AccountEndpoint {
    #[must_use]
    pub fn new(store: Arc<dyn AccountStore>) -> Self {
        Self { store }
    }

    /// `GET /accounts` → 200 with every stored account.
    pub async fn list(&self) -> ApiResult<HttpResponse> {
        let accounts = self.store.find_all().await?;
        tracing::debug!(count = accounts.len(), "Listed accounts");
        Ok(HttpResponse::Ok().json(accounts))
    }

    /// `GET /accounts/{id}` → 200 with the account, or 404.
    pub async fn get(&self, raw_id: &str) -> ApiResult<HttpResponse> {
        let id: AccountId = raw_id.parse()?;
        let account = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::AccountNotFound(id))?;
        Ok(HttpResponse::Ok().json(account))
    }

    /// `POST /accounts` → 201 with the persisted account.
    ///
    /// No existence check: whatever the payload says is saved.
    pub async fn create(&self, payload: AccountPayload) -> ApiResult<HttpResponse> {
        let account = self.store.save(payload).await?;
        tracing::info!(id = %account.id, "Created account");
        Ok(HttpResponse::Created().json(account))
    }

    /// `PUT /accounts/{id}` → 200 with the updated account, or 404.
    ///
    /// The path id replaces any id in the body.
    pub async fn update(&self, raw_id: &str, payload: AccountPayload) -> ApiResult<HttpResponse> {
        let id: AccountId = raw_id.parse()?;
        if self.store.find_by_id(id).await?.is_none() {
            return Err(CoreError::AccountNotFound(id).into());
        }

        let account = self.store.save(payload.with_id(id)).await?;
        tracing::info!(id = %account.id, "Updated account");
        Ok(HttpResponse::Ok().json(account))
    }

    /// `DELETE /accounts/{id}` → 204, or 404.
    pub async fn delete(&self, raw_id: &str) -> ApiResult<HttpResponse> {
        let id: AccountId = raw_id.parse()?;
        let account = self
            .store
            .find_by_id(id)
            .await?
            .ok_or(CoreError::AccountNotFound(id))?;

        self.store.delete(&account).await?;
        tracing::info!(%id, "Deleted account");
        Ok(HttpResponse::NoContent().finish())
    }
}
