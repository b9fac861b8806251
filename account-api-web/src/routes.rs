//! Route table and actix handlers for `/accounts`.

use account_api_core::error::CoreError;
use account_api_core::types::AccountPayload;
use actix_web::{HttpResponse, web};
use tracing_attributes::instrument;

use crate::endpoint::AccountEndpoint;
use crate::error::{ApiError, ApiResult};

/// Register the account routes and the JSON body error handler.
///
/// Expects an `AccountEndpoint` in app data.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config()).service(
        web::scope("/accounts")
            .route("", web::get().to(list_accounts))
            .route("", web::post().to(create_account))
            .route("/{id}", web::get().to(get_account))
            .route("/{id}", web::put().to(update_account))
            .route("/{id}", web::delete().to(delete_account)),
    );
}

/// Malformed or non-object bodies become a 400 with the usual error shape.
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        ApiError::from(CoreError::ValidationError(format!("Invalid request body: {err}"))).into()
    })
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), method = "GET"))]
async fn list_accounts(endpoint: web::Data<AccountEndpoint>) -> ApiResult<HttpResponse> {
    endpoint.list().await
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), method = "GET", id = %id))]
async fn get_account(
    endpoint: web::Data<AccountEndpoint>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    endpoint.get(&id).await
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), method = "POST"))]
async fn create_account(
    endpoint: web::Data<AccountEndpoint>,
    payload: web::Json<AccountPayload>,
) -> ApiResult<HttpResponse> {
    endpoint.create(payload.into_inner()).await
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), method = "PUT", id = %id))]
async fn update_account(
    endpoint: web::Data<AccountEndpoint>,
    id: web::Path<String>,
    payload: web::Json<AccountPayload>,
) -> ApiResult<HttpResponse> {
    endpoint.update(&id, payload.into_inner()).await
}

#[instrument(skip_all, fields(request_id = %uuid::Uuid::new_v4(), method = "DELETE", id = %id))]
async fn delete_account(
    endpoint: web::Data<AccountEndpoint>,
    id: web::Path<String>,
) -> ApiResult<HttpResponse> {
    endpoint.delete(&id).await
}
