use account_api_core::error::CoreError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

/// HTTP layer error. Wraps `CoreError` and decides the status code.
///
/// `AccountNotFound` renders as an empty 404; everything else carries the
/// serialized `CoreError` as its JSON body.
#[derive(Debug)]
pub struct ApiError(pub CoreError);

pub type ApiResult<T> = Result<T, ApiError>;

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        if err.is_expected() {
            tracing::warn!("ApiError: {err}");
        } else {
            tracing::error!("ApiError: {err}");
        }
        Self(err)
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self.0 {
            CoreError::AccountNotFound(_) => StatusCode::NOT_FOUND,
            CoreError::InvalidAccountId(_) | CoreError::ValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            CoreError::SerializationError(_) | CoreError::StorageError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self.0 {
            CoreError::AccountNotFound(_) => HttpResponse::NotFound().finish(),
            _ => HttpResponse::build(self.status_code()).json(&self.0),
        }
    }
}
