use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;
use tracing::error;

use thoughts_db::StoreError;
use thoughts_types::{ApiEnvelope, MessageError};

/// Every way a request can fail, mapped to a status code in one place. The
/// body is always the failure envelope with the error detail in `response`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] MessageError),
    #[error("malformed thought id '{0}'")]
    MalformedId(String),
    #[error("no thought found with id '{0}'")]
    NotFound(String),
    #[error("database error: {0}")]
    Database(StoreError),
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::MalformedId(id) => ApiError::MalformedId(id),
            other => ApiError::Database(other),
        }
    }
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) | ApiError::MalformedId(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn summary(&self) -> &'static str {
        match self {
            ApiError::Validation(_) => "Invalid thought message",
            ApiError::MalformedId(_) => "Invalid thought id",
            ApiError::NotFound(_) => "Thought not found",
            ApiError::Database(_) => "Something went wrong on our side",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Driver errors get logged with full detail but never echoed to the
        // client verbatim.
        let detail = match &self {
            ApiError::Database(err) => {
                error!("persistence failure: {err}");
                "database unavailable".to_owned()
            }
            other => other.to_string(),
        };
        let body = ApiEnvelope::fail(detail, self.summary());
        (self.status(), Json(body)).into_response()
    }
}
