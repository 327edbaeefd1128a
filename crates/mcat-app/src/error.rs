use axum::{
    response::{IntoResponse, Response},
    Json,
};
use http::StatusCode;
use serde_json::json;
use tracing::error;

pub type ApiResult<T, E = ApiError> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    ResourceNotFound(String),

    #[error("{0}")]
    InvalidInput(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl From<mcat_dal::Error> for ApiError {
    fn from(value: mcat_dal::Error) -> Self {
        match value {
            e @ mcat_dal::Error::RecordNotFound { .. } => ApiError::ResourceNotFound(e.to_string()),
            e @ mcat_dal::Error::MissingField(_) => ApiError::InvalidInput(e.to_string()),
            e => ApiError::InternalError(e.to_string()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::ResourceNotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::InternalError(msg) => {
                // details stay in the log
                error!("Request failed: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
