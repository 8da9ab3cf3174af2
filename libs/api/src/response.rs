use axum::{http::StatusCode, response::IntoResponse};
use tracing::error;

use crate::ApiError;

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        match self {
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::ServerError(message) => {
                (StatusCode::INTERNAL_SERVER_ERROR, message).into_response()
            }
        }
    }
}

pub type ApiResponse<T> = Result<T, ApiError>;

pub trait IntoApiResponse<T> {
    fn into_response(self, message: &str) -> ApiResponse<T>;
}

impl<T> IntoApiResponse<T> for anyhow::Result<T> {
    fn into_response(self, message: &str) -> ApiResponse<T> {
        self.map_err(|e| {
            error!("{:?}", e);
            ApiError::ServerError(message.to_string())
        })
    }
}
