//! Client-facing request errors.
//!
//! # Design
//! Only two kinds reach a caller: the request was malformed (400) or the
//! addressed todo does not exist (404). Both render as `{"error": "..."}`.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use todo_core::StoreError;
use tracing::warn;

use crate::responses::ErrorResponse;

pub(crate) const INVALID_ID_MESSAGE: &str = "Invalid todo ID";

#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed path id or request body.
    #[error("{0}")]
    InvalidInput(String),

    #[error("Todo not found")]
    NotFound,
}

impl ApiError {
    pub fn invalid_id() -> Self {
        ApiError::InvalidInput(INVALID_ID_MESSAGE.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        warn!(status = status.as_u16(), error = %self, "request rejected");

        let body = ErrorResponse {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound(_) => ApiError::NotFound,
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::InvalidInput(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_not_found_maps_to_404() {
        let err = ApiError::from(StoreError::NotFound(3));
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.to_string(), "Todo not found");
    }

    #[test]
    fn invalid_id_maps_to_400() {
        let err = ApiError::invalid_id();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.to_string(), INVALID_ID_MESSAGE);
    }

    #[test]
    fn into_response_keeps_status() {
        let resp = ApiError::NotFound.into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let resp = ApiError::InvalidInput("bad".into()).into_response();
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }
}
