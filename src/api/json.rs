//! The JSON extractor and error body shared by the REST handlers.

use axum::{
    Json,
    extract::{FromRequest, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

use crate::Error;

/// A JSON body or response whose extraction errors are reported as an [ApiError].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

impl<T> IntoResponse for ApiJson<T>
where
    Json<T>: IntoResponse,
{
    fn into_response(self) -> Response {
        Json(self.0).into_response()
    }
}

/// An error response with the body `{"error": "<message>"}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    pub fn not_found(message: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.to_owned(),
        }
    }
}

impl From<Error> for ApiError {
    fn from(error: Error) -> Self {
        let status = match error {
            ref error if error.is_validation_error() => StatusCode::BAD_REQUEST,
            Error::NotFound
            | Error::UpdateMissingCategory
            | Error::DeleteMissingCategory
            | Error::UpdateMissingMedication
            | Error::DeleteMissingMedication => StatusCode::NOT_FOUND,
            Error::ConstraintViolation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ref error => {
                tracing::error!("An unexpected error occurred: {error}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        Self {
            status,
            message: error.user_message(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Error::InvalidRequestBody(rejection.body_text()).into()
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(json!({ "error": self.message }))).into_response()
    }
}

/// Wrap a successful result so handlers can share one return type.
pub type ApiResult<T> = Result<ApiJson<T>, ApiError>;

/// The shape of every error body, for tests that decode responses.
#[cfg(test)]
#[derive(Debug, serde::Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}
