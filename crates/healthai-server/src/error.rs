//! Mapping from domain errors to HTTP responses.
//!
//! Client errors carry their message. Internal failures are logged and
//! answered with a generic body.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use healthai_core::errors::error_code::{self, HealthAiErrorCode};
use healthai_core::errors::{PredictionError, ValidationError};
use healthai_core::HealthAiError;
use tracing::{error, warn};

use crate::dto::ErrorBody;

const INTERNAL_DETAIL: &str = "An internal error occurred while processing the request";

#[derive(Debug)]
pub enum ApiError {
    /// The body was not valid JSON or did not fit the request shape.
    Rejected(JsonRejection),
    Domain(HealthAiError),
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Rejected(rejection)
    }
}

impl From<HealthAiError> for ApiError {
    fn from(err: HealthAiError) -> Self {
        Self::Domain(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self::Domain(err.into())
    }
}

impl From<PredictionError> for ApiError {
    fn from(err: PredictionError) -> Self {
        Self::Domain(err.into())
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Rejected(rejection) => rejection.status(),
            Self::Domain(err) if err.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Domain(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let body = match self {
            Self::Rejected(rejection) => {
                let detail = rejection.body_text();
                warn!(%status, %detail, "request body rejected");
                ErrorBody {
                    error: error_code::VALIDATION_ERROR.to_string(),
                    detail,
                }
            }
            Self::Domain(HealthAiError::Validation(err)) => {
                warn!(error = %err, "request failed validation");
                ErrorBody {
                    error: err.error_code().to_string(),
                    detail: err.to_string(),
                }
            }
            Self::Domain(err) => {
                error!(error = %err, code = err.error_code(), "request failed");
                ErrorBody {
                    error: err.error_code().to_string(),
                    detail: INTERNAL_DETAIL.to_string(),
                }
            }
        };
        (status, Json(body)).into_response()
    }
}
