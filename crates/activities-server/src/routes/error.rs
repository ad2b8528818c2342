//! Mapping from service errors to HTTP responses.

use activities_core::Error;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use tracing::{debug, error};

/// Handler error. Renders as `{"detail": "..."}` with a status matching the
/// error kind.
#[derive(Debug)]
pub struct ApiError(pub Error);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            Error::NotFound(_) => StatusCode::NOT_FOUND,
            Error::DuplicateRegistration(_) => StatusCode::BAD_REQUEST,
            Error::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Error::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if self.0.is_client_error() {
            debug!("Rejected request ({}): {}", status, self.0);
        } else {
            error!("Request failed: {}", self.0);
        }
        (status, Json(serde_json::json!({ "detail": self.0.to_string() }))).into_response()
    }
}
