use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use dh_derive::api_model;
use std::borrow::Cow;
use tracing::{error, warn};

/// Stable code returned when a request body fails validation.
pub const INVALID_REQUEST: &str = "INVALID_REQUEST";
/// Stable code returned for unexpected server-side failures.
pub const INTERNAL: &str = "INTERNAL";

/// Errors a handler can turn into an HTTP response.
#[dh_derive::dh_error]
pub enum ApiError {
    /// The body could not be read, was not JSON, or did not match the schema.
    #[error("Invalid request{}: {message}", format_context(.context))]
    InvalidRequest { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

#[api_model]
/// Error payload
pub struct ErrorResponse {
    /// Human readable summary
    pub error: String,
    /// Machine readable code
    pub code: String,
}

impl ApiError {
    #[must_use]
    pub fn invalid_request(reason: impl ToString) -> Self {
        Self::InvalidRequest { message: reason.to_string().into(), context: None }
    }

    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::InvalidRequest { .. } => StatusCode::BAD_REQUEST,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Public body for this error. Details stay in the logs.
    #[must_use]
    pub fn body(&self) -> ErrorResponse {
        let (error, code) = match self {
            Self::InvalidRequest { .. } => ("Invalid request", INVALID_REQUEST),
            Self::Internal { .. } => ("Internal error", INTERNAL),
        };
        ErrorResponse { error: error.to_owned(), code: code.to_owned() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!(error = %self, "Request failed");
        } else {
            warn!(error = %self, "Request rejected");
        }

        (status, Json(self.body())).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_errors_share_one_public_code() {
        let err = Err::<(), _>(ApiError::invalid_request("theme must be a string"))
            .context("Decoding JSON body")
            .expect_err("still an error");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert!(err.to_string().contains("(Decoding JSON body)"));

        let body = err.body();
        assert_eq!(body.error, "Invalid request");
        assert_eq!(body.code, INVALID_REQUEST);
    }

    #[test]
    fn internal_errors_hide_their_message() {
        let err = ApiError::from("slice not registered");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.body().error, "Internal error");
        assert_eq!(err.body().code, INTERNAL);
    }
}
