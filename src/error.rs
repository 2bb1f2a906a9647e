//! Error types for the HTTP layer
//!
//! Every handler failure funnels through [`ApiError`], which renders exactly
//! one response per request.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::MessageResponse;
use crate::provider::ProviderError;

/// Message for unexpected failures on lookup endpoints.
pub const RETRY_LATER_MESSAGE: &str = "Something went wrong. Please try again later.";

/// Message for unexpected failures on listing endpoints.
pub const CONTACT_DEVELOPERS_MESSAGE: &str = "Something went wrong. Contact developers for help.";

// == Api Error Enum ==
/// Error returned by route handlers.
#[derive(Error, Debug)]
pub enum ApiError {
    /// `server` query parameter outside the known set
    #[error("Invalid server")]
    InvalidServer,

    /// `link` query parameter missing or empty
    #[error("Invalid link")]
    InvalidLink,

    /// Provider rejected a lookup
    #[error("{0}")]
    NotFound(ProviderError),

    /// Anything else; the detail is logged, never returned
    #[error("{message}: {source}")]
    Internal {
        message: &'static str,
        #[source]
        source: ProviderError,
    },
}

impl ApiError {
    /// Provider failure on a lookup endpoint (info, genre, watch, ...).
    pub fn lookup(err: ProviderError) -> Self {
        Self::NotFound(err)
    }

    /// Provider failure on a listing endpoint (search, top-airing, ...).
    pub fn listing(err: ProviderError) -> Self {
        Self::Internal {
            message: CONTACT_DEVELOPERS_MESSAGE,
            source: err,
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidServer | ApiError::InvalidLink => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            // Plain-text bodies for rejected input
            ApiError::InvalidServer | ApiError::InvalidLink => {
                (status, self.to_string()).into_response()
            }
            ApiError::NotFound(err) => {
                tracing::debug!(error = %err, "Provider lookup failed");
                (status, Json(MessageResponse::new(err.to_string()))).into_response()
            }
            ApiError::Internal { message, source } => {
                tracing::error!(error = %source, "Provider request failed");
                (status, Json(MessageResponse::new(message))).into_response()
            }
        }
    }
}

// == Panic Guard ==
/// Response for a handler that panicked; the panic payload is not exposed.
pub fn panic_response(_payload: Box<dyn std::any::Any + Send + 'static>) -> Response {
    tracing::error!("Route handler panicked");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(MessageResponse::new(RETRY_LATER_MESSAGE)),
    )
        .into_response()
}

// == Result Type Alias ==
/// Convenience Result type for route handlers.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::InvalidServer.status(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::InvalidLink.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::lookup(ProviderError::NotFound("gone".into())).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ApiError::listing(ProviderError::NotFound("gone".into())).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_input_error_messages() {
        assert_eq!(ApiError::InvalidServer.to_string(), "Invalid server");
        assert_eq!(ApiError::InvalidLink.to_string(), "Invalid link");
    }

    #[test]
    fn test_panic_response_status() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_listing_error_hides_detail() {
        let err = ApiError::listing(ProviderError::Decode("secret detail".into()));
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
