//! Unified error handling with Sentry integration.
//!
//! Route handlers return `Result<T, AppError>`. Server-side failures are
//! captured to Sentry before the response is built.
//!
//! Note that a failed product query never reaches this type: the listing
//! loader swallows it and renders an empty listing. Only the category
//! lookup and parameter validation surface as errors.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use lama_core::ListingParamError;
use thiserror::Error;

use crate::catalog::CatalogError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Hosted catalog call failed.
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    /// Malformed listing parameters.
    #[error("Bad request: {0}")]
    BadRequest(#[from] ListingParamError),
}

impl AppError {
    const fn status(&self) -> StatusCode {
        match self {
            Self::Catalog(CatalogError::RateLimited(_)) => StatusCode::SERVICE_UNAVAILABLE,
            Self::Catalog(_) => StatusCode::BAD_GATEWAY,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Capture upstream failures to Sentry
        if matches!(self, Self::Catalog(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = self.status();

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Catalog(_) => "Our catalog is unavailable right now, please try again".to_string(),
            Self::BadRequest(_) => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::from(ListingParamError::InvalidPage("x".to_string()));
        assert_eq!(
            err.to_string(),
            "Bad request: invalid page 'x': expected a non-negative integer"
        );
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::BadRequest(ListingParamError::ZeroPageSize)),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::Status {
                status: 500,
                body: String::new(),
            })),
            StatusCode::BAD_GATEWAY
        );
        assert_eq!(
            get_status(AppError::Catalog(CatalogError::RateLimited(3))),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }
}
