//! Application error type mapping to HTTP status codes.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use werkstatt_types::error::PageError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Page lookup or template errors.
    Page(PageError),
}

impl From<PageError> for AppError {
    fn from(e: PageError) -> Self {
        AppError::Page(e)
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::Page(PageError::NotFound(path)) => (
                StatusCode::NOT_FOUND,
                "PAGE_NOT_FOUND",
                format!("No page at '{path}'"),
            ),
            AppError::Page(e @ PageError::Template { .. }) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "TEMPLATE_ERROR", e.to_string())
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();
        if status.is_server_error() {
            tracing::error!(code, %message, "request failed");
        }

        let body = json!({
            "meta": {
                "timestamp": chrono::Utc::now().to_rfc3339(),
            },
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
