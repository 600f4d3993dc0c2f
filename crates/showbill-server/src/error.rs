use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use showbill_db::StoreError;

use crate::views::{self, Flash};

/// Failure of a page handler, rendered as an error page.
#[derive(Debug)]
pub enum AppError {
    NotFound,
    Internal { flash: Option<String> },
}

impl AppError {
    /// A failed write. The error page carries `flash` unless the record was
    /// simply missing.
    pub fn failed(err: StoreError, flash: impl Into<String>) -> Self {
        match Self::from(err) {
            AppError::Internal { .. } => AppError::Internal {
                flash: Some(flash.into()),
            },
            other => other,
        }
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { entity, id } => {
                tracing::debug!(entity, id, "record not found");
                AppError::NotFound
            }
            other => {
                tracing::error!(error = %other, "request failed");
                AppError::Internal { flash: None }
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, views::not_found()).into_response(),
            AppError::Internal { flash } => {
                let mut page = views::server_error();
                if let Some(message) = flash {
                    page = page.flash(Flash::error(message));
                }
                (StatusCode::INTERNAL_SERVER_ERROR, page).into_response()
            }
        }
    }
}
