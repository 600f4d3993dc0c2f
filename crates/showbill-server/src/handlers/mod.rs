//! Page handlers, one per route.

pub mod artists;
pub mod shows;
pub mod venues;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use chrono::NaiveDateTime;
use serde::Deserialize;
use showbill_db::forms::FormData;

use crate::error::AppError;
use crate::views::{self, Flash, Page};

#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// GET /
pub async fn index() -> Page {
    views::home()
}

/// Any unmatched route.
pub async fn not_found() -> AppError {
    AppError::NotFound
}

/// Record ids in paths are plain digit strings; anything else names no record.
pub(crate) fn parse_id(raw: &str) -> Result<i32, AppError> {
    if !raw.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(AppError::NotFound);
    }
    raw.parse().map_err(|_| AppError::NotFound)
}

pub(crate) fn now() -> NaiveDateTime {
    chrono::Utc::now().naive_utc()
}

pub(crate) fn form_data(pairs: Vec<(String, String)>) -> FormData {
    pairs.into_iter().collect()
}

/// A rejected submission: the form again, with a 422 and an error flash.
pub(crate) fn invalid(page: Page, message: impl Into<String>) -> Response {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        page.flash(Flash::error(message)),
    )
        .into_response()
}

/// The home page announcing a successful listing.
pub(crate) fn listed(message: impl Into<String>) -> Response {
    views::home().flash(Flash::success(message)).into_response()
}
