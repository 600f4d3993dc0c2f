use axum::{extract::State, response::Response, Form};
use std::sync::Arc;

use showbill_db::forms::{FormData, ShowDraft};
use showbill_db::store::shows;
use showbill_db::{AppState, StoreError, ValidationError};

use super::{form_data, invalid, listed};
use crate::error::AppError;
use crate::views::{self, Page};

const REJECTED: &str = "Show could not be listed. Please fix the errors below.";

/// GET /shows
pub async fn list_shows(State(state): State<Arc<AppState>>) -> Result<Page, AppError> {
    let listings = shows::list_detailed(&state.db).await?;
    Ok(views::shows(&listings))
}

/// GET /shows/create
pub async fn create_show_form() -> Page {
    views::show_form(&FormData::default(), &ValidationError::new())
}

/// POST /shows/create
pub async fn create_show(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = form_data(pairs);

    let draft = match ShowDraft::from_form(&form) {
        Ok(draft) => draft,
        Err(errors) => return Ok(invalid(views::show_form(&form, &errors), REJECTED)),
    };

    match shows::create(&state.db, draft).await {
        Ok(_) => Ok(listed("Show was successfully listed!")),
        Err(StoreError::MissingReference { entity, id }) => {
            let field = if entity == "artist" { "artist_id" } else { "venue_id" };
            let mut errors = ValidationError::new();
            errors.add(field, format!("No {entity} with ID {id}"));
            Ok(invalid(views::show_form(&form, &errors), REJECTED))
        }
        Err(e) => Err(AppError::failed(
            e,
            "An error occurred. Show could not be listed.",
        )),
    }
}
