use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form, Json,
};
use serde_json::json;
use std::sync::Arc;

use showbill_db::forms::{FormData, VenueChanges, VenueDraft};
use showbill_db::store::venues;
use showbill_db::{AppState, ValidationError};

use super::{form_data, invalid, listed, now, parse_id, SearchForm};
use crate::error::AppError;
use crate::views::{self, FormMode, Page, SearchKind};

/// GET /venues
pub async fn list_venues(State(state): State<Arc<AppState>>) -> Result<Page, AppError> {
    let areas = venues::list_by_area(&state.db, now()).await?;
    Ok(views::venues(&areas))
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Result<Page, AppError> {
    let results = venues::search(&state.db, &form.search_term).await?;
    let matches: Vec<(i32, &str)> = results
        .matches
        .iter()
        .map(|v| (v.id, v.name.as_str()))
        .collect();
    Ok(views::search_results(
        SearchKind::Venues,
        &form.search_term,
        results.count,
        &matches,
    ))
}

/// GET /venues/{id}
pub async fn show_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Page, AppError> {
    let id = parse_id(&id)?;
    let detail = venues::detail(&state.db, id, now()).await?;
    Ok(views::venue_detail(&detail))
}

/// GET /venues/create
pub async fn create_venue_form() -> Page {
    views::venue_form(FormMode::Create, &FormData::default(), &ValidationError::new())
}

/// POST /venues/create
pub async fn create_venue(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = form_data(pairs);
    let name = form.get("name").unwrap_or_default().to_string();

    let draft = match VenueDraft::from_form(&form) {
        Ok(draft) => draft,
        Err(errors) => {
            let page = views::venue_form(FormMode::Create, &form, &errors);
            return Ok(invalid(
                page,
                format!("Venue {name} could not be listed. Please fix the errors below."),
            ));
        }
    };

    venues::create(&state.db, draft).await.map_err(|e| {
        AppError::failed(
            e,
            format!("An error occurred. Venue {name} could not be listed."),
        )
    })?;
    Ok(listed(format!("Venue {name} was successfully listed!")))
}

/// GET /venues/{id}/edit
pub async fn edit_venue_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Page, AppError> {
    let id = parse_id(&id)?;
    let venue = venues::get(&state.db, id).await?;
    Ok(views::venue_form(
        FormMode::Edit {
            id,
            name: &venue.name,
        },
        &FormData::from(&venue),
        &ValidationError::new(),
    ))
}

/// POST /venues/{id}/edit
pub async fn edit_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let form = form_data(pairs);

    let changes = match VenueChanges::from_form(&form) {
        Ok(changes) => changes,
        Err(errors) => {
            let venue = venues::get(&state.db, id).await?;
            let values = FormData::from(&venue).overlaid(&form);
            let page = views::venue_form(
                FormMode::Edit {
                    id,
                    name: &venue.name,
                },
                &values,
                &errors,
            );
            return Ok(invalid(
                page,
                format!("Venue {} could not be updated.", venue.name),
            ));
        }
    };

    venues::update(&state.db, id, changes).await.map_err(|e| {
        AppError::failed(e, "An error occurred. The venue could not be updated.")
    })?;
    Ok(Redirect::to(&format!("/venues/{id}")).into_response())
}

/// DELETE /venues/{id}/delete
pub async fn delete_venue(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let id = parse_id(&id)?;
    venues::delete(&state.db, id).await?;
    Ok(Json(json!({ "success": true })))
}
