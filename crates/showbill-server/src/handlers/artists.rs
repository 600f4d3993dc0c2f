use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
    Form,
};
use std::sync::Arc;

use showbill_db::forms::{ArtistChanges, ArtistDraft, FormData};
use showbill_db::store::artists;
use showbill_db::{AppState, ValidationError};

use super::{form_data, invalid, listed, now, parse_id, SearchForm};
use crate::error::AppError;
use crate::views::{self, FormMode, Page, SearchKind};

/// GET /artists
pub async fn list_artists(State(state): State<Arc<AppState>>) -> Result<Page, AppError> {
    let list = artists::list(&state.db).await?;
    Ok(views::artists(&list))
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<Arc<AppState>>,
    Form(form): Form<SearchForm>,
) -> Result<Page, AppError> {
    let results = artists::search(&state.db, &form.search_term).await?;
    let matches: Vec<(i32, &str)> = results
        .matches
        .iter()
        .map(|a| (a.id, a.name.as_str()))
        .collect();
    Ok(views::search_results(
        SearchKind::Artists,
        &form.search_term,
        results.count,
        &matches,
    ))
}

/// GET /artists/{id}
pub async fn show_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Page, AppError> {
    let id = parse_id(&id)?;
    let detail = artists::detail(&state.db, id, now()).await?;
    Ok(views::artist_detail(&detail))
}

/// GET /artists/create
pub async fn create_artist_form() -> Page {
    views::artist_form(FormMode::Create, &FormData::default(), &ValidationError::new())
}

/// POST /artists/create
pub async fn create_artist(
    State(state): State<Arc<AppState>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = form_data(pairs);
    let name = form.get("name").unwrap_or_default().to_string();

    let draft = match ArtistDraft::from_form(&form) {
        Ok(draft) => draft,
        Err(errors) => {
            let page = views::artist_form(FormMode::Create, &form, &errors);
            return Ok(invalid(
                page,
                format!("Artist {name} could not be listed. Please fix the errors below."),
            ));
        }
    };

    artists::create(&state.db, draft).await.map_err(|e| {
        AppError::failed(
            e,
            format!("An error occurred. Artist {name} could not be listed."),
        )
    })?;
    Ok(listed(format!("Artist {name} was successfully listed!")))
}

/// GET /artists/{id}/edit
pub async fn edit_artist_form(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Page, AppError> {
    let id = parse_id(&id)?;
    let artist = artists::get(&state.db, id).await?;
    Ok(views::artist_form(
        FormMode::Edit {
            id,
            name: &artist.name,
        },
        &FormData::from(&artist),
        &ValidationError::new(),
    ))
}

/// POST /artists/{id}/edit
pub async fn edit_artist(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let id = parse_id(&id)?;
    let form = form_data(pairs);

    let changes = match ArtistChanges::from_form(&form) {
        Ok(changes) => changes,
        Err(errors) => {
            let artist = artists::get(&state.db, id).await?;
            let values = FormData::from(&artist).overlaid(&form);
            let page = views::artist_form(
                FormMode::Edit {
                    id,
                    name: &artist.name,
                },
                &values,
                &errors,
            );
            return Ok(invalid(
                page,
                format!("Artist {} could not be updated.", artist.name),
            ));
        }
    };

    artists::update(&state.db, id, changes).await.map_err(|e| {
        AppError::failed(e, "An error occurred. The artist could not be updated.")
    })?;
    Ok(Redirect::to(&format!("/artists/{id}")).into_response())
}
