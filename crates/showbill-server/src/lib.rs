//! HTTP front end for the showbill directory.

use axum::{
    http::{header, HeaderValue},
    routing::{delete, get, post},
    Router,
};
use showbill_db::AppState;
use std::sync::Arc;
use tower_http::{set_header::SetResponseHeaderLayer, trace::TraceLayer};

pub mod config;
pub mod error;
mod handlers;
pub mod views;

/// Builds the application router over shared state.
pub fn build_router(state: Arc<AppState>) -> Router {
    let venues = Router::new()
        .route("/venues", get(handlers::venues::list_venues))
        .route("/venues/search", post(handlers::venues::search_venues))
        .route(
            "/venues/create",
            get(handlers::venues::create_venue_form).post(handlers::venues::create_venue),
        )
        .route("/venues/{id}", get(handlers::venues::show_venue))
        .route(
            "/venues/{id}/edit",
            get(handlers::venues::edit_venue_form).post(handlers::venues::edit_venue),
        )
        .route("/venues/{id}/delete", delete(handlers::venues::delete_venue));

    let artists = Router::new()
        .route("/artists", get(handlers::artists::list_artists))
        .route("/artists/search", post(handlers::artists::search_artists))
        .route(
            "/artists/create",
            get(handlers::artists::create_artist_form).post(handlers::artists::create_artist),
        )
        .route("/artists/{id}", get(handlers::artists::show_artist))
        .route(
            "/artists/{id}/edit",
            get(handlers::artists::edit_artist_form).post(handlers::artists::edit_artist),
        );

    let shows = Router::new()
        .route("/shows", get(handlers::shows::list_shows))
        .route(
            "/shows/create",
            get(handlers::shows::create_show_form).post(handlers::shows::create_show),
        );

    Router::new()
        .route("/", get(handlers::index))
        .merge(venues)
        .merge(artists)
        .merge(shows)
        .fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::REFERRER_POLICY,
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .with_state(state)
}
