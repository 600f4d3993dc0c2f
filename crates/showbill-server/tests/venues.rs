mod common;

use axum::http::StatusCode;
use common::*;
use showbill_db::store::venues;

#[tokio::test]
async fn test_home_page() {
    let (app, _) = test_app().await;
    let res = get(&app, "/").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(r#"data-template="pages/home.html""#));
}

#[tokio::test]
async fn test_create_venue_flashes_and_stores_fields() {
    let (app, state) = test_app().await;

    let form = get(&app, "/venues/create").await;
    assert_eq!(form.status, StatusCode::OK);
    assert!(form.body.contains(r#"data-template="forms/new_venue.html""#));

    let res = post_form(&app, "/venues/create", HOP).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(r#"data-template="pages/home.html""#));
    assert!(res.body.contains("Venue The Musical Hop was successfully listed!"));

    let stored = venues::get(&state.db, 1).await.unwrap();
    assert_eq!(stored.name, "The Musical Hop");
    assert_eq!(stored.address, "1015 Folsom Street");
    assert_eq!(stored.phone, "123-123-1234");
    assert_eq!(stored.image_link.as_deref(), Some("https://images.example.com/hop.jpg"));
    assert_eq!(
        stored.facebook_link.as_deref(),
        Some("https://www.facebook.com/TheMusicalHop")
    );
}

#[tokio::test]
async fn test_create_venue_validation_rerenders_form() {
    let (app, state) = test_app().await;
    let res = post_form(
        &app,
        "/venues/create",
        &[("name", "Half a Venue"), ("city", "Oakland")],
    )
    .await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(res.body.contains(r#"data-template="forms/new_venue.html""#));
    assert!(res.body.contains("State is required"));
    assert!(res.body.contains("Phone is required"));
    assert!(res.body.contains(r#"value="Half a Venue""#));
    assert!(res.body.contains("flash-error"));
    assert!(venues::list(&state.db).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_venue_detail_and_not_found() {
    let (app, _) = test_app().await;
    post_form(&app, "/venues/create", HOP).await;

    let res = get(&app, "/venues/1").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(r#"data-template="pages/show_venue.html""#));
    assert!(res.body.contains("The Musical Hop"));
    assert!(res.body.contains("0 Upcoming Shows"));

    let missing = get(&app, "/venues/99").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert!(missing.body.contains(r#"data-template="errors/404.html""#));

    let bogus = get(&app, "/venues/not-a-number").await;
    assert_eq!(bogus.status, StatusCode::NOT_FOUND);

    let signed = get(&app, "/venues/+1").await;
    assert_eq!(signed.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_unknown_route_renders_404_page() {
    let (app, _) = test_app().await;
    let res = get(&app, "/nowhere/at/all").await;
    assert_eq!(res.status, StatusCode::NOT_FOUND);
    assert!(res.body.contains(r#"data-template="errors/404.html""#));
}

#[tokio::test]
async fn test_venues_grouped_by_area() {
    let (app, _) = test_app().await;
    post_form(&app, "/venues/create", HOP).await;
    post_form(&app, "/venues/create", DUELING_PIANOS).await;
    post_form(&app, "/venues/create", PARK_SQUARE).await;

    let res = get(&app, "/venues").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("<h2>New York, NY</h2>"));
    assert!(res.body.contains("<h2>San Francisco, CA</h2>"));
    assert!(res.body.contains("Park Square Live Music &amp; Coffee"));
}

#[tokio::test]
async fn test_search_venues() {
    let (app, _) = test_app().await;
    post_form(&app, "/venues/create", HOP).await;
    post_form(&app, "/venues/create", DUELING_PIANOS).await;
    post_form(&app, "/venues/create", PARK_SQUARE).await;

    let res = post_form(&app, "/venues/search", &[("search_term", "Hop")]).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains("Number of search results for \"Hop\": 1"));
    assert!(res.body.contains(r#"<a href="/venues/1">The Musical Hop</a>"#));

    let res = post_form(&app, "/venues/search", &[("search_term", "Music")]).await;
    assert!(res.body.contains("Number of search results for \"Music\": 2"));

    let res = post_form(&app, "/venues/search", &[("search_term", "")]).await;
    assert!(res.body.contains(": 3</h1>"));

    let res = post_form(&app, "/venues/search", &[]).await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(": 3</h1>"));
}

#[tokio::test]
async fn test_search_venues_with_accented_name() {
    let (app, _) = test_app().await;
    let elan: Vec<(&str, &str)> = HOP
        .iter()
        .map(|&(k, v)| if k == "name" { (k, "ÉLAN Club") } else { (k, v) })
        .collect();
    post_form(&app, "/venues/create", &elan).await;

    for term in ["ÉLAN", "élan"] {
        let res = post_form(&app, "/venues/search", &[("search_term", term)]).await;
        assert!(res.body.contains(&format!("Number of search results for \"{term}\": 1")));
        assert!(res.body.contains(r#"<a href="/venues/1">ÉLAN Club</a>"#));
    }
}

#[tokio::test]
async fn test_edit_form_prefilled_without_mutation() {
    let (app, state) = test_app().await;
    post_form(&app, "/venues/create", HOP).await;
    let before = venues::get(&state.db, 1).await.unwrap();

    let res = get(&app, "/venues/1/edit").await;
    assert_eq!(res.status, StatusCode::OK);
    assert!(res.body.contains(r#"data-template="forms/edit_venue.html""#));
    assert!(res.body.contains(r#"value="1015 Folsom Street""#));
    assert!(res.body.contains(r#"action="/venues/1/edit""#));

    assert_eq!(venues::get(&state.db, 1).await.unwrap(), before);
    assert_eq!(get(&app, "/venues/42/edit").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_edit_venue_redirects_and_applies_changes() {
    let (app, state) = test_app().await;
    post_form(&app, "/venues/create", HOP).await;

    let res = post_form(
        &app,
        "/venues/1/edit",
        &[("phone", "555-000-1111"), ("image_link", "")],
    )
    .await;
    assert_eq!(res.status, StatusCode::SEE_OTHER);
    assert_eq!(res.location.as_deref(), Some("/venues/1"));

    let stored = venues::get(&state.db, 1).await.unwrap();
    assert_eq!(stored.phone, "555-000-1111");
    assert_eq!(stored.image_link, None);
    assert_eq!(stored.name, "The Musical Hop");
    assert_eq!(stored.address, "1015 Folsom Street");
}

#[tokio::test]
async fn test_edit_venue_rejects_invalid_values() {
    let (app, state) = test_app().await;
    post_form(&app, "/venues/create", HOP).await;

    let res = post_form(&app, "/venues/1/edit", &[("name", ""), ("phone", "nope")]).await;
    assert_eq!(res.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(res.body.contains(r#"data-template="forms/edit_venue.html""#));
    assert!(res.body.contains("Name is required"));
    assert!(res.body.contains("Phone is not a valid phone number"));
    assert!(res.body.contains(r#"value="1015 Folsom Street""#));

    let stored = venues::get(&state.db, 1).await.unwrap();
    assert_eq!(stored.name, "The Musical Hop");
    assert_eq!(stored.phone, "123-123-1234");

    let missing = post_form(&app, "/venues/9/edit", &[("city", "Oakland")]).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_venue() {
    let (app, _) = test_app().await;
    post_form(&app, "/venues/create", HOP).await;

    let res = delete(&app, "/venues/1/delete").await;
    assert_eq!(res.status, StatusCode::OK);
    let json: serde_json::Value = serde_json::from_str(&res.body).unwrap();
    assert_eq!(json, serde_json::json!({ "success": true }));

    assert_eq!(get(&app, "/venues/1").await.status, StatusCode::NOT_FOUND);
    assert_eq!(delete(&app, "/venues/1/delete").await.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_security_headers() {
    let (app, _) = test_app().await;
    let response = tower::ServiceExt::oneshot(
        app,
        axum::http::Request::builder()
            .uri("/")
            .body(axum::body::Body::empty())
            .unwrap(),
    )
    .await
    .unwrap();
    assert_eq!(response.headers()["x-content-type-options"], "nosniff");
    assert_eq!(response.headers()["x-frame-options"], "DENY");
}
