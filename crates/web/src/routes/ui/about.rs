use std::sync::Arc;

use axum::{
    extract::State,
    http::{header::REFERER, HeaderMap},
    response::Html,
};

use crate::{
    loaders::load_ping,
    templates::{about_page, ping_status},
    AppState,
};

/// Handler for the about page (GET /about)
pub async fn about_handler() -> Html<String> {
    Html(about_page().into_string())
}

/// Handler for the ping status fragment (GET /fragments/ping)
pub async fn ping_fragment_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Html<String> {
    // htmx sends the browser's location with every request it makes
    let current_url = headers
        .get("hx-current-url")
        .or_else(|| headers.get(REFERER))
        .and_then(|v| v.to_str().ok())
        .unwrap_or("/about");

    let ping = load_ping(state.crime_api.as_ref(), current_url).await;
    Html(ping_status(&ping).into_string())
}
