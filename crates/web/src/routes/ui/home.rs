use axum::response::Html;

use crate::templates::home_page;

/// Handler for the home page (GET /)
pub async fn home_handler() -> Html<String> {
    Html(home_page().into_string())
}
