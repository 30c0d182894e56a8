use axum::{
    http::{StatusCode, Uri},
    response::Html,
};

use crate::templates::not_found_page;

pub async fn not_found_handler(uri: Uri) -> (StatusCode, Html<String>) {
    (
        StatusCode::NOT_FOUND,
        Html(not_found_page(uri.path()).into_string()),
    )
}
