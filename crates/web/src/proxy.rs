use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use hyper::header::{CONNECTION, HOST, TRANSFER_ENCODING};
use log::{debug, error};

use crate::AppState;

const MAX_PROXY_BODY: usize = 10 * 1024 * 1024;

/// Forwards `/api/*` to the crime API origin, keeping method, path, query,
/// headers and body. The `Host` header is rewritten to the upstream origin.
pub async fn proxy_handler(State(state): State<Arc<AppState>>, request: Request) -> Response {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());
    let url = format!("{}{}", state.api_url, path_and_query);

    let (parts, body) = request.into_parts();
    let body = match to_bytes(body, MAX_PROXY_BODY).await {
        Ok(body) => body,
        Err(e) => {
            error!("error reading proxied request body: {}", e);
            return (StatusCode::BAD_REQUEST, format!("Invalid request body: {}", e))
                .into_response();
        }
    };

    let mut headers = parts.headers;
    headers.remove(HOST);

    debug!("proxying {} {}", parts.method, url);
    let upstream = match state
        .http
        .request(parts.method, &url)
        .headers(headers)
        .body(body)
        .send()
        .await
    {
        Ok(upstream) => upstream,
        Err(e) => {
            error!("error proxying to {}: {}", url, e);
            return (
                StatusCode::BAD_GATEWAY,
                format!("Failed to reach crime API: {}", e),
            )
                .into_response();
        }
    };

    let status = upstream.status();
    let mut upstream_headers = upstream.headers().clone();
    upstream_headers.remove(TRANSFER_ENCODING);
    upstream_headers.remove(CONNECTION);

    let mut response = Body::from_stream(upstream.bytes_stream()).into_response();
    *response.status_mut() = status;
    *response.headers_mut() = upstream_headers;
    response
}
