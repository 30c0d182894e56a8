use crate::{
    about_handler, api::HttpCrimeApi, area_handler, area_table_handler, crimes_handler,
    crimes_table_handler, home_handler, not_found_handler, ping_fragment_handler,
    proxy::proxy_handler, CrimeApi,
};
use anyhow::anyhow;
use axum::{
    body::Body,
    extract::Request,
    middleware::{self, Next},
    response::IntoResponse,
    routing::{any, get},
    Router,
};
use hyper::{
    header::{ACCEPT, CONTENT_TYPE},
    Method,
};
use log::info;
use std::sync::Arc;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

#[derive(Clone)]
pub struct AppState {
    pub static_dir: String,
    pub api_url: String,
    pub details_limit: u32,
    /// Shared connection pool, used by the API client and the `/api` proxy
    pub http: reqwest::Client,
    pub crime_api: Arc<dyn CrimeApi>,
}

pub fn build_app_state(
    api_url: String,
    static_dir: String,
    details_limit: u32,
) -> Result<AppState, anyhow::Error> {
    let api_url = api_url.trim_end_matches('/').to_string();
    let http = reqwest::Client::builder()
        .user_agent(concat!("crime-web/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| anyhow!("error building http client: {}", e))?;
    let crime_api = Arc::new(HttpCrimeApi::new(http.clone(), &api_url));

    Ok(AppState {
        static_dir,
        api_url,
        details_limit,
        http,
        crime_api,
    })
}

pub fn app(app_state: AppState) -> Router {
    let serve_static = ServeDir::new(&app_state.static_dir);
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([ACCEPT, CONTENT_TYPE])
        .allow_origin(Any);

    Router::new()
        // UI routes
        .route("/", get(home_handler))
        .route("/area", get(area_handler))
        .route("/crimes", get(crimes_handler))
        .route("/about", get(about_handler))
        // HTMX fragment routes
        .route("/fragments/area-table", get(area_table_handler))
        .route("/fragments/crimes-table", get(crimes_table_handler))
        .route("/fragments/ping", get(ping_fragment_handler))
        // Crime API pass-through
        .route("/api/{*path}", any(proxy_handler))
        .fallback(not_found_handler)
        .with_state(Arc::new(app_state))
        .layer(middleware::from_fn(log_request))
        .nest_service("/static", serve_static)
        .layer(cors)
}

async fn log_request(request: Request<Body>, next: Next) -> impl IntoResponse {
    let now = time::OffsetDateTime::now_utc();
    let path = request
        .uri()
        .path_and_query()
        .map(|p| p.as_str())
        .unwrap_or_default();
    info!(target: "http_request","new request, {} {}", request.method().as_str(), path);

    let response = next.run(request).await;
    let response_time = time::OffsetDateTime::now_utc() - now;
    info!(target: "http_response", "response, code: {}, time: {}", response.status().as_str(), response_time);

    response
}
