use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::Request,
    Router,
};
use crime_web::{
    app, ApiError, AppState, CrimeApi, CrimeDumpResponse, PingResponse, RadiusQuery,
};
use hyper::{header, Method, StatusCode};
use mockall::mock;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower::ServiceExt;

mock! {
    pub CrimeApi {}

    #[async_trait]
    impl CrimeApi for CrimeApi {
        async fn ping(&self) -> Result<Option<PingResponse>, ApiError>;
        async fn crimes_in_radius(&self, query: &RadiusQuery) -> Result<serde_json::Value, ApiError>;
        async fn crime_details(&self, limit: u32) -> Result<CrimeDumpResponse, ApiError>;
    }
}

pub struct TestApp {
    pub app: Router,
}

pub async fn spawn_app(crime_api: Arc<dyn CrimeApi>) -> TestApp {
    spawn_app_with_backend(crime_api, "http://127.0.0.1:9").await
}

/// App whose `/api` proxy points at `api_url`
pub async fn spawn_app_with_backend(crime_api: Arc<dyn CrimeApi>, api_url: &str) -> TestApp {
    let app_state = AppState {
        static_dir: String::from("./static"),
        api_url: api_url.to_string(),
        details_limit: 1000,
        http: reqwest::Client::new(),
        crime_api,
    };

    TestApp {
        app: app(app_state),
    }
}

/// Serves `router` on an ephemeral port, returns its origin
pub async fn spawn_backend(router: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind backend listener");
    let addr = listener.local_addr().expect("Failed to read backend address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("backend failed");
    });
    format!("http://{}", addr)
}

pub async fn get_html(app: &Router, uri: &str) -> (StatusCode, String) {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(header::ACCEPT, "text/html")
        .body(Body::empty())
        .unwrap();

    let response = app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(body.to_vec()).unwrap())
}
