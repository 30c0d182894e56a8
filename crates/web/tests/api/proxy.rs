use crate::helpers::{spawn_app_with_backend, spawn_backend, MockCrimeApi};
use axum::{
    body::{to_bytes, Body},
    extract::OriginalUri,
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use hyper::Method;
use std::sync::Arc;
use tower::ServiceExt;

fn upstream() -> Router {
    Router::new()
        .route(
            "/api/public/crimes/radius",
            get(|OriginalUri(uri): OriginalUri| async move { uri.to_string() }),
        )
        .route(
            "/api/echo",
            post(|body: String| async move { (StatusCode::CREATED, body) }),
        )
        .route(
            "/api/missing",
            get(|| async { (StatusCode::NOT_FOUND, "no such thing") }),
        )
}

async fn send(app: &Router, method: Method, uri: &str, body: Body) -> (StatusCode, String) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .body(body)
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

#[tokio::test]
async fn proxy_keeps_path_and_query() {
    let origin = spawn_backend(upstream()).await;
    let test_app = spawn_app_with_backend(Arc::new(MockCrimeApi::new()), &origin).await;

    let (status, body) = send(
        &test_app.app,
        Method::GET,
        "/api/public/crimes/radius?lat=47.25&lng=-122.44&radius=1",
        Body::empty(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "/api/public/crimes/radius?lat=47.25&lng=-122.44&radius=1");
}

#[tokio::test]
async fn proxy_forwards_method_and_body() {
    let origin = spawn_backend(upstream()).await;
    let test_app = spawn_app_with_backend(Arc::new(MockCrimeApi::new()), &origin).await;

    let (status, body) = send(&test_app.app, Method::POST, "/api/echo", Body::from("hello")).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, "hello");
}

#[tokio::test]
async fn proxy_passes_upstream_errors_through() {
    let origin = spawn_backend(upstream()).await;
    let test_app = spawn_app_with_backend(Arc::new(MockCrimeApi::new()), &origin).await;

    let (status, body) = send(&test_app.app, Method::GET, "/api/missing", Body::empty()).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, "no such thing");
}

#[tokio::test]
async fn unreachable_backend_is_bad_gateway() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let origin = format!("http://{}", listener.local_addr().unwrap());
    drop(listener);
    let test_app = spawn_app_with_backend(Arc::new(MockCrimeApi::new()), &origin).await;

    let (status, body) = send(&test_app.app, Method::GET, "/api/ping", Body::empty()).await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body.starts_with("Failed to reach crime API"));
}

#[tokio::test]
async fn cross_origin_writes_pass_preflight() {
    let test_app = spawn_app_with_backend(Arc::new(MockCrimeApi::new()), "http://127.0.0.1:1").await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/public/crimes")
        .header("origin", "http://localhost:3000")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();

    let response = test_app
        .app
        .clone()
        .oneshot(request)
        .await
        .expect("Failed to execute request.");

    assert!(response.status().is_success());
    let allowed = response
        .headers()
        .get("access-control-allow-methods")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    assert!(allowed.contains("POST"));
    assert!(allowed.contains("DELETE"));
}
