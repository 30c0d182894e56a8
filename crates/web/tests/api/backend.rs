use crate::helpers::spawn_backend;
use axum::{
    extract::RawQuery,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use crime_web::{ApiError, CrimeApi, HttpCrimeApi, RadiusQuery};
use serde_json::json;

/// Backend that echoes the raw query string of every radius request
fn echo_backend() -> Router {
    Router::new()
        .route(
            "/api/public/crimes/radius",
            get(|RawQuery(query): RawQuery| async move { Json(json!({ "query": query })) }),
        )
        .route(
            "/api/public/crimes/details",
            get(|RawQuery(query): RawQuery| async move {
                Json(json!({ "crimes": [], "count": 0, "query": query }))
            }),
        )
        .route(
            "/api/ping",
            get(|| async { Json(json!({ "code": 200, "message": "public pong" })) }),
        )
}

#[tokio::test]
async fn radius_search_forwards_params_verbatim() {
    let origin = spawn_backend(echo_backend()).await;
    let api = HttpCrimeApi::new(reqwest::Client::new(), &format!("{}/", origin));

    let body = api
        .crimes_in_radius(&RadiusQuery {
            lat: String::from("47.2529"),
            lng: String::from("-122.4443"),
            radius: String::from("1.50"),
            year: Some(String::from("2025")),
        })
        .await
        .unwrap();

    assert_eq!(
        body,
        json!({ "query": "lat=47.2529&lng=-122.4443&radius=1.50&year=2025" })
    );
}

#[tokio::test]
async fn radius_search_omits_missing_year() {
    let origin = spawn_backend(echo_backend()).await;
    let api = HttpCrimeApi::new(reqwest::Client::new(), &origin);

    let body = api
        .crimes_in_radius(&RadiusQuery {
            lat: String::from("1"),
            lng: String::from("2"),
            radius: String::from("3"),
            year: None,
        })
        .await
        .unwrap();

    assert_eq!(body, json!({ "query": "lat=1&lng=2&radius=3" }));
}

#[tokio::test]
async fn details_request_carries_limit() {
    let origin = spawn_backend(echo_backend()).await;
    let api = HttpCrimeApi::new(reqwest::Client::new(), &origin);

    let response = api.crime_details(1000).await.unwrap();

    assert!(response.crimes.is_empty());
    assert_eq!(response.count, Some(0));
}

#[tokio::test]
async fn details_accept_null_crimes() {
    let backend = Router::new().route(
        "/api/public/crimes/details",
        get(|| async { Json(json!({ "count": 0, "crimes": null })) }),
    );
    let origin = spawn_backend(backend).await;
    let api = HttpCrimeApi::new(reqwest::Client::new(), &origin);

    let response = api.crime_details(1000).await.unwrap();

    assert!(response.crimes.is_empty());
}

#[tokio::test]
async fn ping_decodes_reply() {
    let origin = spawn_backend(echo_backend()).await;
    let api = HttpCrimeApi::new(reqwest::Client::new(), &origin);

    let ping = api.ping().await.unwrap().unwrap();

    assert_eq!(ping.code, 200);
    assert_eq!(ping.message, "public pong");
}

#[tokio::test]
async fn non_success_status_becomes_status_error() {
    let backend = Router::new().route(
        "/api/ping",
        get(|| async { (StatusCode::SERVICE_UNAVAILABLE, "down") }),
    );
    let origin = spawn_backend(backend).await;
    let api = HttpCrimeApi::new(reqwest::Client::new(), &origin);

    let err = api.ping().await.unwrap_err();

    assert!(matches!(err, ApiError::Status { code: 503, .. }));
    assert_eq!(err.to_string(), "HTTP 503: Service Unavailable");
}

#[tokio::test]
async fn malformed_json_becomes_decode_error() {
    let backend = Router::new().route(
        "/api/public/crimes/details",
        get(|| async { "not json" }),
    );
    let origin = spawn_backend(backend).await;
    let api = HttpCrimeApi::new(reqwest::Client::new(), &origin);

    let err = api.crime_details(10).await.unwrap_err();

    assert!(matches!(err, ApiError::Decode(_)));
}
