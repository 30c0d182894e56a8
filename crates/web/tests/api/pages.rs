use crate::helpers::{get_html, spawn_app, MockCrimeApi};
use crime_web::{ApiError, CrimeDumpResponse, PingResponse};
use hyper::StatusCode;
use serde_json::json;
use std::sync::Arc;

fn radius_body() -> serde_json::Value {
    json!({
        "center": { "latitude": 47.2529, "longitude": -122.4443 },
        "radius_miles": 1.5,
        "crimes": [
            crime_with_distance("2025-1", "Robbery", "Hilltop", 0.9),
            crime_with_distance("2025-2", "Animal Cruelty", "Stadium District", 0.25),
            crime_with_distance("2025-3", "Fraud Offenses", "", 1.4)
        ],
        "count": 3,
        "year": ["2025"]
    })
}

fn crime_with_distance(case: &str, category: &str, neighborhood: &str, distance: f64) -> serde_json::Value {
    json!({
        "case": case,
        "crimeCategory": category,
        "neighborhood": neighborhood,
        "street": "S 11th St",
        "city": "Tacoma",
        "zip": "98405",
        "latitude": 47.2531,
        "longitude": -122.452,
        "date": "2025-01-14",
        "time": "22:15",
        "source": "tpd",
        "distance": distance
    })
}

fn position(html: &str, needle: &str) -> usize {
    html.find(needle)
        .unwrap_or_else(|| panic!("{} not found in page", needle))
}

#[tokio::test]
async fn home_page_renders_search_form() {
    let test_app = spawn_app(Arc::new(MockCrimeApi::new())).await;

    let (status, html) = get_html(&test_app.app, "/").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("action=\"/area\""));
    assert!(html.contains("name=\"lat\""));
    assert!(html.contains("name=\"year\""));
}

#[tokio::test]
async fn area_page_without_params_never_calls_backend() {
    let mut crime_api = MockCrimeApi::new();
    crime_api.expect_crimes_in_radius().times(0);
    let test_app = spawn_app(Arc::new(crime_api)).await;

    let (status, html) = get_html(&test_app.app, "/area?lat=47.25&lng=-122.44").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Enter a latitude, longitude and radius"));
}

#[tokio::test]
async fn area_page_renders_summary_and_table() {
    let mut crime_api = MockCrimeApi::new();
    crime_api
        .expect_crimes_in_radius()
        .withf(|q| q.lat == "47.2529" && q.lng == "-122.4443" && q.radius == "1.5" && q.year.is_none())
        .times(1)
        .returning(|_| Ok(radius_body()));
    let test_app = spawn_app(Arc::new(crime_api)).await;

    let (status, html) =
        get_html(&test_app.app, "/area?lat=47.2529&lng=-122.4443&radius=1.5").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("id=\"area-table\""));
    assert!(html.contains("Zip Code"));
    assert!(html.contains("0.90"));
    assert!(html.contains("47.253100"));
    // blank neighborhood renders as a placeholder
    assert!(html.contains("<span class=\"has-text-grey\">-</span>"));
    // backend order is kept when unsorted
    assert!(position(&html, "Robbery") < position(&html, "Animal Cruelty"));
}

#[tokio::test]
async fn area_table_fragment_sorts_by_distance() {
    let mut crime_api = MockCrimeApi::new();
    crime_api
        .expect_crimes_in_radius()
        .times(2)
        .returning(|_| Ok(radius_body()));
    let test_app = spawn_app(Arc::new(crime_api)).await;
    let search = "lat=47.2529&lng=-122.4443&radius=1.5";

    let (_, asc) = get_html(
        &test_app.app,
        &format!("/fragments/area-table?{}&sort=distance&dir=asc", search),
    )
    .await;
    assert!(!asc.contains("<html"));
    assert!(position(&asc, "Animal Cruelty") < position(&asc, "Robbery"));
    assert!(position(&asc, "Robbery") < position(&asc, "Fraud Offenses"));

    let (_, desc) = get_html(
        &test_app.app,
        &format!("/fragments/area-table?{}&sort=distance&dir=desc", search),
    )
    .await;
    assert!(position(&desc, "Fraud Offenses") < position(&desc, "Robbery"));
    assert!(position(&desc, "Robbery") < position(&desc, "Animal Cruelty"));
}

#[tokio::test]
async fn area_page_survives_backend_failure() {
    let mut crime_api = MockCrimeApi::new();
    crime_api.expect_crimes_in_radius().times(1).returning(|_| {
        Err(ApiError::Status {
            code: 500,
            reason: String::from("Internal Server Error"),
        })
    });
    let test_app = spawn_app(Arc::new(crime_api)).await;

    let (status, html) = get_html(&test_app.app, "/area?lat=1&lng=2&radius=3").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("No results."));
}

#[tokio::test]
async fn crimes_page_lists_dump_records() {
    let mut crime_api = MockCrimeApi::new();
    crime_api
        .expect_crime_details()
        .withf(|limit| *limit == 1000)
        .times(1)
        .returning(|_| {
            Ok(serde_json::from_value::<CrimeDumpResponse>(json!({
                "crimes": [{
                    "case": "2025-000777",
                    "crimeCategory": "Burglary/Breaking & Entering",
                    "neighborhood": "North End",
                    "street": "N 30th St",
                    "city": "Tacoma",
                    "zip": "98403",
                    "latitude": 47.27,
                    "longitude": -122.48,
                    "date": "2025-04-01",
                    "time": "03:30",
                    "source": "tpd"
                }]
            }))
            .unwrap())
        });
    let test_app = spawn_app(Arc::new(crime_api)).await;

    let (status, html) = get_html(&test_app.app, "/crimes").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("2025-000777"));
    assert!(html.contains("Burglary/Breaking &amp; Entering"));
    assert!(html.contains("id=\"crimes-table\""));
}

#[tokio::test]
async fn crimes_page_reports_load_failure() {
    let mut crime_api = MockCrimeApi::new();
    crime_api.expect_crime_details().times(1).returning(|_| {
        Err(ApiError::Status {
            code: 503,
            reason: String::from("Service Unavailable"),
        })
    });
    let test_app = spawn_app(Arc::new(crime_api)).await;

    let (status, html) = get_html(&test_app.app, "/crimes").await;

    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(html.contains("HTTP 503: Service Unavailable"));
}

#[tokio::test]
async fn about_page_starts_loading() {
    let mut crime_api = MockCrimeApi::new();
    crime_api.expect_ping().times(0);
    let test_app = spawn_app(Arc::new(crime_api)).await;

    let (status, html) = get_html(&test_app.app, "/about").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<h1 class=\"title\">About</h1>"));
    assert!(html.contains("Loading..."));
    assert!(html.contains("hx-get=\"/fragments/ping\""));
}

#[tokio::test]
async fn ping_fragment_shows_backend_reply() {
    let mut crime_api = MockCrimeApi::new();
    crime_api.expect_ping().times(1).returning(|| {
        Ok(Some(PingResponse {
            code: 200,
            message: String::from("public pong"),
        }))
    });
    let test_app = spawn_app(Arc::new(crime_api)).await;

    let (status, html) = get_html(&test_app.app, "/fragments/ping").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("Status Code: 200"));
    assert!(html.contains("Message: public pong"));
}

#[tokio::test]
async fn ping_fragment_shows_debug_info_on_failure() {
    let mut crime_api = MockCrimeApi::new();
    crime_api.expect_ping().times(1).returning(|| {
        Err(ApiError::Status {
            code: 404,
            reason: String::from("Not Found"),
        })
    });
    let test_app = spawn_app(Arc::new(crime_api)).await;

    let (_, html) = get_html(&test_app.app, "/fragments/ping").await;

    assert!(html.contains("Error loading ping: HTTP 404: Not Found"));
    assert!(html.contains("Debug Info"));
    assert!(html.contains("Current URL: /about"));
    assert!(html.contains("Attempted fetch: /api/ping"));
}

#[tokio::test]
async fn unknown_route_is_not_found() {
    let test_app = spawn_app(Arc::new(MockCrimeApi::new())).await;

    let (status, html) = get_html(&test_app.app, "/nowhere").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(html.contains("/nowhere"));
}

#[tokio::test]
async fn crimes_page_handles_empty_reply() {
    let mut crime_api = MockCrimeApi::new();
    crime_api.expect_crime_details().times(1).returning(|_| {
        Ok(serde_json::from_value::<CrimeDumpResponse>(json!({ "count": 0, "crimes": null })).unwrap())
    });
    let test_app = spawn_app(Arc::new(crime_api)).await;

    let (status, html) = get_html(&test_app.app, "/crimes").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("id=\"crimes-table\""));
    assert!(html.contains("No crimes found"));
}

#[tokio::test]
async fn area_page_handles_search_without_hits() {
    let mut crime_api = MockCrimeApi::new();
    crime_api.expect_crimes_in_radius().times(1).returning(|_| {
        Ok(json!({
            "center": { "latitude": 47.2529, "longitude": -122.4443 },
            "radius_miles": 0.01,
            "crimes": null,
            "count": 0,
            "year": ["2025"]
        }))
    });
    let test_app = spawn_app(Arc::new(crime_api)).await;

    let (status, html) =
        get_html(&test_app.app, "/area?lat=47.2529&lng=-122.4443&radius=0.01").await;

    assert_eq!(status, StatusCode::OK);
    assert!(html.contains("<p class=\"heading\">Crimes</p><p class=\"title is-5\">0</p>"));
    assert!(html.contains("No crimes found in this area"));
    assert!(!html.contains("Raw response"));
}
