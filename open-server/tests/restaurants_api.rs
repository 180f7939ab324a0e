//! HTTP API tests driven through `oneshot`, no socket involved

use axum::body::Body;
use http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use open_server::api::build_service;
use open_server::services::{RestaurantDirectory, parse_restaurants};
use open_server::{Config, ServerState};

// "Mon-Thu, Sun ..." puts Sun in front of the opening time, so that
// segment only covers Mon-Thu.
const FIXTURE: &str = r#"[
    {"Restaurant Name": "Sunday Roast", "Hours": "Sun 11 am-3 pm"},
    {"Restaurant Name": "Night Owl", "Hours": "Mon-Sun 6 pm-11:30 pm"},
    {"Restaurant Name": "Weekday Deli", "Hours": "Mon-Fri 7:30 am-2 pm"},
    {"Restaurant Name": "All Week Noodles",
     "Hours": "Mon-Thu, Sun 11 am-10 pm / Fri-Sat 11 am-11 pm"}
]"#;

fn state_from(raw: &str) -> ServerState {
    let restaurants = parse_restaurants(raw).unwrap();
    ServerState::new(
        Config::with_overrides("restaurants.json", 0),
        RestaurantDirectory::new(restaurants),
    )
}

async fn get(state: ServerState, uri: &str) -> (StatusCode, http::HeaderMap, Value) {
    let response = build_service(state)
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, headers, json)
}

/// `GET /restaurants/open?datetime=...` against the fixture
async fn open_at(datetime: &str) -> (StatusCode, Value) {
    let uri = format!("/restaurants/open?datetime={}", datetime);
    let (status, _, json) = get(state_from(FIXTURE), &uri).await;
    (status, json)
}

fn names(json: &Value) -> Vec<&str> {
    json["open_restaurants"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect()
}

#[tokio::test]
async fn test_open_on_sunday_noon() {
    let (status, json) = open_at("2025-03-23T12:00:00").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["datetime"], "2025-03-23T12:00:00");
    assert_eq!(names(&json), vec!["Sunday Roast"]);
}

#[tokio::test]
async fn test_open_boundaries_are_inclusive() {
    // Friday
    let (_, json) = open_at("2025-03-21T23:00:00").await;
    assert_eq!(names(&json), vec!["Night Owl", "All Week Noodles"]);

    let (_, json) = open_at("2025-03-21T07:30:00").await;
    assert_eq!(names(&json), vec!["Weekday Deli"]);

    // Seconds are ignored: 23:30:59 still counts as 23:30
    let (_, json) = open_at("2025-03-21T23:30:59").await;
    assert_eq!(names(&json), vec!["Night Owl"]);
}

#[tokio::test]
async fn test_open_nothing_open() {
    let (status, json) = open_at("2025-03-19T04:00:00").await;
    assert_eq!(status, StatusCode::OK);
    assert!(names(&json).is_empty());
}

#[tokio::test]
async fn test_open_missing_datetime() {
    let (status, _, json) = get(state_from(FIXTURE), "/restaurants/open").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 7);
    assert_eq!(json["message"], "datetime parameter is required");
}

#[tokio::test]
async fn test_open_invalid_datetime() {
    let (status, json) = open_at("tomorrow").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 6);
    assert_eq!(
        json["message"],
        "Invalid format, please use: YYYY-MM-DDTHH:MM:SS"
    );
    assert_eq!(json["details"]["datetime"], "tomorrow");
}

#[tokio::test]
async fn test_list_restaurants() {
    let (status, _, json) = get(state_from(FIXTURE), "/restaurants").await;
    assert_eq!(status, StatusCode::OK);
    let list = json.as_array().unwrap();
    assert_eq!(list.len(), 4);
    assert_eq!(list[0]["name"], "Sunday Roast");
    assert_eq!(list[0]["schedule"][0]["day"], "Sun");
    assert_eq!(list[0]["schedule"][0]["open"], "11:00");
    assert_eq!(list[0]["schedule"][0]["close"], "15:00");
}

#[tokio::test]
async fn test_get_by_name() {
    let (status, _, json) = get(state_from(FIXTURE), "/restaurants/Night%20Owl").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["hours"], "Mon-Sun 6 pm-11:30 pm");
    assert_eq!(json["schedule"].as_array().unwrap().len(), 7);

    let (status, _, json) = get(state_from(FIXTURE), "/restaurants/Nowhere").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], 2001);
}

#[tokio::test]
async fn test_schedule_preview() {
    let (status, _, json) = get(
        state_from(FIXTURE),
        "/restaurants/schedule?hours=Sat-Tues%2011%20am-2%20pm%20%2F%20Wed%20Thu-5%20pm",
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let entries = json["entries"].as_array().unwrap();
    let days: Vec<_> = entries.iter().map(|e| e["day"].as_str().unwrap()).collect();
    assert_eq!(days, vec!["Sat", "Sun", "Mon", "Tues"]);

    let segments = json["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["outcome"], "scheduled");
    assert_eq!(segments[1]["outcome"], "skipped");
    assert_eq!(segments[1]["reason"], "day_label_in_range");
}

#[tokio::test]
async fn test_schedule_preview_unknown_weekday() {
    let (status, _, json) = get(
        state_from(FIXTURE),
        "/restaurants/schedule?hours=Funday%209%20am-5%20pm",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], 1001);
    assert_eq!(json["details"]["token"], "Funday");
}

#[tokio::test]
async fn test_health() {
    let (status, _, json) = get(state_from(FIXTURE), "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "ok");
    assert_eq!(json["restaurants"], 4);
    // Noodles: Mon-Thu + Fri-Sat
    assert_eq!(json["schedule_entries"], 1 + 7 + 5 + 6);
}

#[tokio::test]
async fn test_request_id_generated() {
    for uri in ["/health", "/restaurants/open"] {
        let (_, headers, _) = get(state_from(FIXTURE), uri).await;
        let id = headers
            .get("x-request-id")
            .expect("x-request-id on response")
            .to_str()
            .unwrap();
        assert!(uuid::Uuid::parse_str(id).is_ok(), "{uri}: {id}");
    }
}

#[tokio::test]
async fn test_request_id_echoed() {
    let response = build_service(state_from(FIXTURE))
        .oneshot(
            Request::builder()
                .uri("/health")
                .header("x-request-id", "abc-123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.headers().get("x-request-id").unwrap(), "abc-123");
}

#[tokio::test]
async fn test_bundled_restaurants_file() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("../restaurants.json");
    let config = Config::with_overrides(path, 0);
    let state = ServerState::initialize(&config).await.unwrap();
    assert_eq!(state.directory.len(), 20);

    let (status, _, json) = get(state, "/restaurants/open?datetime=2025-03-23T12:00:00").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        names(&json),
        vec![
            "The Cowfish Sushi Burger Bar",
            "Morgan St Food Hall",
            "Beasley's Chicken + Honey",
            "Crawford and Son",
            "The Cheesecake Factory",
            "Glenwood Grill",
            "Neomonde",
            "Page Road Grill",
            "Mez Mexican",
            "Saltbox",
            "Sitti",
            "Dashi",
        ]
    );
}
