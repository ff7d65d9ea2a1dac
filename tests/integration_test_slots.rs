mod common;

use axum::http::StatusCode;
use common::{amenity, at, parse_body, TestApp};
use serde_json::Value;

fn available_times(body: &Value) -> Vec<String> {
    body["slots"].as_array().unwrap()
        .iter()
        .filter(|s| s["available"].as_bool().unwrap())
        .map(|s| s["time"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_today_slots_skip_past_and_grace_period() {
    let app = TestApp::new(at("2025-10-02T10:00"));
    app.backend.add_amenity(amenity(1, 4, Some("8:00"), Some("22:00"), None));

    let res = app.get("/api/v1/amenities/1/start-slots?date=2025-10-02").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["date"], "2025-10-02");
    assert_eq!(body["openTime"], "8:00");
    assert_eq!(body["slots"].as_array().unwrap().len(), 35);

    let open = available_times(&body);
    assert_eq!(open.first().map(String::as_str), Some("10:30"));
    assert_eq!(open.last().map(String::as_str), Some("22:00"));
    assert!(!open.iter().any(|t| t.as_str() <= "10:05"));

    let ten = body["slots"].as_array().unwrap().iter().find(|s| s["time"] == "10:00").unwrap();
    assert_eq!(ten["withinOperatingHours"], true);
    assert_eq!(ten["available"], false);
}

#[tokio::test]
async fn test_slots_default_to_today() {
    let app = TestApp::new(at("2025-10-02T23:50"));
    app.backend.add_amenity(amenity(1, 4, Some("0:00"), Some("24:00"), None));

    let body = parse_body(app.get("/api/v1/amenities/1/start-slots").await).await;
    assert_eq!(body["date"], "2025-10-02");
    assert!(available_times(&body).is_empty());
}

#[tokio::test]
async fn test_future_date_ignores_clock() {
    let app = TestApp::new(at("2025-10-02T23:50"));
    app.backend.add_amenity(amenity(1, 4, None, None, None));

    let body = parse_body(app.get("/api/v1/amenities/1/start-slots?date=2025-10-03").await).await;
    let open = available_times(&body);
    assert_eq!(open.first().map(String::as_str), Some("06:00"));
    assert_eq!(open.last().map(String::as_str), Some("22:30"));
    assert!(body["openTime"].is_null());
}

#[tokio::test]
async fn test_malformed_hours_make_nothing_available() {
    let app = TestApp::new(at("2025-10-02T08:00"));
    app.backend.add_amenity(amenity(1, 4, Some("8h"), Some("22:00"), None));

    let res = app.get("/api/v1/amenities/1/start-slots?date=2025-10-03").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert!(available_times(&body).is_empty());
}

#[tokio::test]
async fn test_end_options_past_close_time() {
    let app = TestApp::new(at("2025-10-02T08:00"));
    app.backend.add_amenity(amenity(1, 4, Some("8:00"), Some("22:00"), Some(120)));

    let res = app.get("/api/v1/amenities/1/end-options?start=20:30").await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["start"], "20:30");
    assert_eq!(body["maxDuration"], 120);
    let options: Vec<(String, u64, String)> = body["options"].as_array().unwrap().iter().map(|o| (
        o["time"].as_str().unwrap().to_string(),
        o["duration"].as_u64().unwrap(),
        o["label"].as_str().unwrap().to_string(),
    )).collect();
    assert_eq!(options, vec![
        ("21:00".to_string(), 30, "30m".to_string()),
        ("21:30".to_string(), 60, "1h".to_string()),
        ("22:00".to_string(), 90, "1h 30m".to_string()),
        ("22:30".to_string(), 120, "2h".to_string()),
    ]);
}

#[tokio::test]
async fn test_end_options_use_configured_default_duration() {
    let app = TestApp::new(at("2025-10-02T08:00"));
    app.backend.add_amenity(amenity(1, 4, None, None, None));

    let body = parse_body(app.get("/api/v1/amenities/1/end-options?start=9:00").await).await;
    assert_eq!(body["start"], "09:00");
    assert_eq!(body["maxDuration"], 120);
    let last = body["options"].as_array().unwrap().last().unwrap().clone();
    assert_eq!(last["time"], "11:00");
}

#[tokio::test]
async fn test_end_options_reject_bad_start() {
    let app = TestApp::new(at("2025-10-02T08:00"));
    app.backend.add_amenity(amenity(1, 4, None, None, None));

    let res = app.get("/api/v1/amenities/1/end-options?start=nine").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(app.backend.seen_tokens.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_slot_endpoints_reject_path_like_ids() {
    let app = TestApp::new(at("2025-10-02T08:00"));
    app.backend.add_amenity(amenity(1, 4, None, None, None));

    let res = app.get("/api/v1/amenities/..%2F1/start-slots").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let res = app.get("/api/v1/amenities/..%2F1/end-options?start=9:00").await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert!(app.backend.seen_tokens.lock().unwrap().is_empty());
}
