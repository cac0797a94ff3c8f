use std::collections::HashMap;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use serde_json::{json, Value};
use tower::ServiceExt;

use appointment_cell::router::appointment_routes;
use consultation_cell::services::triage::TriageScorer;
use shared_utils::test_utils::{MockAnswers, TestConfig, TestDoctor};

fn consultation_json(answers: Value) -> Value {
    let raw: HashMap<String, String> = serde_json::from_value(answers).unwrap();
    let scorer = TriageScorer::new();
    let result = scorer.score(&scorer.parse_answers(raw)).unwrap();
    serde_json::to_value(result).unwrap()
}

async fn post_prepare(payload: Value) -> (StatusCode, Value) {
    let app = appointment_routes(TestConfig::default().to_arc());
    let request = Request::builder()
        .method("POST")
        .uri("/prepare")
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_prepare_booking_route() {
    let (status, body) = post_prepare(json!({
        "doctor": TestDoctor::default().to_json(),
        "selection": { "day_index": 0, "time": "03:00 PM" },
        "consultation": consultation_json(MockAnswers::all_high()),
        "now": "2026-10-18T14:10:00"
    }))
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["doc_id"], "doc1");
    assert_eq!(body["slot_date"], "18_10_2026");
    assert_eq!(body["slot_time"], "03:00 PM");
    assert_eq!(body["pre_consultation"]["severity"], "serious");
    assert_eq!(body["pre_consultation"]["score"], 12);
}

#[tokio::test]
async fn test_prepare_booking_without_consultation() {
    let (status, body) = post_prepare(json!({
        "doctor": TestDoctor::default().to_json(),
        "selection": { "day_index": 0, "time": "03:00 PM" },
        "now": "2026-10-18T14:10:00"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Please complete the pre-consultation assessment first");
}

#[tokio::test]
async fn test_prepare_booking_for_booked_slot_conflicts() {
    let (status, _) = post_prepare(json!({
        "doctor": TestDoctor::default().with_booking("18_10_2026", "03:00 PM").to_json(),
        "selection": { "day_index": 0, "time": "03:00 PM" },
        "consultation": consultation_json(MockAnswers::all_low()),
        "now": "2026-10-18T14:10:00"
    }))
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_prepare_booking_rejects_rescored_mismatch() {
    let mut consultation = consultation_json(MockAnswers::all_low());
    consultation["score"] = json!(12);
    consultation["severity"] = json!("serious");

    let (status, body) = post_prepare(json!({
        "doctor": TestDoctor::default().to_json(),
        "selection": { "day_index": 1, "time": "10:00 AM" },
        "consultation": consultation,
        "now": "2026-10-18T14:10:00"
    }))
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("does not match its answers"));
}
