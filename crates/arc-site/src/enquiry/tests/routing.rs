use axum::http::{header, Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use super::common::*;
use crate::enquiry::router::enquiry_router;

fn json_request(uri: &str, body: serde_json::Value) -> Request<axum::body::Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(axum::body::Body::from(
            serde_json::to_vec(&body).expect("serialize"),
        ))
        .expect("request builds")
}

#[tokio::test]
async fn valid_enquiry_is_accepted_and_relayed() {
    let (state, transport) = recording_state();

    let response = enquiry_router(state)
        .oneshot(json_request(
            "/api/v1/enquiries",
            json!({
                "name": "Jane Doe",
                "email": "jane@x.com",
                "phone": "+1 234 567 8900",
                "message": "Interested"
            }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::ACCEPTED);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "success");
    assert_eq!(payload["close_after_ms"], 2000);
    assert_eq!(transport.sent(), vec![jane()]);
}

#[tokio::test]
async fn invalid_enquiry_reports_field_errors() {
    let (state, transport) = recording_state();

    let response = enquiry_router(state)
        .oneshot(json_request(
            "/api/v1/enquiries?variant=page",
            json!({ "fullName": "A", "email": "bad", "phone": "123" }),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "invalid");
    assert_eq!(payload["errors"]["email"], "Please enter a valid email address");
    assert_eq!(payload["errors"]["subject"], "Please select a subject");
    assert!(payload["errors"].get("name").is_none());
    assert!(transport.sent().is_empty());
}

#[tokio::test]
async fn relay_failure_maps_to_bad_gateway() {
    let (state, transport) = failing_state();

    let response = enquiry_router(state)
        .oneshot(json_request(
            "/api/v1/enquiries",
            serde_json::to_value(jane()).expect("serialize"),
        ))
        .await
        .expect("route executes");

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let payload = read_json_body(response).await;
    assert_eq!(payload["status"], "error");
    assert_eq!(
        payload["message"],
        "Unable to submit form. Please try again or contact us directly at sales@arc.example"
    );
    assert_eq!(transport.attempts(), 1);
}
