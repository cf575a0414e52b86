use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value, json};

use crate::test_utils::{TestContext, appointment_body};

#[tokio::test]
async fn test_create_appointment_success() {
    let ctx = TestContext::new();
    let body = appointment_body("2025-01-01T14:00:00Z", 60, "America/New_York");

    let response = ctx.server.post("/appointments").json(&body).await;

    response.assert_status(StatusCode::CREATED);
    let created: Value = response.json();
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(created["appointmentDateTime"], json!("2025-01-01T14:00:00+00:00"));
    assert_eq!(created["timeZone"], json!("America/New_York"));
    assert_eq!(created["appointmentDuration"], json!(60));
    assert_eq!(created["customer"], body["customer"]);
    assert_eq!(created["location"], body["location"]);
    assert_eq!(created["vehicle"], body["vehicle"]);
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn test_create_appointment_keeps_start_offset() {
    let ctx = TestContext::new();
    let body = appointment_body("2025-01-01T10:00:00-05:00", 30, "America/New_York");

    let created: Value = ctx.server.post("/appointments").json(&body).await.json();

    assert_eq!(created["appointmentDateTime"], json!("2025-01-01T10:00:00-05:00"));
}

#[tokio::test]
async fn test_list_appointments_in_booking_order() {
    let ctx = TestContext::new();

    let empty: Vec<Value> = ctx.server.get("/appointments").await.json();
    assert!(empty.is_empty());

    let mut ids = Vec::new();
    for start in ["2025-01-01T16:00:00Z", "2025-01-01T14:00:00Z"] {
        let created: Value = ctx
            .server
            .post("/appointments")
            .json(&appointment_body(start, 30, "America/New_York"))
            .await
            .json();
        ids.push(created["id"].clone());
    }

    let response = ctx.server.get("/appointments").await;
    response.assert_status(StatusCode::OK);
    let listed: Vec<Value> = response.json();
    assert_eq!(listed.iter().map(|a| a["id"].clone()).collect::<Vec<_>>(), ids);

    let again: Vec<Value> = ctx.server.get("/appointments").await.json();
    assert_eq!(again, listed);
}

#[tokio::test]
async fn test_overlapping_appointment_is_a_conflict() {
    let ctx = TestContext::new();
    ctx.server
        .post("/appointments")
        .json(&appointment_body("2025-01-01T15:00:00Z", 30, "America/New_York"))
        .await
        .assert_status(StatusCode::CREATED);

    let response = ctx
        .server
        .post("/appointments")
        .json(&appointment_body("2025-01-01T15:00:00Z", 15, "America/New_York"))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    let error: Value = response.json();
    assert_eq!(
        error["error"],
        json!("Appointment conflicts with an existing appointment")
    );
    assert_eq!(ctx.store.len(), 1);
}

#[tokio::test]
async fn test_back_to_back_appointments_are_accepted() {
    let ctx = TestContext::new();

    for start in ["2025-01-01T15:00:00Z", "2025-01-01T15:30:00Z"] {
        ctx.server
            .post("/appointments")
            .json(&appointment_body(start, 30, "America/New_York"))
            .await
            .assert_status(StatusCode::CREATED);
    }

    assert_eq!(ctx.store.len(), 2);
}

#[rstest]
#[case("2025-01-01T13:00:00Z", "America/New_York")]
#[case("2025-01-01T14:00:00Z", "America/Chicago")]
#[case("2025-01-01T15:00:00Z", "America/Denver")]
#[case("2025-01-01T16:00:00Z", "America/Los_Angeles")]
#[tokio::test]
async fn test_outside_business_hours_is_unprocessable(#[case] start: &str, #[case] zone: &str) {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/appointments")
        .json(&appointment_body(start, 60, zone))
        .await;

    response.assert_status(StatusCode::UNPROCESSABLE_ENTITY);
    let error: Value = response.json();
    assert_eq!(error["error"], json!("Appointment is outside of business hours"));
    assert!(ctx.store.is_empty());
}

#[tokio::test]
async fn test_invalid_fields_are_reported_with_paths() {
    let ctx = TestContext::new();
    let mut body = appointment_body("2025-01-01T14:00:00Z", 30, "America/New_York");
    body["customer"]["email"] = json!("not-an-email");
    body["location"]["state"] = json!("New York");
    body["appointmentDuration"] = json!(0);

    let response = ctx.server.post("/appointments").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(
        error["details"],
        json!([
            { "field": "appointmentDuration", "message": "Duration must be greater than 0" },
            { "field": "customer.email", "message": "Valid email is required" },
            { "field": "location.state", "message": "State should be the two letter abbreviation" }
        ])
    );
    assert!(ctx.store.is_empty());
}

#[tokio::test]
async fn test_unknown_time_zone_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/appointments")
        .json(&appointment_body("2025-01-01T14:00:00Z", 30, "Mars/Olympus_Mons"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["details"][0]["field"], json!("timeZone"));
}

#[tokio::test]
async fn test_unparseable_date_time_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx
        .server
        .post("/appointments")
        .json(&appointment_body("January 1st, 9am", 30, "America/New_York"))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["details"][0]["field"], json!("appointmentDateTime"));
}

#[tokio::test]
async fn test_missing_field_is_rejected() {
    let ctx = TestContext::new();
    let mut body = appointment_body("2025-01-01T14:00:00Z", 30, "America/New_York");
    body.as_object_mut().unwrap().remove("vehicle");

    let response = ctx.server.post("/appointments").json(&body).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let error: Value = response.json();
    assert_eq!(error["details"][0]["field"], json!("body"));
}

#[tokio::test]
async fn test_non_json_body_is_rejected() {
    let ctx = TestContext::new();

    let response = ctx.server.post("/appointments").text("{ not json").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(ctx.store.is_empty());
}
