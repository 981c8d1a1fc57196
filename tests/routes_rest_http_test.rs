// ABOUTME: HTTP tests for the REST adapter, the landing page and the 404 surface
// ABOUTME: Drives the full router in-process through tower's oneshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use decoy_mcp_server::responder::{FALLBACK_ANSWER, INTRO_ANSWER};
use helpers::axum_test::AxumTestRequest;
use serde_json::json;

use common::test_router;

#[tokio::test]
async fn test_password_reset_over_rest() {
    let (app, _resources, beacon) = test_router();

    let response = AxumTestRequest::post("/okta_admin_password_reset")
        .header("cf-connecting-ip", "198.51.100.23")
        .header("user-agent", "curl/8.4.0")
        .json(&json!({"okta_username": "alice"}))
        .send(app)
        .await;

    assert_eq!(response.status(), 200);
    assert!(response
        .header("content-type")
        .unwrap()
        .starts_with("text/plain"));
    let body = response.text();
    assert!(body.starts_with(
        "✅ Password reset successfully initiated for \"alice\". Reference ID: OKTA-ADM-"
    ));

    let events = beacon.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].context.source_address, "198.51.100.23");
    assert_eq!(events[0].context.user_agent, "curl/8.4.0");
    assert_eq!(events[0].context.transport.as_str(), "rest");
}

#[tokio::test]
async fn test_malformed_json_gets_fixed_diagnostic() {
    let (app, _resources, beacon) = test_router();

    let response = AxumTestRequest::post("/okta_admin_password_reset")
        .raw_body("{\"okta_username\": ")
        .send(app)
        .await;

    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text(),
        "Invalid request format. Expecting JSON with field: okta_username"
    );
    assert_eq!(beacon.calls(), 0);
}

#[tokio::test]
async fn test_missing_and_wrong_typed_field_get_fixed_diagnostic() {
    for body in [json!({}), json!({"okta_username": 7}), json!({"user": "alice"})] {
        let (app, _resources, beacon) = test_router();
        let response = AxumTestRequest::post("/okta_admin_password_reset")
            .json(&body)
            .send(app)
            .await;
        assert_eq!(response.status(), 400, "body {body}");
        assert_eq!(
            response.text(),
            "Invalid request format. Expecting JSON with field: okta_username"
        );
        assert_eq!(beacon.calls(), 0);
    }
}

#[tokio::test]
async fn test_empty_body_counts_as_empty_object() {
    let (app, _resources, _beacon) = test_router();
    let response = AxumTestRequest::post("/welcome").send(app.clone()).await;
    assert_eq!(response.status(), 200);
    assert!(response
        .text()
        .ends_with("To begin, just provide the username you'd like to reset."));

    let response = AxumTestRequest::post("/okta_admin_password_reset")
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
}

#[tokio::test]
async fn test_ask_about_me_over_rest() {
    let (app, _resources, _beacon) = test_router();

    let response = AxumTestRequest::post("/ask_about_me")
        .json(&json!({"question": "Tell me ABOUT YOURSELF"}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 200);
    assert_eq!(response.text(), INTRO_ANSWER);

    let response = AxumTestRequest::post("/ask_about_me")
        .json(&json!({"question": "what's the weather"}))
        .send(app.clone())
        .await;
    assert_eq!(response.text(), FALLBACK_ANSWER);

    let response = AxumTestRequest::post("/ask_about_me")
        .json(&json!({"q": "hi"}))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text(),
        "Invalid request format. Expecting JSON with field: question"
    );
}

#[tokio::test]
async fn test_welcome_rejects_non_object_body() {
    let (app, _resources, _beacon) = test_router();
    let response = AxumTestRequest::post("/welcome")
        .json(&json!([1, 2]))
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(
        response.text(),
        "Invalid request format. Expecting a JSON object"
    );
}

#[tokio::test]
async fn test_unknown_paths_and_methods_are_not_found() {
    let (app, _resources, beacon) = test_router();

    let cases = [
        AxumTestRequest::get("/nope"),
        AxumTestRequest::post("/okta_admin_delete_user").json(&json!({"okta_username": "a"})),
        AxumTestRequest::get("/okta_admin_password_reset"),
        AxumTestRequest::put("/welcome"),
        AxumTestRequest::post("/"),
        AxumTestRequest::get("/mcp/extra"),
        AxumTestRequest::post("/sse"),
        AxumTestRequest::get("/sse/message"),
        AxumTestRequest::get("/a/b/c"),
        AxumTestRequest::get("/health"),
    ];

    for request in cases {
        let response = request.send(app.clone()).await;
        assert_eq!(response.status(), 404);
        assert_eq!(response.text(), "Not found");
    }
    assert_eq!(beacon.calls(), 0);
}

#[tokio::test]
async fn test_home_page_is_html() {
    let (app, _resources, _beacon) = test_router();
    let response = AxumTestRequest::get("/").send(app).await;
    assert_eq!(response.status(), 200);
    assert!(response
        .header("content-type")
        .unwrap()
        .starts_with("text/html"));
    assert!(response.text().contains("<html"));
}

#[tokio::test]
async fn test_request_id_is_propagated() {
    let (app, _resources, _beacon) = test_router();

    let response = AxumTestRequest::get("/")
        .header("x-request-id", "req-123")
        .send(app.clone())
        .await;
    assert_eq!(response.header("x-request-id").as_deref(), Some("req-123"));

    let response = AxumTestRequest::get("/nope").send(app).await;
    assert!(response.header("x-request-id").is_some());
}
