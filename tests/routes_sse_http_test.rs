// ABOUTME: HTTP tests for the MCP-over-SSE channel
// ABOUTME: Opens a live event stream in-process, posts messages and reads the answers back
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use helpers::axum_test::AxumTestRequest;
use serde_json::{json, Value};

use common::test_router;

#[tokio::test]
async fn test_stream_starts_with_endpoint_event() {
    let (app, resources, _beacon) = test_router();

    let mut stream = AxumTestRequest::get("/sse").send_sse(app).await;
    assert_eq!(stream.status(), 200);
    assert!(stream
        .content_type()
        .unwrap()
        .starts_with("text/event-stream"));

    let event = stream.next_event().await;
    assert_eq!(event.event, "endpoint");
    let session_id = event
        .data
        .strip_prefix("/sse/message?sessionId=")
        .unwrap()
        .to_owned();
    assert!(resources.sse_manager.contains(&session_id).await);
}

#[tokio::test]
async fn test_tools_call_answer_arrives_on_stream() {
    let (app, _resources, beacon) = test_router();

    let mut stream = AxumTestRequest::get("/sse").send_sse(app.clone()).await;
    let endpoint = stream.next_event().await.data;

    let response = AxumTestRequest::post(&endpoint)
        .header("cf-connecting-ip", "203.0.113.99")
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 11,
            "method": "tools/call",
            "params": {"name": "okta_admin_password_reset", "arguments": {"okta_username": "alice"}}
        }))
        .send(app)
        .await;
    assert_eq!(response.status(), 202);
    assert_eq!(response.text(), "Accepted");

    let event = stream.next_event().await;
    assert_eq!(event.event, "message");
    let message: Value = serde_json::from_str(&event.data).unwrap();
    assert_eq!(message["id"], 11);
    assert!(message["result"]["content"][0]["text"]
        .as_str()
        .unwrap()
        .contains("\"alice\""));

    let events = beacon.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].context.transport.as_str(), "sse");
    assert_eq!(events[0].context.source_address, "203.0.113.99");
    assert_eq!(
        format!("/sse/message?sessionId={}", events[0].context.session_label()),
        endpoint
    );
}

#[tokio::test]
async fn test_initialize_then_list_over_sse() {
    let (app, _resources, _beacon) = test_router();

    let mut stream = AxumTestRequest::get("/sse").send_sse(app.clone()).await;
    let endpoint = stream.next_event().await.data;

    let response = AxumTestRequest::post(&endpoint)
        .json(&json!({"jsonrpc": "2.0", "id": 1, "method": "initialize", "params": {}}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 202);
    let init: Value = serde_json::from_str(&stream.next_event().await.data).unwrap();
    assert_eq!(init["result"]["protocolVersion"], "2024-11-05");

    let response = AxumTestRequest::post(&endpoint)
        .json(&json!({"jsonrpc": "2.0", "method": "notifications/initialized"}))
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 202);

    AxumTestRequest::post(&endpoint)
        .json(&json!({"jsonrpc": "2.0", "id": 2, "method": "tools/list"}))
        .send(app)
        .await;
    let list: Value = serde_json::from_str(&stream.next_event().await.data).unwrap();
    assert_eq!(list["id"], 2);
    assert_eq!(list["result"]["tools"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_unknown_or_missing_session_is_not_found() {
    let (app, _resources, _beacon) = test_router();
    let ping = json!({"jsonrpc": "2.0", "id": 1, "method": "ping"});

    let response = AxumTestRequest::post("/sse/message?sessionId=does-not-exist")
        .json(&ping)
        .send(app.clone())
        .await;
    assert_eq!(response.status(), 404);
    assert_eq!(response.text(), "Not found");

    let response = AxumTestRequest::post("/sse/message")
        .json(&ping)
        .send(app)
        .await;
    assert_eq!(response.status(), 404);
}

#[tokio::test]
async fn test_unparseable_message_is_rejected() {
    let (app, _resources, beacon) = test_router();

    let mut stream = AxumTestRequest::get("/sse").send_sse(app.clone()).await;
    let endpoint = stream.next_event().await.data;

    let response = AxumTestRequest::post(&endpoint)
        .raw_body("definitely not json")
        .send(app)
        .await;
    assert_eq!(response.status(), 400);
    assert_eq!(response.text(), "Invalid message");
    assert_eq!(beacon.calls(), 0);
}

#[tokio::test]
async fn test_dropping_stream_closes_session() {
    let (app, resources, _beacon) = test_router();

    let mut stream = AxumTestRequest::get("/sse").send_sse(app).await;
    let endpoint = stream.next_event().await.data;
    let session_id = endpoint.rsplit('=').next().unwrap().to_owned();
    assert_eq!(resources.sse_manager.active_sessions().await, 1);

    drop(stream);

    for _ in 0..50 {
        if !resources.sse_manager.contains(&session_id).await {
            return;
        }
        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
    }
    panic!("session {session_id} was not unregistered");
}
