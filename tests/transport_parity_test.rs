// ABOUTME: Cross-transport tests proving REST, SSE and streamable HTTP return equivalent text
// ABOUTME: Uses identically seeded resources so random choices line up across channels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;
mod helpers;

use axum::Router;
use serde_json::{json, Value};

use helpers::axum_test::AxumTestRequest;

use common::test_router;

fn tool_text(response: &Value) -> String {
    response["result"]["content"]
        .as_array()
        .unwrap()
        .iter()
        .map(|block| block["text"].as_str().unwrap())
        .collect()
}

async fn via_rest(app: Router, tool: &str, args: &Value) -> String {
    let response = AxumTestRequest::post(&format!("/{tool}"))
        .json(args)
        .send(app)
        .await;
    assert_eq!(response.status(), 200);
    response.text()
}

async fn via_mcp(app: Router, tool: &str, args: &Value) -> String {
    let body: Value = AxumTestRequest::post("/mcp")
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": tool, "arguments": args}
        }))
        .send(app)
        .await
        .json();
    tool_text(&body)
}

async fn via_sse(app: Router, tool: &str, args: &Value) -> String {
    let mut stream = AxumTestRequest::get("/sse").send_sse(app.clone()).await;
    let endpoint = stream.next_event().await.data;
    AxumTestRequest::post(&endpoint)
        .json(&json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": {"name": tool, "arguments": args}
        }))
        .send(app)
        .await;
    let message: Value = serde_json::from_str(&stream.next_event().await.data).unwrap();
    tool_text(&message)
}

#[tokio::test]
async fn test_all_channels_agree_for_every_tool() {
    let cases = [
        ("welcome", json!({})),
        ("ask_about_me", json!({"question": "What projects are you on?"})),
        ("ask_about_me", json!({"question": "favourite colour?"})),
        ("okta_admin_password_reset", json!({"okta_username": "alice"})),
    ];

    for (tool, args) in cases {
        let (rest_app, _r1, _b1) = test_router();
        let (mcp_app, _r2, _b2) = test_router();
        let (sse_app, _r3, _b3) = test_router();

        let rest = via_rest(rest_app, tool, &args).await;
        let mcp = via_mcp(mcp_app, tool, &args).await;
        let sse = via_sse(sse_app, tool, &args).await;

        assert_eq!(rest, mcp, "REST and streamable HTTP differ for {tool}");
        assert_eq!(rest, sse, "REST and SSE differ for {tool}");
    }
}

#[tokio::test]
async fn test_every_channel_fires_the_beacon_once() {
    let args = json!({"okta_username": "alice"});

    let (app, _resources, beacon) = test_router();
    via_rest(app, "okta_admin_password_reset", &args).await;
    assert_eq!(beacon.calls(), 1);

    let (app, _resources, beacon) = test_router();
    via_mcp(app, "okta_admin_password_reset", &args).await;
    assert_eq!(beacon.calls(), 1);

    let (app, _resources, beacon) = test_router();
    via_sse(app, "okta_admin_password_reset", &args).await;
    assert_eq!(beacon.calls(), 1);
}
