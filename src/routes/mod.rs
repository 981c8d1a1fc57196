// ABOUTME: Route assembly for the decoy server's HTTP surface
// ABOUTME: Merges the home page, REST tool, SSE and streamable-HTTP routers behind one 404 fallback
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the decoy server
//!
//! Each surface lives in its own module with a `XRoutes::routes` constructor.
//! Every unmatched path, and every matched path with the wrong method, is
//! answered with the same `404 Not found` so the surface reveals nothing.

/// Static landing page
pub mod home;
/// Streamable-HTTP MCP endpoint
pub mod mcp;
/// `POST /<tool_name>` REST adapter
pub mod rest;

use std::sync::Arc;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Router,
};
use tower_http::{
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

pub use home::HomeRoutes;
pub use mcp::McpRoutes;
pub use rest::RestRoutes;

use crate::constants::messages;
use crate::mcp::resources::ServerResources;
use crate::sse::SseRoutes;

/// Fixed `404 Not found` response, also used as the method fallback
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, messages::NOT_FOUND).into_response()
}

/// Build the complete application router
pub fn build_router(resources: Arc<ServerResources>) -> Router {
    Router::new()
        .merge(HomeRoutes::routes())
        .merge(SseRoutes::routes(Arc::clone(&resources)))
        .merge(McpRoutes::routes(Arc::clone(&resources)))
        .merge(RestRoutes::routes(resources))
        .fallback(not_found)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}
