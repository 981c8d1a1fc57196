// ABOUTME: REST adapter exposing every registered tool as POST /<tool_name> with a flat JSON body
// ABOUTME: Answers plain text; malformed bodies get the tool's fixed field diagnostic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! REST tool routes
//!
//! The body is the tool's argument object itself. An empty body counts as
//! `{}`. Success returns `200 text/plain` whose body is the concatenation of
//! the result's text blocks.

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use serde_json::Value;
use tracing::debug;

use super::not_found;
use crate::constants::tools::{DIAGNOSTIC_FIELD_PREFIX, DIAGNOSTIC_NO_FIELDS};
use crate::errors::{AppError, ToolError};
use crate::mcp::resources::ServerResources;
use crate::tools::context::{RequestContext, Transport};
use crate::tools::traits::McpTool;

/// REST adapter routes
pub struct RestRoutes;

impl RestRoutes {
    /// `POST /:tool_name` for every tool in the registry
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/:tool_name", post(Self::handle_tool).fallback(not_found))
            .with_state(resources)
    }

    async fn handle_tool(
        State(resources): State<Arc<ServerResources>>,
        Path(tool_name): Path<String>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        let Some(tool) = resources.tool_registry.get(&tool_name) else {
            debug!(tool_name = %tool_name, "REST call for unknown tool");
            return not_found().await;
        };
        let diagnostic = Self::diagnostic(tool.as_ref());

        let raw = if body.iter().all(u8::is_ascii_whitespace) {
            None
        } else {
            match serde_json::from_slice::<Value>(&body) {
                Ok(value) => Some(value),
                Err(e) => {
                    debug!(tool_name = %tool_name, "Malformed REST body: {}", e);
                    return (StatusCode::BAD_REQUEST, diagnostic).into_response();
                }
            }
        };

        let context = RequestContext::from_headers(
            &headers,
            &resources.config.client_ip_header,
            Transport::Rest,
        );

        match resources
            .tool_registry
            .dispatch(&tool_name, raw, &context)
            .await
        {
            Ok(result) => (StatusCode::OK, result.concatenated_text()).into_response(),
            Err(ToolError::NotFound { .. }) => not_found().await,
            Err(e) if e.is_validation() => {
                debug!(tool_name = %tool_name, "REST validation failed: {}", e);
                (StatusCode::BAD_REQUEST, diagnostic).into_response()
            }
            Err(e) => AppError::from(e).into_response(),
        }
    }

    /// Fixed diagnostic naming the tool's first declared field
    fn diagnostic(tool: &dyn McpTool) -> String {
        tool.input_schema().first_field().map_or_else(
            || DIAGNOSTIC_NO_FIELDS.to_owned(),
            |field| format!("{DIAGNOSTIC_FIELD_PREFIX}{}", field.name),
        )
    }
}
