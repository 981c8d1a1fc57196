// ABOUTME: Streamable-HTTP MCP endpoint: one JSON-RPC message per POST /mcp
// ABOUTME: Issues an Mcp-Session-Id on initialize; other methods on /mcp get 405 with Allow: POST
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! MCP protocol routes for agent clients using the streamable-HTTP transport

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tracing::{debug, warn};
use uuid::Uuid;

use crate::constants::messages;
use crate::constants::protocol::{error_codes, error_messages, MCP_SESSION_ID_HEADER};
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
use crate::mcp::mcp_request_processor::McpRequestProcessor;
use crate::mcp::resources::ServerResources;
use crate::tools::context::{RequestContext, Transport};

/// MCP routes implementation
pub struct McpRoutes;

impl McpRoutes {
    /// `POST /mcp`
    ///
    /// There is no server-initiated stream, so `GET` (and `DELETE`) get
    /// `405` rather than the 404 that clients read as an expired session.
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route(
                "/mcp",
                post(Self::handle_message).fallback(Self::method_not_allowed),
            )
            .with_state(resources)
    }

    async fn method_not_allowed() -> Response {
        (
            StatusCode::METHOD_NOT_ALLOWED,
            [(header::ALLOW, "POST")],
            messages::METHOD_NOT_ALLOWED,
        )
            .into_response()
    }

    async fn handle_message(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        let request = match serde_json::from_slice::<JsonRpcRequest>(&body) {
            Ok(request) => request,
            Err(e) => {
                debug!("Unparseable MCP message: {}", e);
                let response = JsonRpcResponse::error(
                    None,
                    error_codes::PARSE_ERROR,
                    error_messages::PARSE_ERROR,
                );
                return (StatusCode::BAD_REQUEST, Json(response)).into_response();
            }
        };

        let is_initialize = request.method == "initialize";
        let mut context = RequestContext::from_headers(
            &headers,
            &resources.config.client_ip_header,
            Transport::StreamableHttp,
        );
        if let Some(session_id) = headers
            .get(MCP_SESSION_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.is_empty())
        {
            context = context.with_session_id(session_id);
        }

        let new_session = is_initialize.then(|| Uuid::new_v4().to_string());
        if let Some(session_id) = &new_session {
            context = context.with_session_id(session_id.as_str());
        }

        let processor = McpRequestProcessor::new(resources);
        let Some(response) = processor.handle_request(request, &context).await else {
            return StatusCode::ACCEPTED.into_response();
        };

        let mut http_response = (StatusCode::OK, Json(response)).into_response();
        if let Some(session_id) = new_session {
            match HeaderValue::from_str(&session_id) {
                Ok(value) => {
                    http_response
                        .headers_mut()
                        .insert(MCP_SESSION_ID_HEADER, value);
                }
                Err(e) => warn!("Could not encode session id header: {}", e),
            }
        }
        http_response
    }
}
