// ABOUTME: MCP request processing shared by the SSE and streamable-HTTP channels
// ABOUTME: Validates the JSON-RPC envelope, routes methods and maps tool errors to fixed codes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;
use std::time::Instant;

use serde_json::{json, Value};
use tracing::{debug, info, warn};

use super::resources::ServerResources;
use super::schema::{InitializeResponse, ToolCall, ToolResponse};
use crate::constants::protocol::{error_codes, error_messages, JSONRPC_VERSION};
use crate::errors::ToolError;
use crate::jsonrpc::{JsonRpcRequest, JsonRpcResponse};
use crate::tools::context::RequestContext;

/// Processes MCP protocol requests with validation, routing, and execution
pub struct McpRequestProcessor {
    resources: Arc<ServerResources>,
}

impl McpRequestProcessor {
    /// Create a new MCP request processor
    #[must_use]
    pub const fn new(resources: Arc<ServerResources>) -> Self {
        Self { resources }
    }

    /// Handle an MCP message and return a response.
    ///
    /// Returns `None` for notifications (messages without an id); they are
    /// logged and never executed.
    pub async fn handle_request(
        &self,
        request: JsonRpcRequest,
        context: &RequestContext,
    ) -> Option<JsonRpcResponse> {
        let start_time = Instant::now();
        Self::log_request(&request, context);

        if request.is_notification() {
            debug!(
                method = %request.method,
                transport = %context.transport,
                "Notification received, no response"
            );
            Self::log_completion("notification", start_time);
            return None;
        }

        let response = if Self::is_valid_envelope(&request) {
            self.process_request(request, context).await
        } else {
            warn!(
                jsonrpc = %request.jsonrpc,
                transport = %context.transport,
                "Rejected malformed JSON-RPC envelope"
            );
            JsonRpcResponse::error(
                request.id,
                error_codes::INVALID_REQUEST,
                error_messages::INVALID_REQUEST,
            )
        };

        Self::log_completion("request", start_time);
        Some(response)
    }

    fn is_valid_envelope(request: &JsonRpcRequest) -> bool {
        request.jsonrpc == JSONRPC_VERSION && !request.method.is_empty()
    }

    async fn process_request(
        &self,
        request: JsonRpcRequest,
        context: &RequestContext,
    ) -> JsonRpcResponse {
        let method = request.method.clone();
        match method.as_str() {
            "initialize" => self.handle_initialize(request),
            "ping" => JsonRpcResponse::success(request.id, json!({})),
            "tools/list" => self.handle_tools_list(request),
            "tools/call" => self.handle_tools_call(request, context).await,
            "resources/list" => JsonRpcResponse::success(request.id, json!({"resources": []})),
            "resources/templates/list" => {
                JsonRpcResponse::success(request.id, json!({"resourceTemplates": []}))
            }
            "prompts/list" => JsonRpcResponse::success(request.id, json!({"prompts": []})),
            _ => Self::handle_unknown_method(request),
        }
    }

    fn handle_initialize(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let requested_version = request
            .params
            .as_ref()
            .and_then(|params| params.get("protocolVersion"))
            .and_then(Value::as_str);

        let init = InitializeResponse::new(&self.resources.config.mcp, requested_version);
        match serde_json::to_value(init) {
            Ok(result) => JsonRpcResponse::success(request.id, result),
            Err(e) => {
                warn!("Failed to serialize initialize response: {}", e);
                Self::internal_error(request.id)
            }
        }
    }

    fn handle_tools_list(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let tools = self.resources.tool_registry.list_schemas();
        match serde_json::to_value(tools) {
            Ok(tools) => JsonRpcResponse::success(request.id, json!({ "tools": tools })),
            Err(e) => {
                warn!("Failed to serialize tool list: {}", e);
                Self::internal_error(request.id)
            }
        }
    }

    async fn handle_tools_call(
        &self,
        request: JsonRpcRequest,
        context: &RequestContext,
    ) -> JsonRpcResponse {
        let call = match request
            .params
            .map(serde_json::from_value::<ToolCall>)
            .transpose()
        {
            Ok(Some(call)) => call,
            Ok(None) | Err(_) => {
                return JsonRpcResponse::error(
                    request.id,
                    error_codes::INVALID_PARAMS,
                    error_messages::INVALID_ARGUMENTS,
                );
            }
        };

        match self
            .resources
            .tool_registry
            .dispatch(&call.name, call.arguments, context)
            .await
        {
            Ok(result) => match serde_json::to_value(ToolResponse::from(result)) {
                Ok(value) => JsonRpcResponse::success(request.id, value),
                Err(e) => {
                    warn!("Failed to serialize tool response: {}", e);
                    Self::internal_error(request.id)
                }
            },
            Err(e) => Self::tool_error_response(request.id, &e),
        }
    }

    fn tool_error_response(id: Option<Value>, error: &ToolError) -> JsonRpcResponse {
        match error {
            ToolError::NotFound { .. } => JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                error_messages::UNKNOWN_TOOL,
            ),
            e if e.is_validation() => JsonRpcResponse::error(
                id,
                error_codes::INVALID_PARAMS,
                error_messages::INVALID_ARGUMENTS,
            ),
            _ => Self::internal_error(id),
        }
    }

    fn handle_unknown_method(request: JsonRpcRequest) -> JsonRpcResponse {
        info!(method = %request.method, "Unknown MCP method requested");
        JsonRpcResponse::error(
            request.id,
            error_codes::METHOD_NOT_FOUND,
            error_messages::METHOD_NOT_FOUND,
        )
    }

    fn internal_error(id: Option<Value>) -> JsonRpcResponse {
        JsonRpcResponse::error(
            id,
            error_codes::INTERNAL_ERROR,
            error_messages::INTERNAL_ERROR,
        )
    }

    fn log_request(request: &JsonRpcRequest, context: &RequestContext) {
        debug!(
            method = %request.method,
            id = ?request.id,
            transport = %context.transport,
            session_id = %context.session_label(),
            source_address = %context.source_address,
            "MCP request received"
        );
    }

    fn log_completion(kind: &str, start_time: Instant) {
        debug!(
            "MCP {} processed in {}ms",
            kind,
            start_time.elapsed().as_millis()
        );
    }
}
