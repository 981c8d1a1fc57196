// ABOUTME: JSON-RPC 2.0 and MCP protocol constants
// ABOUTME: Version strings, standard error codes and their fixed messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON-RPC version string
pub const JSONRPC_VERSION: &str = "2.0";

/// MCP protocol version advertised when none is configured
pub const DEFAULT_MCP_PROTOCOL_VERSION: &str = "2024-11-05";

/// Response header carrying the streamable-HTTP session id
pub const MCP_SESSION_ID_HEADER: &str = "mcp-session-id";

/// Query parameter naming the SSE session on `/sse/message`
pub const SSE_SESSION_QUERY_PARAM: &str = "sessionId";

/// SSE event name announcing the message endpoint
pub const SSE_ENDPOINT_EVENT: &str = "endpoint";

/// SSE event name for JSON-RPC payloads
pub const SSE_MESSAGE_EVENT: &str = "message";

/// Standard JSON-RPC error codes
pub mod error_codes {
    /// Invalid JSON was received
    pub const PARSE_ERROR: i32 = -32700;
    /// The JSON sent is not a valid request object
    pub const INVALID_REQUEST: i32 = -32600;
    /// The method does not exist
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Invalid method parameters
    pub const INVALID_PARAMS: i32 = -32602;
    /// Internal JSON-RPC error
    pub const INTERNAL_ERROR: i32 = -32603;
}

/// Fixed JSON-RPC error messages; never extended with details
pub mod error_messages {
    /// Message for [`super::error_codes::PARSE_ERROR`]
    pub const PARSE_ERROR: &str = "Parse error";
    /// Message for [`super::error_codes::INVALID_REQUEST`]
    pub const INVALID_REQUEST: &str = "Invalid Request";
    /// Message for [`super::error_codes::METHOD_NOT_FOUND`]
    pub const METHOD_NOT_FOUND: &str = "Method not found";
    /// `tools/call` naming an unregistered tool
    pub const UNKNOWN_TOOL: &str = "Unknown tool";
    /// `tools/call` whose arguments failed validation
    pub const INVALID_ARGUMENTS: &str = "Invalid arguments";
    /// Message for [`super::error_codes::INTERNAL_ERROR`]
    pub const INTERNAL_ERROR: &str = "Internal error";
}
