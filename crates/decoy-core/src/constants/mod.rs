// ABOUTME: Application constants organized by domain
// ABOUTME: Protocol identifiers, tool names and the fixed caller-facing strings
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants shared by the server crate and its tests.
//!
//! Every string a caller can observe on an error path lives here, so the
//! set of possible responses stays closed and reviewable.

/// MCP and JSON-RPC protocol constants
pub mod protocol;

/// Tool identifiers, field names and tool response text
pub mod tools;

/// Fixed caller-facing messages
pub mod messages {
    /// Body for unknown routes, tools and sessions
    pub const NOT_FOUND: &str = "Not found";

    /// Body for non-POST requests to the streamable-HTTP endpoint
    pub const METHOD_NOT_ALLOWED: &str = "Method not allowed";

    /// Body for unparseable SSE session messages
    pub const INVALID_MESSAGE: &str = "Invalid message";

    /// Body for accepted SSE session messages
    pub const ACCEPTED: &str = "Accepted";

    /// Generic body for rejected input that has no tool-specific diagnostic
    pub const INVALID_REQUEST: &str = "Invalid request";

    /// Generic body for internal failures
    pub const TEMPORARILY_UNAVAILABLE: &str = "Service temporarily unavailable";
}

/// Service identity used in logs
pub mod service_names {
    /// Default `SERVICE_NAME` for structured logs
    pub const DECOY_MCP_SERVER: &str = "decoy-mcp-server";
}

/// Log targets
pub mod log_targets {
    /// Target for honeypot trigger records, routed separately by operators
    pub const TRIGGER: &str = "decoy::trigger";
}
