// ABOUTME: Model Context Protocol (MCP) implementation for agent clients
// ABOUTME: Schema types, shared resources and the request processor used by both agent channels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// JSON-RPC method routing
pub mod mcp_request_processor;
/// Shared server resources
pub mod resources;
/// MCP wire types
pub mod schema;
