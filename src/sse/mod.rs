// ABOUTME: Server-Sent Events channel for MCP clients that speak the SSE transport
// ABOUTME: Session table plus the /sse stream and /sse/message inbox handlers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Session table for open SSE streams
pub mod manager;
/// HTTP route handlers for SSE endpoints
pub mod routes;

pub use manager::{ConnectionMetadata, SseManager};
pub use routes::SseRoutes;
