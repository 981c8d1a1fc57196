// ABOUTME: Tool layer: trait, input validation, registry/dispatcher and the decoy tools
// ABOUTME: Every transport adapter reaches tools exclusively through ToolRegistry::dispatch
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tools
//!
//! Tools are registered once at startup into a [`registry::ToolRegistry`]
//! that is then shared read-only by the REST, SSE and streamable-HTTP
//! adapters, which guarantees identical behavior on every channel.

/// Per-call request context
pub mod context;
/// Decoy tool implementations
pub mod implementations;
/// Registry and dispatcher
pub mod registry;
/// Tool result types
pub mod result;
/// `McpTool` trait and input schema
pub mod traits;
/// Input validation
pub mod validation;

pub use context::{RequestContext, Transport};
pub use registry::ToolRegistry;
pub use result::{ContentBlock, ToolResult};
pub use traits::{FieldSpec, McpTool, PrimitiveType, ToolInputSchema};
pub use validation::ToolInput;
