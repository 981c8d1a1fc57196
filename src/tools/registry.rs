// ABOUTME: Central registry for MCP tools and the single dispatch path used by every transport.
// ABOUTME: Rejects duplicates, validates input and converts handler faults into a generic result.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Registry
//!
//! The registry is built once at startup and shared read-only behind an
//! `Arc`. [`ToolRegistry::dispatch`] is the only way a tool runs:
//!
//! 1. unknown name: `ToolError::NotFound`, no handler runs;
//! 2. input validated against the tool's declared fields;
//! 3. handler runs; an error or panic becomes [`GENERIC_HANDLER_FALLBACK`]
//!    and is logged for operators only.

use std::any::Any;
use std::collections::HashMap;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use std::time::Instant;

use futures_util::FutureExt;
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::constants::tools::GENERIC_HANDLER_FALLBACK;
use crate::errors::ToolError;
use crate::mcp::schema::ToolSchema;

use super::context::RequestContext;
use super::result::ToolResult;
use super::traits::McpTool;
use super::validation::validate;

/// Registry of tools in registration order
#[derive(Default)]
pub struct ToolRegistry {
    tools: Vec<Arc<dyn McpTool>>,
    index: HashMap<&'static str, usize>,
}

impl ToolRegistry {
    /// Create a new empty registry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool
    ///
    /// # Errors
    ///
    /// Returns `ToolError::AlreadyRegistered` if a tool with the same name
    /// exists; the registry is left unchanged
    pub fn register(&mut self, tool: Arc<dyn McpTool>) -> Result<(), ToolError> {
        let name = tool.name();

        if self.index.contains_key(name) {
            warn!("Tool '{}' is already registered, rejecting duplicate", name);
            return Err(ToolError::already_registered(name));
        }

        debug!(
            "Registering tool '{}' with {} input field(s)",
            name,
            tool.input_schema().fields.len()
        );
        self.index.insert(name, self.tools.len());
        self.tools.push(tool);
        Ok(())
    }

    /// Get a tool by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Arc<dyn McpTool>> {
        self.index.get(name).and_then(|&slot| self.tools.get(slot))
    }

    /// Check if a tool is registered
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get the number of registered tools
    #[must_use]
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Check if the registry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    /// Tool names in registration order
    #[must_use]
    pub fn tool_names(&self) -> Vec<&'static str> {
        self.tools.iter().map(|tool| tool.name()).collect()
    }

    /// Schemas for `tools/list`, in registration order
    #[must_use]
    pub fn list_schemas(&self) -> Vec<ToolSchema> {
        self.tools
            .iter()
            .map(|tool| ToolSchema {
                name: tool.name().to_owned(),
                description: tool.description().to_owned(),
                input_schema: tool.input_schema().to_json_schema(),
            })
            .collect()
    }

    /// Validate and run a tool.
    ///
    /// # Errors
    ///
    /// Returns `ToolError` only for unknown tools and invalid input. Handler
    /// failures never surface here.
    pub async fn dispatch(
        &self,
        name: &str,
        raw_input: Option<Value>,
        context: &RequestContext,
    ) -> Result<ToolResult, ToolError> {
        let Some(tool) = self.get(name) else {
            info!(
                tool = %name,
                transport = %context.transport,
                source_address = %context.source_address,
                request_id = %context.request_id,
                "Rejected call to unregistered tool"
            );
            return Err(ToolError::not_found(name));
        };

        let input = validate(tool.name(), &tool.input_schema(), raw_input).map_err(|e| {
            info!(
                tool = %name,
                transport = %context.transport,
                request_id = %context.request_id,
                "Tool input rejected: {}",
                e
            );
            e
        })?;

        let start = Instant::now();
        let outcome = AssertUnwindSafe(tool.execute(input, context))
            .catch_unwind()
            .await;
        let elapsed_ms = start.elapsed().as_millis();

        match outcome {
            Ok(Ok(result)) => {
                debug!(
                    tool = %name,
                    transport = %context.transport,
                    elapsed_ms,
                    "Tool completed"
                );
                Ok(result)
            }
            Ok(Err(e)) => {
                error!(
                    tool = %name,
                    transport = %context.transport,
                    request_id = %context.request_id,
                    elapsed_ms,
                    "Tool handler failed: {}",
                    e
                );
                Ok(ToolResult::text(GENERIC_HANDLER_FALLBACK))
            }
            Err(panic) => {
                error!(
                    tool = %name,
                    transport = %context.transport,
                    request_id = %context.request_id,
                    elapsed_ms,
                    "Tool handler panicked: {}",
                    panic_message(panic.as_ref())
                );
                Ok(ToolResult::text(GENERIC_HANDLER_FALLBACK))
            }
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("non-string panic payload")
}
