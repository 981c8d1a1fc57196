// ABOUTME: Defines the McpTool trait and the declared input schema of a tool.
// ABOUTME: Tools implement this trait to be registered and dispatched via the ToolRegistry.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # MCP Tool Trait and Input Schema
//!
//! A tool is a name, a description, an ordered list of required input fields
//! and an async handler. Handlers receive input that has already been
//! validated against the declared fields, so they never see a missing or
//! wrong-typed value.

use std::collections::HashMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::errors::AppResult;
use crate::mcp::schema::{JsonSchema, PropertySchema};

use super::context::RequestContext;
use super::result::ToolResult;
use super::validation::ToolInput;

/// JSON primitive a field must have. No coercion between them is ever made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// JSON string
    String,
    /// Any JSON number
    Number,
    /// JSON number without a fractional part
    Integer,
    /// JSON boolean
    Boolean,
}

impl PrimitiveType {
    /// JSON Schema type name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Integer => "integer",
            Self::Boolean => "boolean",
        }
    }

    /// Whether `value` has this primitive type
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match self {
            Self::String => value.is_string(),
            Self::Number => value.is_number(),
            Self::Integer => value.is_i64() || value.is_u64(),
            Self::Boolean => value.is_boolean(),
        }
    }
}

/// One declared input field. Every declared field is required.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Field name in the JSON object
    pub name: &'static str,
    /// Required primitive type
    pub field_type: PrimitiveType,
    /// Optional description advertised in `tools/list`
    pub description: Option<&'static str>,
}

impl FieldSpec {
    /// Required string field
    #[must_use]
    pub const fn string(name: &'static str) -> Self {
        Self {
            name,
            field_type: PrimitiveType::String,
            description: None,
        }
    }

    /// Attach a description
    #[must_use]
    pub const fn describe(mut self, description: &'static str) -> Self {
        self.description = Some(description);
        self
    }
}

/// Ordered list of declared fields
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolInputSchema {
    /// Fields in declaration order
    pub fields: Vec<FieldSpec>,
}

impl ToolInputSchema {
    /// Schema with no fields
    #[must_use]
    pub const fn empty() -> Self {
        Self { fields: Vec::new() }
    }

    /// Schema with the given fields
    #[must_use]
    pub fn with_fields(fields: impl IntoIterator<Item = FieldSpec>) -> Self {
        Self {
            fields: fields.into_iter().collect(),
        }
    }

    /// First declared field, used for the REST diagnostic
    #[must_use]
    pub fn first_field(&self) -> Option<&FieldSpec> {
        self.fields.first()
    }

    /// Render as the JSON Schema object advertised by `tools/list`
    #[must_use]
    pub fn to_json_schema(&self) -> JsonSchema {
        let properties: HashMap<String, PropertySchema> = self
            .fields
            .iter()
            .map(|field| {
                (
                    field.name.to_owned(),
                    PropertySchema {
                        property_type: field.field_type.as_str().to_owned(),
                        description: field.description.map(str::to_owned),
                    },
                )
            })
            .collect();
        let required: Vec<String> = self.fields.iter().map(|f| f.name.to_owned()).collect();

        JsonSchema {
            schema_type: "object".to_owned(),
            properties: Some(properties),
            required: if required.is_empty() {
                None
            } else {
                Some(required)
            },
        }
    }
}

/// Core trait for MCP tools.
///
/// Implementations hold their collaborators (random source, beacon,
/// classifier) as fields; the registry only knows this interface.
#[async_trait]
pub trait McpTool: Send + Sync {
    /// Unique tool identifier
    fn name(&self) -> &'static str;

    /// Human-readable description advertised to clients
    fn description(&self) -> &'static str;

    /// Declared input fields
    fn input_schema(&self) -> ToolInputSchema;

    /// Run the tool with validated input.
    ///
    /// # Errors
    ///
    /// Any error is caught by the registry and replaced by a generic text
    /// result; it never reaches the caller.
    async fn execute(&self, input: ToolInput, context: &RequestContext) -> AppResult<ToolResult>;
}
