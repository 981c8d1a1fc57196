// ABOUTME: Defines ToolResult, the ordered text content a tool returns.
// ABOUTME: Adapters render it as plain text (REST) or MCP content blocks (agent channels).
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Result Types

use serde::{Deserialize, Serialize};

/// One block of tool output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ContentBlock {
    /// Plain text payload
    Text {
        /// The text
        text: String,
    },
}

impl ContentBlock {
    /// Text payload of this block
    #[must_use]
    pub fn as_text(&self) -> &str {
        match self {
            Self::Text { text } => text,
        }
    }
}

/// Result returned by tool execution: an ordered sequence of content blocks
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ToolResult {
    /// Blocks in output order
    pub content: Vec<ContentBlock>,
}

impl ToolResult {
    /// Create a single-block text result
    #[must_use]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: vec![ContentBlock::Text { text: text.into() }],
        }
    }

    /// Append a text block
    #[must_use]
    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.content.push(ContentBlock::Text { text: text.into() });
        self
    }

    /// All text blocks joined in order; this is the REST response body
    #[must_use]
    pub fn concatenated_text(&self) -> String {
        self.content.iter().map(ContentBlock::as_text).collect()
    }

    /// True when there is no text at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.content.iter().all(|block| block.as_text().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_concatenation_preserves_order() {
        let result = ToolResult::text("first ").with_text("second");
        assert_eq!(result.concatenated_text(), "first second");
        assert!(!result.is_empty());
    }

    #[test]
    fn test_block_serializes_as_mcp_text() {
        let value = serde_json::to_value(ContentBlock::Text { text: "hi".into() }).unwrap();
        assert_eq!(value, serde_json::json!({"type": "text", "text": "hi"}));
    }
}
