// ABOUTME: Q&A tool answering free-text questions from the canned responder table.
// ABOUTME: Delegates classification entirely to ResponderClassifier.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;
use tracing::info;

use crate::constants::tools::{ASK_ABOUT_ME, FIELD_QUESTION};
use crate::errors::AppResult;
use crate::responder::ResponderClassifier;
use crate::tools::context::RequestContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{FieldSpec, McpTool, ToolInputSchema};
use crate::tools::validation::ToolInput;

/// `ask_about_me`: `{question: string}`
pub struct AskAboutMeTool {
    classifier: Arc<ResponderClassifier>,
}

impl AskAboutMeTool {
    /// Create the tool over a classifier
    #[must_use]
    pub const fn new(classifier: Arc<ResponderClassifier>) -> Self {
        Self { classifier }
    }
}

#[async_trait]
impl McpTool for AskAboutMeTool {
    fn name(&self) -> &'static str {
        ASK_ABOUT_ME
    }

    fn description(&self) -> &'static str {
        "Q&A tool about the site owner's background and current work."
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::with_fields([
            FieldSpec::string(FIELD_QUESTION).describe("Question about the site owner")
        ])
    }

    async fn execute(&self, input: ToolInput, context: &RequestContext) -> AppResult<ToolResult> {
        let question = input.require_str(FIELD_QUESTION)?;
        let answer = self.classifier.classify(question);

        info!(
            transport = %context.transport,
            source_address = %context.source_address,
            request_id = %context.request_id,
            question_len = question.len(),
            "Question received"
        );

        Ok(ToolResult::text(answer))
    }
}
