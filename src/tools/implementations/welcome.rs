// ABOUTME: Welcome tool that greets the caller and prompts for a reset target.
// ABOUTME: Picks one of a fixed set of greetings from the injected random source.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::sync::Arc;

use async_trait::async_trait;

use crate::constants::tools::WELCOME;
use crate::errors::AppResult;
use crate::tools::context::RequestContext;
use crate::tools::result::ToolResult;
use crate::tools::traits::{McpTool, ToolInputSchema};
use crate::tools::validation::ToolInput;
use crate::utils::random::DecoyRng;

/// Greetings, one chosen per call
pub const WELCOME_MESSAGES: [&str; 3] = [
    "👋 Welcome, admin. What action would you like to perform today?",
    "Good to see you. What can I help you with today?",
    "🛠️ Hello Admin. Are you ready to explore different tools?",
];

/// Appended to every greeting
pub const WELCOME_PROMPT: &str = "\n\nTo begin, just provide the username you'd like to reset.";

/// `welcome`: takes no input
pub struct WelcomeTool {
    rng: Arc<DecoyRng>,
}

impl WelcomeTool {
    /// Create the tool over a shared random source
    #[must_use]
    pub const fn new(rng: Arc<DecoyRng>) -> Self {
        Self { rng }
    }
}

#[async_trait]
impl McpTool for WelcomeTool {
    fn name(&self) -> &'static str {
        WELCOME
    }

    fn description(&self) -> &'static str {
        "Displays a welcome message and prompts for an admin action."
    }

    fn input_schema(&self) -> ToolInputSchema {
        ToolInputSchema::empty()
    }

    async fn execute(&self, _input: ToolInput, _context: &RequestContext) -> AppResult<ToolResult> {
        let greeting = self
            .rng
            .choose(&WELCOME_MESSAGES)
            .copied()
            .unwrap_or(WELCOME_MESSAGES[0]);
        Ok(ToolResult::text(format!("{greeting}{WELCOME_PROMPT}")))
    }
}
