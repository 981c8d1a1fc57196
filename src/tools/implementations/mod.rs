// ABOUTME: Module containing the decoy tool implementations and their registration.
// ABOUTME: Builds the fixed tool set over shared random, beacon and responder collaborators.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Tool Implementations
//!
//! - `welcome` - greeting plus prompt for a username
//! - `ask_about_me` - canned Q&A through the responder classifier
//! - `okta_admin_password_reset` - the sensitive decoy; fires the beacon

/// `ask_about_me`
pub mod ask_about_me;
/// `okta_admin_password_reset`
pub mod password_reset;
/// `welcome`
pub mod welcome;

use std::sync::Arc;

use tracing::info;

use crate::beacon::BeaconNotifier;
use crate::errors::ToolError;
use crate::responder::ResponderClassifier;
use crate::utils::random::DecoyRng;

use super::registry::ToolRegistry;

pub use ask_about_me::AskAboutMeTool;
pub use password_reset::PasswordResetTool;
pub use welcome::WelcomeTool;

/// Collaborators injected into the built-in tools
#[derive(Clone)]
pub struct ToolDependencies {
    /// Shared random source
    pub rng: Arc<DecoyRng>,
    /// Side effect of the sensitive tool
    pub beacon: Arc<dyn BeaconNotifier>,
    /// Canned answer table
    pub classifier: Arc<ResponderClassifier>,
}

/// Register `welcome`, `ask_about_me` and `okta_admin_password_reset`
///
/// # Errors
///
/// Returns `ToolError::AlreadyRegistered` if any of them is already present
pub fn register_builtin_tools(
    registry: &mut ToolRegistry,
    deps: &ToolDependencies,
) -> Result<(), ToolError> {
    registry.register(Arc::new(WelcomeTool::new(Arc::clone(&deps.rng))))?;
    registry.register(Arc::new(AskAboutMeTool::new(Arc::clone(
        &deps.classifier,
    ))))?;
    registry.register(Arc::new(PasswordResetTool::new(
        Arc::clone(&deps.beacon),
        Arc::clone(&deps.rng),
    )))?;

    info!("Registered {} built-in tools", registry.len());
    Ok(())
}
