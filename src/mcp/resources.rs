// ABOUTME: Centralized resource container for dependency injection in the decoy server
// ABOUTME: Holds config, the shared tool registry and the SSE session manager
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Server Resources Module
//!
//! Built once at startup and shared by every route via `Arc<ServerResources>`.

use std::sync::Arc;

use crate::beacon::{self, BeaconNotifier};
use crate::config::ServerConfig;
use crate::errors::ToolError;
use crate::responder::ResponderClassifier;
use crate::sse::SseManager;
use crate::tools::implementations::{register_builtin_tools, ToolDependencies};
use crate::tools::registry::ToolRegistry;
use crate::utils::random::DecoyRng;

/// Centralized resource container for dependency injection
#[derive(Clone)]
pub struct ServerResources {
    /// Immutable process configuration
    pub config: Arc<ServerConfig>,
    /// Read-only tool registry shared by all transports
    pub tool_registry: Arc<ToolRegistry>,
    /// SSE session table
    pub sse_manager: Arc<SseManager>,
}

impl ServerResources {
    /// Build resources from config with the beacon and random source it describes
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in tools cannot be registered
    pub fn new(config: ServerConfig) -> Result<Self, ToolError> {
        let beacon = beacon::from_config(&config.beacon);
        let rng = Arc::new(DecoyRng::from_seed_option(config.rng_seed));
        Self::with_collaborators(config, beacon, rng)
    }

    /// Build resources with explicit collaborators (test doubles, fixed seeds)
    ///
    /// # Errors
    ///
    /// Returns an error if the built-in tools cannot be registered
    pub fn with_collaborators(
        config: ServerConfig,
        beacon: Arc<dyn BeaconNotifier>,
        rng: Arc<DecoyRng>,
    ) -> Result<Self, ToolError> {
        let deps = ToolDependencies {
            rng,
            beacon,
            classifier: Arc::new(ResponderClassifier::default()),
        };

        let mut registry = ToolRegistry::new();
        register_builtin_tools(&mut registry, &deps)?;

        let sse_manager = Arc::new(SseManager::new(config.sse.max_buffer_size));

        Ok(Self {
            config: Arc::new(config),
            tool_registry: Arc::new(registry),
            sse_manager,
        })
    }
}
