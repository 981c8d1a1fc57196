// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Loads listener, beacon, MCP identity and SSE session settings from the environment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the decoy MCP server.
//!
//! Configuration is environment-only: there is no config file and the
//! resulting [`environment::ServerConfig`] is immutable once built.

/// Environment and server configuration
pub mod environment;

pub use environment::{BeaconConfig, Environment, McpConfig, ServerConfig, SseConfig};
