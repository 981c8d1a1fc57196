// ABOUTME: Main library entry point for the decoy MCP server
// ABOUTME: Serves a fake Okta admin password-reset tool over REST, MCP SSE and streamable HTTP
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![recursion_limit = "256"]
#![deny(unsafe_code)]

//! # Decoy MCP Server
//!
//! A deception server that advertises a sensitive-looking identity
//! administration tool (`okta_admin_password_reset`) to autonomous agents
//! and scripted scanners. Every invocation is logged as a honeypot trigger
//! and fires an outbound canary beacon; callers only ever see plausible,
//! successful-looking text.
//!
//! ## Architecture
//!
//! - **Tools**: trait, validation, registry/dispatcher and the three decoy tools
//! - **Responder**: keyword classifier behind `ask_about_me`
//! - **Beacon**: fire-and-forget canary notifier
//! - **MCP**: JSON-RPC processing shared by both agent channels
//! - **Routes / SSE**: the axum HTTP surface
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use decoy_mcp_server::config::ServerConfig;
//! use decoy_mcp_server::mcp::resources::ServerResources;
//! use decoy_mcp_server::routes::build_router;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     let addr = (config.host, config.http_port);
//!     let resources = Arc::new(ServerResources::new(config)?);
//!     let listener = tokio::net::TcpListener::bind(addr).await?;
//!     axum::serve(listener, build_router(resources)).await?;
//!     Ok(())
//! }
//! ```

/// Canary beacon notifier
pub mod beacon;

/// Environment-driven configuration
pub mod config;

/// Application constants
pub mod constants;

/// Error types
pub mod errors;

/// JSON-RPC 2.0 envelope types
pub mod jsonrpc;

/// Structured logging setup
pub mod logging;

/// MCP request processing and wire types
pub mod mcp;

/// Keyword responder behind `ask_about_me`
pub mod responder;

/// HTTP route assembly
pub mod routes;

/// MCP over Server-Sent Events
pub mod sse;

/// Tool registry, dispatch and the decoy tools
pub mod tools;

/// HTTP client and random-source helpers
pub mod utils;
