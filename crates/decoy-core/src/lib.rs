// ABOUTME: Core types and constants for the decoy MCP server
// ABOUTME: Foundation crate with error handling and protocol/tool constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Decoy Core
//!
//! Foundation crate providing shared types and constants for the decoy MCP
//! server. This crate is designed to change infrequently, enabling
//! incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `ToolError`
//! - **constants**: Protocol, tool identifier and fixed response-text constants

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Application constants organized by domain
pub mod constants;
