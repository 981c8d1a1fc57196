// ABOUTME: Re-exports the unified error types from decoy-core
// ABOUTME: Keeps crate::errors paths stable for the server modules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! The error types live in `decoy-core`; this module re-exports them so the
//! server crate can keep using `crate::errors::*`.

pub use decoy_core::errors::{AppError, AppResult, ErrorCode, ToolError};
