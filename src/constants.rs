// ABOUTME: Re-exports application constants from decoy-core
// ABOUTME: Protocol codes, tool identifiers and fixed response text
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Constants are defined in `decoy-core` and re-exported here.

pub use decoy_core::constants::{log_targets, messages, protocol, service_names, tools};
