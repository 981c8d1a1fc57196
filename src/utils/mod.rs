// ABOUTME: Utility modules for common functionality across the application
// ABOUTME: Contains the shared HTTP client builder and the injectable random source
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// HTTP client configuration and helpers
pub mod http_client;
/// Seedable random source and reference id generation
pub mod random;
