// ABOUTME: Shared HTTP client utilities with bounded timeout configuration
// ABOUTME: Builds the outbound client used by the canary beacon
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::time::Duration;

use reqwest::{redirect::Policy, Client, ClientBuilder};

/// Create a new HTTP client with millisecond timeouts.
///
/// The connect timeout is capped at the request timeout. Falls back to a
/// default client if the builder fails.
#[must_use]
pub fn create_client_with_timeout_ms(timeout_ms: u64, connect_timeout_ms: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_millis(timeout_ms))
        .connect_timeout(Duration::from_millis(connect_timeout_ms.min(timeout_ms)))
        .user_agent(concat!("decoy-mcp-server/", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|_| Client::new())
}

/// Client for fire-and-forget beacon requests: no redirects followed
#[must_use]
pub fn beacon_client(timeout_ms: u64) -> Client {
    ClientBuilder::new()
        .timeout(Duration::from_millis(timeout_ms))
        .connect_timeout(Duration::from_millis(timeout_ms))
        .redirect(Policy::none())
        .build()
        .unwrap_or_else(|_| create_client_with_timeout_ms(timeout_ms, timeout_ms))
}
