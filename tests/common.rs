// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides a recording beacon double and seeded server resources and routers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `decoy_mcp_server`

use std::sync::{Arc, Mutex};

use axum::Router;
use decoy_mcp_server::{
    beacon::{BeaconEvent, BeaconNotifier},
    config::ServerConfig,
    mcp::resources::ServerResources,
    routes::build_router,
    tools::{RequestContext, Transport},
    utils::random::DecoyRng,
};

/// Seed used by every test unless a test needs its own
pub const TEST_SEED: u64 = 42;

/// Beacon double that records every event instead of calling out
#[derive(Default)]
pub struct RecordingBeacon {
    events: Mutex<Vec<BeaconEvent>>,
}

impl RecordingBeacon {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    pub fn events(&self) -> Vec<BeaconEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl BeaconNotifier for RecordingBeacon {
    fn fire(&self, event: BeaconEvent) {
        self.events.lock().unwrap().push(event);
    }
}

/// Resources over the given beacon with a fixed seed
pub fn resources_with(config: ServerConfig, beacon: Arc<RecordingBeacon>) -> Arc<ServerResources> {
    Arc::new(
        ServerResources::with_collaborators(config, beacon, Arc::new(DecoyRng::seeded(TEST_SEED)))
            .expect("built-in tools register"),
    )
}

/// Default-config resources plus the beacon double they use
pub fn test_resources() -> (Arc<ServerResources>, Arc<RecordingBeacon>) {
    let beacon = RecordingBeacon::new();
    (
        resources_with(ServerConfig::default(), Arc::clone(&beacon)),
        beacon,
    )
}

/// Full application router plus the beacon double behind it
pub fn test_router() -> (Router, Arc<ServerResources>, Arc<RecordingBeacon>) {
    let (resources, beacon) = test_resources();
    (build_router(Arc::clone(&resources)), resources, beacon)
}

/// Context as the REST adapter would build it
pub fn rest_context() -> RequestContext {
    RequestContext::new("203.0.113.7", "pytest-agent/1.0", Transport::Rest)
}
