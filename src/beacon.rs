// ABOUTME: Canary beacon notifier fired by the sensitive tool
// ABOUTME: Logs a structured trigger record and sends one bounded, fire-and-forget GET
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Beacon Notifier
//!
//! [`BeaconNotifier::fire`] is synchronous and infallible from the caller's
//! point of view: the HTTP implementation spawns the outbound request on the
//! runtime and only logs its outcome. Nothing about the beacon can change
//! the response returned to the caller.

use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use reqwest::Client;
use tokio::runtime::Handle;
use tracing::{debug, warn};

use crate::config::BeaconConfig;
use crate::constants::log_targets::TRIGGER;
use crate::tools::context::RequestContext;
use crate::utils::http_client::beacon_client;

/// One invocation of the sensitive tool. Consumed by one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeaconEvent {
    /// Identity the caller asked to reset
    pub target_identity: String,
    /// Snapshot of the caller context
    pub context: RequestContext,
    /// When the tool was invoked
    pub timestamp: DateTime<Utc>,
}

impl BeaconEvent {
    /// Create an event stamped now
    #[must_use]
    pub fn new(target_identity: impl Into<String>, context: RequestContext) -> Self {
        Self {
            target_identity: target_identity.into(),
            context,
            timestamp: Utc::now(),
        }
    }
}

/// Side effect of the sensitive tool
pub trait BeaconNotifier: Send + Sync {
    /// Record the event and notify out of band. Must not block or fail.
    fn fire(&self, event: BeaconEvent);
}

/// Emit the operator-facing trigger record
pub fn log_trigger(event: &BeaconEvent) {
    warn!(
        target: TRIGGER,
        target_identity = %event.target_identity,
        source_address = %event.context.source_address,
        user_agent = %event.context.user_agent,
        transport = %event.context.transport,
        session_id = %event.context.session_label(),
        request_id = %event.context.request_id,
        timestamp = %event.timestamp.to_rfc3339(),
        "Honeypot triggered: admin password reset requested"
    );
}

/// Beacon that issues a GET to the configured canary URL
#[derive(Debug, Clone)]
pub struct HttpBeacon {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpBeacon {
    /// Create a beacon for `url` bounded by `timeout_ms`
    #[must_use]
    pub fn new(url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            client: beacon_client(timeout_ms),
            url: url.into(),
            timeout: Duration::from_millis(timeout_ms),
        }
    }

    async fn send(client: Client, url: String, timeout: Duration, request_id: String) {
        match tokio::time::timeout(timeout, client.get(&url).send()).await {
            Ok(Ok(response)) => {
                debug!(
                    request_id = %request_id,
                    status = response.status().as_u16(),
                    "Beacon delivered"
                );
            }
            Ok(Err(e)) => {
                warn!(request_id = %request_id, "Beacon request failed: {}", e);
            }
            Err(_) => {
                warn!(
                    request_id = %request_id,
                    timeout_ms = timeout.as_millis() as u64,
                    "Beacon request timed out"
                );
            }
        }
    }
}

impl BeaconNotifier for HttpBeacon {
    fn fire(&self, event: BeaconEvent) {
        log_trigger(&event);

        let Ok(handle) = Handle::try_current() else {
            warn!(
                request_id = %event.context.request_id,
                "No runtime available, beacon not sent"
            );
            return;
        };

        handle.spawn(Self::send(
            self.client.clone(),
            self.url.clone(),
            self.timeout,
            event.context.request_id,
        ));
    }
}

/// Beacon used when no URL is configured; only logs the trigger
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledBeacon;

impl BeaconNotifier for DisabledBeacon {
    fn fire(&self, event: BeaconEvent) {
        log_trigger(&event);
        debug!(
            request_id = %event.context.request_id,
            "Beacon disabled, no outbound request"
        );
    }
}

/// Build the notifier described by `config`
#[must_use]
pub fn from_config(config: &BeaconConfig) -> Arc<dyn BeaconNotifier> {
    match &config.url {
        Some(url) => Arc::new(HttpBeacon::new(url.clone(), config.timeout_ms)),
        None => Arc::new(DisabledBeacon),
    }
}
