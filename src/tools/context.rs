// ABOUTME: Defines RequestContext, the per-call snapshot of who is calling and how.
// ABOUTME: Built by each transport adapter from request headers and handed to every tool.
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Request Context
//!
//! Every dispatch carries a [`RequestContext`]: request id, caller address,
//! user agent, optional session id and the transport that carried the call.
//! Caller-supplied headers are recorded for logging only and never affect
//! what a tool returns.

use std::fmt;

use axum::http::{header, HeaderMap};
use uuid::Uuid;

/// Placeholder for caller attributes that were not supplied
pub const UNKNOWN: &str = "unknown";

/// Header set by the request-id middleware
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Channel a call arrived on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transport {
    /// `POST /<tool_name>`
    Rest,
    /// `GET /sse` session channel
    Sse,
    /// `POST /mcp`
    StreamableHttp,
}

impl Transport {
    /// Get a string representation for logging
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Sse => "sse",
            Self::StreamableHttp => "streamable_http",
        }
    }
}

impl fmt::Display for Transport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-call context. Never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    /// Correlation id, taken from `x-request-id` when present
    pub request_id: String,
    /// Caller address from the trusted proxy header, else `"unknown"`
    pub source_address: String,
    /// `User-Agent`, else `"unknown"`
    pub user_agent: String,
    /// Transport session id, if the channel has one
    pub session_id: Option<String>,
    /// Channel the call arrived on
    pub transport: Transport,
}

impl RequestContext {
    /// Create a context with explicit values
    #[must_use]
    pub fn new(
        source_address: impl Into<String>,
        user_agent: impl Into<String>,
        transport: Transport,
    ) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            source_address: source_address.into(),
            user_agent: user_agent.into(),
            session_id: None,
            transport,
        }
    }

    /// Build a context from request headers.
    ///
    /// Only `client_ip_header` is consulted for the caller address; there is
    /// no fallback to other forwarding headers.
    #[must_use]
    pub fn from_headers(headers: &HeaderMap, client_ip_header: &str, transport: Transport) -> Self {
        Self {
            request_id: header_value(headers, REQUEST_ID_HEADER)
                .unwrap_or_else(|| Uuid::new_v4().to_string()),
            source_address: header_value(headers, client_ip_header)
                .unwrap_or_else(|| UNKNOWN.to_owned()),
            user_agent: header_value(headers, header::USER_AGENT.as_str())
                .unwrap_or_else(|| UNKNOWN.to_owned()),
            session_id: None,
            transport,
        }
    }

    /// Attach a transport session id
    #[must_use]
    pub fn with_session_id(mut self, session_id: impl Into<String>) -> Self {
        self.session_id = Some(session_id.into());
        self
    }

    /// Session id for logging, `"none"` when absent
    #[must_use]
    pub fn session_label(&self) -> &str {
        self.session_id.as_deref().unwrap_or("none")
    }
}

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_owned)
}
