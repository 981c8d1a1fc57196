// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Parses environment variables into a typed, immutable ServerConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management for production deployment

use std::env;
use std::fmt;
use std::net::IpAddr;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::constants::protocol::DEFAULT_MCP_PROTOCOL_VERSION;

/// Default bind address
pub const DEFAULT_HOST: &str = "0.0.0.0";
/// Default listen port
pub const DEFAULT_HTTP_PORT: u16 = 8787;
/// Default bound on a beacon request
pub const DEFAULT_BEACON_TIMEOUT_MS: u64 = 3000;
/// Default header trusted for the caller address
pub const DEFAULT_CLIENT_IP_HEADER: &str = "cf-connecting-ip";
/// Default advertised MCP server name
pub const DEFAULT_MCP_SERVER_NAME: &str = "okta-admin-tools";
/// Default advertised MCP server version
pub const DEFAULT_MCP_SERVER_VERSION: &str = "1.0.0";
/// Default per-session SSE channel capacity
pub const DEFAULT_SSE_MAX_BUFFER_SIZE: usize = 100;
/// Default SSE keep-alive interval
pub const DEFAULT_SSE_KEEPALIVE_SECS: u64 = 15;
/// Default idle timeout before an SSE session is reaped
pub const DEFAULT_SSE_SESSION_TIMEOUT_SECS: u64 = 1800;

/// Environment type for logging and other configurations
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Deployed decoy
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// Canary beacon configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BeaconConfig {
    /// Tracking URL; `None` disables the outbound call
    pub url: Option<String>,
    /// Bound on a single beacon request in milliseconds
    pub timeout_ms: u64,
}

impl BeaconConfig {
    /// Whether an outbound call will be made
    #[must_use]
    pub const fn is_enabled(&self) -> bool {
        self.url.is_some()
    }
}

/// Identity advertised to MCP clients
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct McpConfig {
    /// `serverInfo.name`
    pub server_name: String,
    /// `serverInfo.version`
    pub server_version: String,
    /// Protocol version returned from `initialize`
    pub protocol_version: String,
}

/// SSE session channel configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseConfig {
    /// Per-session broadcast capacity
    pub max_buffer_size: usize,
    /// Keep-alive comment interval
    pub keepalive_secs: u64,
    /// Idle sessions older than this are reaped
    pub session_timeout_secs: u64,
}

/// Complete server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address
    pub host: IpAddr,
    /// Listen port
    pub http_port: u16,
    /// Deployment environment label
    pub environment: Environment,
    /// Header trusted to carry the caller address
    pub client_ip_header: String,
    /// Canary beacon settings
    pub beacon: BeaconConfig,
    /// MCP identity
    pub mcp: McpConfig,
    /// SSE sessions
    pub sse: SseConfig,
    /// Fixed seed for the random source; `None` seeds from entropy
    pub rng_seed: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            http_port: DEFAULT_HTTP_PORT,
            environment: Environment::Development,
            client_ip_header: DEFAULT_CLIENT_IP_HEADER.to_owned(),
            beacon: BeaconConfig {
                url: None,
                timeout_ms: DEFAULT_BEACON_TIMEOUT_MS,
            },
            mcp: McpConfig {
                server_name: DEFAULT_MCP_SERVER_NAME.to_owned(),
                server_version: DEFAULT_MCP_SERVER_VERSION.to_owned(),
                protocol_version: DEFAULT_MCP_PROTOCOL_VERSION.to_owned(),
            },
            sse: SseConfig {
                max_buffer_size: DEFAULT_SSE_MAX_BUFFER_SIZE,
                keepalive_secs: DEFAULT_SSE_KEEPALIVE_SECS,
                session_timeout_secs: DEFAULT_SSE_SESSION_TIMEOUT_SECS,
            },
            rng_seed: None,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric or address variable cannot be parsed
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let config = Self {
            host: env_var_or("HOST", DEFAULT_HOST)
                .parse()
                .context("Invalid HOST value")?,
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())
                .parse()
                .context("Invalid HTTP_PORT value")?,
            environment: Environment::from_str_or_default(&env_var_or(
                "ENVIRONMENT",
                "development",
            )),
            client_ip_header: env_var_or("CLIENT_IP_HEADER", DEFAULT_CLIENT_IP_HEADER)
                .to_ascii_lowercase(),
            beacon: BeaconConfig {
                url: optional_env_var("BEACON_URL"),
                timeout_ms: env_var_or(
                    "BEACON_TIMEOUT_MS",
                    &DEFAULT_BEACON_TIMEOUT_MS.to_string(),
                )
                .parse()
                .context("Invalid BEACON_TIMEOUT_MS value")?,
            },
            mcp: McpConfig {
                server_name: env_var_or("MCP_SERVER_NAME", DEFAULT_MCP_SERVER_NAME),
                server_version: env_var_or("MCP_SERVER_VERSION", DEFAULT_MCP_SERVER_VERSION),
                protocol_version: env_var_or(
                    "MCP_PROTOCOL_VERSION",
                    DEFAULT_MCP_PROTOCOL_VERSION,
                ),
            },
            sse: SseConfig {
                max_buffer_size: env_var_or(
                    "SSE_MAX_BUFFER_SIZE",
                    &DEFAULT_SSE_MAX_BUFFER_SIZE.to_string(),
                )
                .parse()
                .context("Invalid SSE_MAX_BUFFER_SIZE value")?,
                keepalive_secs: env_var_or(
                    "SSE_KEEPALIVE_SECS",
                    &DEFAULT_SSE_KEEPALIVE_SECS.to_string(),
                )
                .parse()
                .context("Invalid SSE_KEEPALIVE_SECS value")?,
                session_timeout_secs: env_var_or(
                    "SSE_SESSION_TIMEOUT_SECS",
                    &DEFAULT_SSE_SESSION_TIMEOUT_SECS.to_string(),
                )
                .parse()
                .context("Invalid SSE_SESSION_TIMEOUT_SECS value")?,
            },
            rng_seed: optional_env_var("DECOY_RNG_SEED")
                .map(|seed| seed.parse())
                .transpose()
                .context("Invalid DECOY_RNG_SEED value")?,
        };

        config.validate()?;
        info!("Configuration loaded successfully");
        Ok(config)
    }

    /// Reject values that would make the server unusable
    ///
    /// # Errors
    ///
    /// Returns an error if the SSE buffer is empty or the beacon URL is not http(s)
    pub fn validate(&self) -> Result<()> {
        if self.sse.max_buffer_size == 0 {
            anyhow::bail!("SSE_MAX_BUFFER_SIZE must be greater than zero");
        }
        if let Some(url) = &self.beacon.url {
            if !(url.starts_with("http://") || url.starts_with("https://")) {
                anyhow::bail!("BEACON_URL must be an http(s) URL");
            }
        }
        Ok(())
    }

    /// Human-readable summary for startup logs. The beacon URL is never printed.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Decoy MCP Server Configuration:\n\
             - Bind: {}:{}\n\
             - Environment: {}\n\
             - Client IP Header: {}\n\
             - Beacon: {}\n\
             - MCP Identity: {} {} (protocol {})\n\
             - SSE: buffer={} keepalive={}s idle_timeout={}s\n\
             - RNG: {}",
            self.host,
            self.http_port,
            self.environment,
            self.client_ip_header,
            if self.beacon.is_enabled() {
                "Enabled"
            } else {
                "Disabled"
            },
            self.mcp.server_name,
            self.mcp.server_version,
            self.mcp.protocol_version,
            self.sse.max_buffer_size,
            self.sse.keepalive_secs,
            self.sse.session_timeout_secs,
            if self.rng_seed.is_some() {
                "Seeded"
            } else {
                "Entropy"
            },
        )
    }
}

/// Read an environment variable, falling back to `default` when unset
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Read an environment variable, treating empty values as unset
fn optional_env_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_owned())
        .filter(|value| !value.is_empty())
}
