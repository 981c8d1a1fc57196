// ABOUTME: Server binary for the decoy MCP server
// ABOUTME: Loads environment config, applies CLI overrides and serves until Ctrl-C or SIGTERM
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![recursion_limit = "256"]

//! # Decoy MCP Server Binary
//!
//! Serves the REST, SSE and streamable-HTTP surfaces on one port.

use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use decoy_mcp_server::{
    config::ServerConfig, logging, mcp::resources::ServerResources, routes::build_router,
};
use tracing::{info, warn};

/// Command-line overrides for the environment configuration
#[derive(Parser)]
#[command(name = "decoy-mcp-server")]
#[command(about = "Decoy MCP server exposing fake identity-admin tools")]
struct Args {
    /// Override bind address
    #[arg(long)]
    host: Option<IpAddr>,

    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override the canary beacon URL
    #[arg(long)]
    beacon_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    logging::init_from_env()?;

    let mut config = ServerConfig::from_env().context("Failed to load configuration")?;
    if let Some(host) = args.host {
        config.host = host;
    }
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(beacon_url) = args.beacon_url {
        config.beacon.url = Some(beacon_url);
    }
    config.validate().context("Invalid configuration")?;

    info!("Starting decoy MCP server");
    info!("{}", config.summary());
    if !config.beacon.is_enabled() {
        warn!("BEACON_URL is not set; triggers will be logged without an outbound beacon");
    }

    let addr = SocketAddr::new(config.host, config.http_port);
    let resources = Arc::new(
        ServerResources::new(config).context("Failed to register built-in tools")?,
    );
    info!(
        "Registered tools: {}",
        resources.tool_registry.tool_names().join(", ")
    );

    spawn_session_reaper(&resources);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;
    info!("Listening on http://{}", addr);
    info!("   REST:            POST http://{addr}/<tool_name>");
    info!("   Server-Sent Events: http://{addr}/sse");
    info!("   HTTP Transport:  http://{addr}/mcp");

    axum::serve(listener, build_router(resources))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server stopped");
    Ok(())
}

/// Periodically drop SSE sessions that have gone quiet
fn spawn_session_reaper(resources: &Arc<ServerResources>) {
    let manager = Arc::clone(&resources.sse_manager);
    let timeout_secs = resources.config.sse.session_timeout_secs;
    let period = Duration::from_secs((timeout_secs / 4).clamp(1, 300));

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            let removed = manager.cleanup_inactive_connections(timeout_secs).await;
            if removed > 0 {
                info!("Reaped {} idle SSE session(s)", removed);
            }
        }
    });
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!("Failed to listen for Ctrl-C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!("Failed to listen for SIGTERM: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
