// ABOUTME: HTTP handlers for the MCP-over-SSE channel: the event stream and its message inbox
// ABOUTME: Messages posted to /sse/message are processed inline and answered on the session stream
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::{collections::HashMap, convert::Infallible, sync::Arc, time::Duration};

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{
        sse::{Event, KeepAlive, Sse},
        IntoResponse, Response,
    },
    routing::{get, post},
    Router,
};
use futures_util::stream::Stream;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, info, warn};

use super::manager::SseManager;
use crate::constants::messages;
use crate::constants::protocol::{SSE_ENDPOINT_EVENT, SSE_MESSAGE_EVENT, SSE_SESSION_QUERY_PARAM};
use crate::jsonrpc::JsonRpcRequest;
use crate::mcp::mcp_request_processor::McpRequestProcessor;
use crate::mcp::resources::ServerResources;
use crate::routes::not_found;
use crate::tools::context::{RequestContext, Transport};

/// Path of the message inbox advertised in the `endpoint` event
const MESSAGE_PATH: &str = "/sse/message";

/// SSE channel routes
pub struct SseRoutes;

impl SseRoutes {
    /// `GET /sse` and `POST /sse/message`
    pub fn routes(resources: Arc<ServerResources>) -> Router {
        Router::new()
            .route("/sse", get(Self::handle_connect).fallback(not_found))
            .route(MESSAGE_PATH, post(Self::handle_message).fallback(not_found))
            .with_state(resources)
    }

    /// Open a session stream; the first event tells the client where to post
    async fn handle_connect(
        State(resources): State<Arc<ServerResources>>,
        headers: HeaderMap,
    ) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
        let context = RequestContext::from_headers(
            &headers,
            &resources.config.client_ip_header,
            Transport::Sse,
        );
        let manager = Arc::clone(&resources.sse_manager);
        let (session_id, mut receiver) = manager.register_session().await;

        info!(
            session_id = %session_id,
            source_address = %context.source_address,
            user_agent = %context.user_agent,
            "SSE session opened"
        );

        let endpoint = format!("{MESSAGE_PATH}?{SSE_SESSION_QUERY_PARAM}={session_id}");
        let guard = SessionGuard {
            manager,
            session_id,
        };

        let stream = async_stream::stream! {
            let guard = guard;
            yield Ok::<_, Infallible>(Event::default().event(SSE_ENDPOINT_EVENT).data(endpoint));

            loop {
                match receiver.recv().await {
                    Ok(message) => {
                        yield Ok(Event::default().event(SSE_MESSAGE_EVENT).data(message));
                    }
                    Err(RecvError::Lagged(skipped)) => {
                        warn!(
                            session_id = %guard.session_id,
                            "SSE buffer overflow: {} messages dropped", skipped
                        );
                    }
                    Err(RecvError::Closed) => {
                        debug!(session_id = %guard.session_id, "SSE session channel closed");
                        break;
                    }
                }
            }
        };

        let keep_alive = KeepAlive::new()
            .interval(Duration::from_secs(resources.config.sse.keepalive_secs.max(1)))
            .text("keepalive");

        Sse::new(stream).keep_alive(keep_alive)
    }

    /// Accept one JSON-RPC message for a session and answer on its stream
    async fn handle_message(
        State(resources): State<Arc<ServerResources>>,
        Query(params): Query<HashMap<String, String>>,
        headers: HeaderMap,
        body: Bytes,
    ) -> Response {
        let Some(session_id) = params.get(SSE_SESSION_QUERY_PARAM) else {
            return not_found().await;
        };
        if !resources.sse_manager.contains(session_id).await {
            debug!(session_id = %session_id, "Message for unknown SSE session");
            return not_found().await;
        }

        let Ok(request) = serde_json::from_slice::<JsonRpcRequest>(&body) else {
            return (StatusCode::BAD_REQUEST, messages::INVALID_MESSAGE).into_response();
        };

        let context = RequestContext::from_headers(
            &headers,
            &resources.config.client_ip_header,
            Transport::Sse,
        )
        .with_session_id(session_id.as_str());

        let processor = McpRequestProcessor::new(Arc::clone(&resources));
        if let Some(response) = processor.handle_request(request, &context).await {
            let payload = match serde_json::to_string(&response) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("Failed to serialize SSE response: {}", e);
                    return (StatusCode::INTERNAL_SERVER_ERROR, messages::TEMPORARILY_UNAVAILABLE)
                        .into_response();
                }
            };
            if let Err(e) = resources.sse_manager.send_message(session_id, payload).await {
                debug!(session_id = %session_id, "SSE response not delivered: {}", e);
                return not_found().await;
            }
        }

        (StatusCode::ACCEPTED, messages::ACCEPTED).into_response()
    }
}

/// Removes the session from the table when its stream is dropped
struct SessionGuard {
    manager: Arc<SseManager>,
    session_id: String,
}

impl Drop for SessionGuard {
    fn drop(&mut self) {
        let manager = Arc::clone(&self.manager);
        let session_id = std::mem::take(&mut self.session_id);
        if let Ok(handle) = tokio::runtime::Handle::try_current() {
            handle.spawn(async move {
                manager.unregister_session(&session_id).await;
            });
        }
    }
}
