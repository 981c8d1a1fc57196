// ABOUTME: SSE session table mapping session ids to the broadcast channel of their open stream
// ABOUTME: Registers, feeds, expires and unregisters MCP-over-SSE sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::{collections::HashMap, sync::Arc};

use tokio::sync::{broadcast, RwLock};
use tracing::{debug, info};
use uuid::Uuid;

use crate::errors::{AppError, AppResult};

/// SSE connection metadata
#[derive(Debug, Clone)]
pub struct ConnectionMetadata {
    /// Last time a message was pushed into the stream
    pub last_activity: chrono::DateTime<chrono::Utc>,
}

struct SessionEntry {
    sender: broadcast::Sender<String>,
    metadata: ConnectionMetadata,
}

/// Session table for the SSE channel
#[derive(Clone)]
pub struct SseManager {
    sessions: Arc<RwLock<HashMap<String, SessionEntry>>>,
    buffer_size: usize,
}

impl SseManager {
    /// Create an empty manager whose per-session channels hold `buffer_size` messages
    #[must_use]
    pub fn new(buffer_size: usize) -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
            buffer_size: buffer_size.max(1),
        }
    }

    /// Open a new session with a fresh random id
    pub async fn register_session(&self) -> (String, broadcast::Receiver<String>) {
        let session_id = Uuid::new_v4().to_string();
        let (sender, receiver) = broadcast::channel(self.buffer_size);

        {
            let mut sessions = self.sessions.write().await;
            sessions.insert(
                session_id.clone(),
                SessionEntry {
                    sender,
                    metadata: ConnectionMetadata {
                        last_activity: chrono::Utc::now(),
                    },
                },
            );
        }

        info!("Registered SSE session: {}", session_id);
        (session_id, receiver)
    }

    /// Push a serialized message onto a session's stream
    ///
    /// # Errors
    ///
    /// Returns a not-found error if the session is unknown or its stream has closed
    pub async fn send_message(&self, session_id: &str, message: String) -> AppResult<()> {
        let mut sessions = self.sessions.write().await;
        let Some(entry) = sessions.get_mut(session_id) else {
            return Err(AppError::not_found(format!("SSE session {session_id}")));
        };

        entry.metadata.last_activity = chrono::Utc::now();
        entry
            .sender
            .send(message)
            .map(|receivers| debug!("SSE message delivered to {} receiver(s)", receivers))
            .map_err(|_| AppError::not_found(format!("SSE stream for session {session_id}")))
    }

    /// Whether a session is currently open
    pub async fn contains(&self, session_id: &str) -> bool {
        self.sessions.read().await.contains_key(session_id)
    }

    /// Close a session; unknown ids are ignored
    pub async fn unregister_session(&self, session_id: &str) {
        let removed = self.sessions.write().await.remove(session_id);
        if removed.is_some() {
            info!("Unregistered SSE session: {}", session_id);
        }
    }

    /// Number of open sessions
    pub async fn active_sessions(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Metadata for one session
    pub async fn metadata(&self, session_id: &str) -> Option<ConnectionMetadata> {
        self.sessions
            .read()
            .await
            .get(session_id)
            .map(|entry| entry.metadata.clone())
    }

    /// Drop sessions with no activity for `timeout_seconds`; returns how many were removed
    pub async fn cleanup_inactive_connections(&self, timeout_seconds: u64) -> usize {
        let timeout_seconds = i64::try_from(timeout_seconds).unwrap_or(i64::MAX);
        let cutoff = chrono::Utc::now() - chrono::Duration::seconds(timeout_seconds);

        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|session_id, entry| {
            let keep = entry.metadata.last_activity >= cutoff;
            if !keep {
                info!("Cleaned up inactive SSE session: {}", session_id);
            }
            keep
        });
        before - sessions.len()
    }
}
