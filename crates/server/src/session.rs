//! Session Management
//!
//! In-memory chat sessions. Nothing is persisted: sessions live for the
//! lifetime of the process and are evicted when idle past the configured
//! timeout or when the cap is reached.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::RwLock;
use tokio::sync::watch;
use uuid::Uuid;

use vita_path_assistant::Conversation;

use crate::ServerError;

/// One chat session and its conversation transcript
pub struct Session {
    /// Session ID
    pub id: String,
    /// Conversation owned by this session
    pub conversation: Arc<Conversation>,
    /// Creation time
    pub created_at: Instant,
    /// Last activity
    last_activity: RwLock<Instant>,
}

impl Session {
    pub fn new(conversation: Arc<Conversation>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            conversation,
            created_at: Instant::now(),
            last_activity: RwLock::new(Instant::now()),
        }
    }

    /// Update last activity
    pub fn touch(&self) {
        *self.last_activity.write() = Instant::now();
    }

    /// Check if session is expired
    pub fn is_expired(&self, timeout: Duration) -> bool {
        self.last_activity.read().elapsed() > timeout
    }
}

/// Session manager
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Arc<Session>>>,
    max_sessions: usize,
    session_timeout: Duration,
    cleanup_interval: Duration,
}

impl SessionManager {
    /// Create a new session manager
    pub fn new(max_sessions: usize) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
            session_timeout: Duration::from_secs(3600),
            cleanup_interval: Duration::from_secs(300),
        }
    }

    /// Create a new session manager with custom timeout and cleanup interval
    pub fn with_config(
        max_sessions: usize,
        session_timeout: Duration,
        cleanup_interval: Duration,
    ) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            max_sessions,
            session_timeout,
            cleanup_interval,
        }
    }

    /// Register a new session. Expired sessions are evicted first when the
    /// cap is hit; if the map is still full the request is refused.
    pub fn create(&self, conversation: Arc<Conversation>) -> Result<Arc<Session>, ServerError> {
        if self.sessions.read().len() >= self.max_sessions {
            self.cleanup_expired();
            if self.sessions.read().len() >= self.max_sessions {
                return Err(ServerError::SessionLimit);
            }
        }

        let session = Arc::new(Session::new(conversation));
        self.sessions
            .write()
            .insert(session.id.clone(), session.clone());
        tracing::info!(session_id = %session.id, "Session created");
        Ok(session)
    }

    /// Get a session by ID
    pub fn get(&self, id: &str) -> Option<Arc<Session>> {
        self.sessions.read().get(id).cloned()
    }

    /// Remove a session
    pub fn remove(&self, id: &str) -> bool {
        self.sessions.write().remove(id).is_some()
    }

    /// List session IDs
    pub fn list(&self) -> Vec<String> {
        self.sessions.read().keys().cloned().collect()
    }

    /// Number of live sessions
    pub fn count(&self) -> usize {
        self.sessions.read().len()
    }

    /// Drop sessions idle past the timeout; returns how many were removed
    pub fn cleanup_expired(&self) -> usize {
        let timeout = self.session_timeout;
        let mut sessions = self.sessions.write();
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_expired(timeout));
        before - sessions.len()
    }

    /// Start a background task that periodically cleans up expired
    /// sessions. Returns a shutdown sender that stops the task.
    pub fn start_cleanup_task(self: Arc<Self>) -> watch::Sender<bool> {
        let (tx, mut rx) = watch::channel(false);
        let manager = self;

        tokio::spawn(async move {
            let mut interval = tokio::time::interval(manager.cleanup_interval);
            interval.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = interval.tick() => {
                        let removed = manager.cleanup_expired();
                        if removed > 0 {
                            tracing::debug!(removed, "Cleaned up expired sessions");
                        }
                    }
                    changed = rx.changed() => {
                        if changed.is_err() || *rx.borrow() {
                            break;
                        }
                    }
                }
            }
        });

        tx
    }
}
