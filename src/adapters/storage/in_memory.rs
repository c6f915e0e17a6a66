//! In-memory session store.
//!
//! The process-lifetime map behind the SessionStore port. Nothing survives a
//! restart; that is the design, not a limitation to fix.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use tracing::info;

use crate::domain::assessment::{Session, IDLE_TIMEOUT_SECS};
use crate::domain::foundation::{SessionId, Timestamp};
use crate::ports::{SessionHandle, SessionStore};

/// Process-local session map.
///
/// The outer mutex only guards map membership and is never held across an
/// await; per-session ordering comes from the async mutex inside each
/// [`SessionHandle`].
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<SessionId, SessionHandle>>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn create(&self, now: Timestamp) -> SessionId {
        let id = SessionId::new();
        let handle = Arc::new(tokio::sync::Mutex::new(Session::new(id, now)));
        self.sessions.lock().unwrap().insert(id, handle);
        id
    }

    fn get(&self, id: &SessionId) -> Option<SessionHandle> {
        self.sessions.lock().unwrap().get(id).cloned()
    }

    fn remove(&self, id: &SessionId) -> bool {
        self.sessions.lock().unwrap().remove(id).is_some()
    }

    fn sweep(&self, now: Timestamp) -> usize {
        let mut sessions = self.sessions.lock().unwrap();
        let before = sessions.len();

        sessions.retain(|id, handle| {
            // A session whose lock is held has a request in flight, so it is
            // not idle regardless of its recorded activity.
            let Ok(session) = handle.try_lock() else {
                return true;
            };
            let expired = session.is_idle(now, IDLE_TIMEOUT_SECS);
            if expired {
                info!(session_id = %id, "evicting idle session");
            }
            !expired
        });

        before - sessions.len()
    }

    fn len(&self) -> usize {
        self.sessions.lock().unwrap().len()
    }
}
