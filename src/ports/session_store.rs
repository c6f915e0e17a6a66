//! Session Store Port - ownership of live assessment sessions.
//!
//! The store maps session ids to shared, individually-locked session
//! records. Lookups hand back a [`SessionHandle`]; a handler locks the
//! handle for the whole turn (including the generator await), which
//! strictly orders concurrent requests against the same id.
//!
//! Time is always passed in explicitly so expiry is deterministic in tests.

use std::sync::Arc;

use tokio::sync::Mutex;

use crate::domain::assessment::Session;
use crate::domain::foundation::{SessionId, Timestamp};

/// Shared handle to one session record.
///
/// Cloning is cheap; the inner mutex is the per-session serialization
/// primitive. A handle stays valid after the store evicts the record, but
/// mutations through it are then lost with the record.
pub type SessionHandle = Arc<Mutex<Session>>;

/// Port for the in-memory session map.
///
/// Operations do not fail: the only "error" shape is `get` returning `None`,
/// which is a normal outcome callers branch on, not an exception.
pub trait SessionStore: Send + Sync {
    /// Allocates a fresh session active as of `now` and returns its id.
    ///
    /// The id never collides with a live one.
    fn create(&self, now: Timestamp) -> SessionId;

    /// Looks up a session by exact id. `None` covers never-existed, closed,
    /// and expired alike.
    fn get(&self, id: &SessionId) -> Option<SessionHandle>;

    /// Removes a session. Idempotent; returns whether a record was removed.
    fn remove(&self, id: &SessionId) -> bool;

    /// Evicts every session idle strictly longer than the idle threshold as
    /// of `now`, logging one line per eviction. Returns the eviction count
    /// (consumed only by logs and tests).
    fn sweep(&self, now: Timestamp) -> usize;

    /// Number of live sessions.
    fn len(&self) -> usize;

    /// Whether the store holds no sessions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
