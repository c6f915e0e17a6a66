//! Background eviction of idle sessions.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::debug;

use crate::domain::foundation::Timestamp;
use crate::ports::SessionStore;

/// How often the sweep runs. Matches the idle threshold: a session is gone
/// at most one period after it crosses the threshold.
pub const SWEEP_INTERVAL: Duration = Duration::from_secs(1800);

/// Spawns the sweep task for the lifetime of the process.
///
/// Nothing external triggers a sweep and nothing consumes its result; its
/// only effect is eviction plus the log lines the store emits.
pub fn spawn_sweeper(store: Arc<dyn SessionStore>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(SWEEP_INTERVAL);
        // The first tick completes immediately; skip it so the first real
        // sweep happens one full period after startup.
        ticker.tick().await;

        loop {
            ticker.tick().await;
            let evicted = store.sweep(Timestamp::now());
            debug!(evicted, "session sweep finished");
        }
    })
}
