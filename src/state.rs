// devops-info-service - Application state

use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::system_info::{HostProbe, SysinfoProbe};
use crate::uptime::{Clock, SystemClock, Uptime};

// ── AppState ────────────────────────────────────────────────────────────────
/// Central application state. Clone-friendly; everything behind `Arc`.
///
/// Nothing here is mutated after construction: `start_time` is fixed when
/// the state is built and handlers only read through `clock` and `host`.
#[derive(Clone)]
pub struct AppState {
    pub start_time: DateTime<Utc>,
    pub clock: Arc<dyn Clock>,
    pub host: Arc<dyn HostProbe>,
}

impl AppState {
    /// State for a real process: wall clock, live host queries, start time
    /// taken now.
    pub fn new() -> Self {
        let clock: Arc<dyn Clock> = Arc::new(SystemClock);
        let start_time = clock.now();
        tracing::debug!(%start_time, "AppState initialised");
        Self {
            start_time,
            clock,
            host: Arc::new(SysinfoProbe),
        }
    }

    /// Explicit parts, mostly for tests with pinned time or a fake host.
    pub fn with_parts(
        start_time: DateTime<Utc>,
        clock: Arc<dyn Clock>,
        host: Arc<dyn HostProbe>,
    ) -> Self {
        Self {
            start_time,
            clock,
            host,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    pub fn uptime_at(&self, now: DateTime<Utc>) -> Uptime {
        Uptime::between(self.start_time, now)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
