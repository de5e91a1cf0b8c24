// devops-info-service - Uptime bookkeeping

use chrono::{DateTime, Utc};

/// Source of the current wall-clock time. Handlers read time through this
/// so tests can pin it.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Elapsed time since process start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Uptime {
    pub seconds: u64,
    pub human: String,
}

impl Uptime {
    /// Whole seconds between `start` and `now`. A clock that went backwards
    /// reports zero.
    pub fn between(start: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let seconds = (now - start).num_seconds().max(0) as u64;
        Self {
            seconds,
            human: humanize(seconds),
        }
    }
}

/// `"{h} hours, {m} minutes"`, singular when a count is exactly one.
pub fn humanize(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    format!(
        "{} {}, {} {}",
        hours,
        plural(hours, "hour"),
        minutes,
        plural(minutes, "minute")
    )
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        unit.to_string()
    } else {
        format!("{}s", unit)
    }
}
