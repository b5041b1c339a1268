use std::time::{Duration, Instant};

/// Shortest time a loading screen stays up. Earlier results are parked.
pub const MIN_LOADING_DURATION: Duration = Duration::from_millis(500);

/// Bookkeeping for the loading state currently in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadGate {
    pub ticket: u64,
    pub started: Instant,
    /// `true` when the screen being reloaded stays visible underneath.
    pub refreshing: bool,
}

impl LoadGate {
    pub fn new(ticket: u64, started: Instant, refreshing: bool) -> Self {
        Self {
            ticket,
            started,
            refreshing,
        }
    }

    /// Time left before a result may be shown, or `None` if it can go now.
    pub fn hold_for(&self, now: Instant) -> Option<Duration> {
        remaining(self.started, now, MIN_LOADING_DURATION)
    }
}

pub fn remaining(started: Instant, now: Instant, threshold: Duration) -> Option<Duration> {
    let elapsed = now.saturating_duration_since(started);
    (elapsed < threshold).then(|| threshold - elapsed)
}

/// At most one buffered result, tagged with the load ticket it belongs to.
#[derive(Debug, Clone)]
pub struct Pending<T> {
    slot: Option<(u64, T)>,
}

impl<T> Default for Pending<T> {
    fn default() -> Self {
        Self { slot: None }
    }
}

impl<T> Pending<T> {
    /// Parks a result, replacing anything parked before.
    pub fn park(&mut self, ticket: u64, value: T) {
        self.slot = Some((ticket, value));
    }

    /// Releases the parked result only if it was produced for `ticket`.
    pub fn take(&mut self, ticket: u64) -> Option<T> {
        match self.slot.take() {
            Some((t, value)) if t == ticket => Some(value),
            other => {
                self.slot = other;
                None
            }
        }
    }

    pub fn clear(&mut self) {
        self.slot = None;
    }

    pub fn is_parked(&self) -> bool {
        self.slot.is_some()
    }
}
