use crate::clock::until_midnight;
use chrono::NaiveDateTime;
use std::time::Duration;

/// Default tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 1_000;

/// Get tick duration
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// One-shot timer for the next local midnight, re-armed after every fire.
///
/// Driven by polling with the current time so a suspended process that wakes
/// up days later fires exactly once and re-arms for the coming midnight.
#[derive(Debug, Clone, Default)]
pub struct MidnightTimer {
    deadline: Option<NaiveDateTime>,
}

impl MidnightTimer {
    /// Timer armed for the midnight after `now`
    pub fn armed(now: NaiveDateTime) -> Self {
        let mut timer = Self::default();
        timer.arm(now);
        timer
    }

    /// Arm for the midnight after `now`, replacing any pending deadline
    pub fn arm(&mut self, now: NaiveDateTime) {
        let deadline = now + until_midnight(now);
        tracing::debug!(%deadline, "midnight timer armed");
        self.deadline = Some(deadline);
    }

    /// Disarm, e.g. when the host goes away
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn deadline(&self) -> Option<NaiveDateTime> {
        self.deadline
    }

    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Returns true once when the deadline has passed, then re-arms
    pub fn poll(&mut self, now: NaiveDateTime) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.arm(now);
                true
            }
            _ => false,
        }
    }

    /// How long a loop may sleep before the next poll is due
    pub fn sleep_for(&self, now: NaiveDateTime) -> Duration {
        let tick = tick_duration();
        match self.deadline {
            Some(deadline) => (deadline - now).to_std().map_or(Duration::ZERO, |left| left.min(tick)),
            None => tick,
        }
    }
}
