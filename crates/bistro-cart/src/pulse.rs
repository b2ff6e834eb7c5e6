//! Count badge "bump" animation timing.

use std::time::{Duration, Instant};

/// Default length of one bump.
pub const DEFAULT_PULSE: Duration = Duration::from_millis(300);

/// Transient pulse on the cart count indicator.
///
/// Rapid bumps coalesce: each one pushes the single deadline out instead
/// of scheduling another timer.
#[derive(Debug, Clone, Copy)]
pub struct CountPulse {
    duration: Duration,
    active_until: Option<Instant>,
}

impl CountPulse {
    pub fn new(duration: Duration) -> Self {
        Self {
            duration,
            active_until: None,
        }
    }

    /// Start or extend the pulse.
    pub fn bump(&mut self, now: Instant) {
        self.active_until = now.checked_add(self.duration);
    }

    pub fn is_active(&self, now: Instant) -> bool {
        self.active_until.is_some_and(|until| now < until)
    }
}

impl Default for CountPulse {
    fn default() -> Self {
        Self::new(DEFAULT_PULSE)
    }
}
