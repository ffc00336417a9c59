use std::time::Duration;

/// A cancellable deferred task measured against the frame clock.
///
/// Arming while a deadline is pending replaces it. The owner polls with [`Debounce::fire_if_due`]
/// at the start of every frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Debounce {
    delay: Duration,
    deadline: Option<Duration>,
}

impl Debounce {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn arm(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.delay));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Returns `true` exactly once when the pending deadline has elapsed.
    pub fn fire_if_due(&mut self, now: Duration) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/timer.rs"]
mod tests;
