use std::time::Duration;

use crate::foundation::core::Point;
use crate::foundation::math::distance_squared;
use crate::foundation::timer::Debounce;

/// Snapshot of a [`MotionTracker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementState {
    /// Last position at which motion was confirmed.
    pub last_position: Point,
    pub is_moving: bool,
    /// Squared displacement measured on the most recent update.
    pub velocity_squared: f64,
}

/// Debounced "is the pointer moving" detector.
///
/// A displacement strictly larger than the threshold marks the pointer as moving and re-arms a
/// quiet-period reset. Sub-threshold jitter is ignored entirely so radius easing does not flicker.
#[derive(Clone, Debug)]
pub struct MotionTracker {
    last_position: Point,
    is_moving: bool,
    velocity_squared: f64,
    threshold_squared: f64,
    reset: Debounce,
}

impl MotionTracker {
    pub const DEFAULT_THRESHOLD: f64 = 0.1;
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(100);

    pub fn new(threshold: f64, timeout: Duration) -> Self {
        Self {
            last_position: Point::ORIGIN,
            is_moving: false,
            velocity_squared: 0.0,
            threshold_squared: threshold * threshold,
            reset: Debounce::new(timeout),
        }
    }

    pub fn is_moving(&self) -> bool {
        self.is_moving
    }

    pub fn state(&self) -> MovementState {
        MovementState {
            last_position: self.last_position,
            is_moving: self.is_moving,
            velocity_squared: self.velocity_squared,
        }
    }

    pub fn has_pending_reset(&self) -> bool {
        self.reset.is_pending()
    }

    /// Feed the current cursor position for the frame presented at `now`.
    pub fn update(&mut self, cursor: Point, now: Duration) -> bool {
        if self.reset.fire_if_due(now) && self.is_moving {
            self.is_moving = false;
            tracing::debug!("pointer came to rest");
        }

        let d2 = distance_squared(cursor, self.last_position);
        self.velocity_squared = d2;
        if d2 > self.threshold_squared {
            if !self.is_moving {
                tracing::debug!(x = cursor.x, y = cursor.y, "pointer started moving");
            }
            self.is_moving = true;
            self.last_position = cursor;
            self.reset.arm(now);
        }
        self.is_moving
    }

    /// Drop any pending reset so nothing fires after the owner is gone.
    pub fn cancel(&mut self) {
        self.reset.cancel();
    }
}

impl Default for MotionTracker {
    fn default() -> Self {
        Self::new(Self::DEFAULT_THRESHOLD, Self::DEFAULT_TIMEOUT)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/motion.rs"]
mod tests;
