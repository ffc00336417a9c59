use std::time::Duration;

use crate::foundation::math::lerp;

/// Gap below which a [`Smoothed`] value snaps onto its target.
pub const SNAP_EPSILON: f64 = 1e-4;

/// A scalar that chases a target by a fixed fraction every frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Smoothed {
    value: f64,
    target: f64,
    factor: f64,
}

impl Smoothed {
    pub fn new(value: f64, factor: f64) -> Self {
        Self {
            value,
            target: value,
            factor,
        }
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn set_target(&mut self, target: f64) {
        self.target = target;
    }

    pub fn is_settled(&self) -> bool {
        self.value == self.target
    }

    /// Advance one frame and return the new value.
    pub fn step(&mut self) -> f64 {
        if (self.target - self.value).abs() < SNAP_EPSILON {
            self.value = self.target;
        } else {
            self.value = lerp(self.value, self.target, self.factor);
        }
        self.value
    }
}

/// Frame counter with a smoothed frames-per-second estimate.
#[derive(Clone, Debug)]
pub struct FrameStats {
    frames: u64,
    last: Option<Duration>,
    fps: Option<Smoothed>,
}

impl FrameStats {
    const FPS_SMOOTHING: f64 = 0.1;

    pub fn new() -> Self {
        Self {
            frames: 0,
            last: None,
            fps: None,
        }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn fps(&self) -> Option<f64> {
        self.fps.map(|s| s.value())
    }

    /// Record a frame presented at `now`.
    pub fn record(&mut self, now: Duration) {
        self.frames += 1;
        let Some(last) = self.last.replace(now) else {
            return;
        };
        let delta = now.saturating_sub(last).as_secs_f64();
        if delta <= 0.0 {
            return;
        }
        let instant = 1.0 / delta;
        match self.fps.as_mut() {
            Some(fps) => {
                fps.set_target(instant);
                fps.step();
            }
            None => self.fps = Some(Smoothed::new(instant, Self::FPS_SMOOTHING)),
        }
    }
}

impl Default for FrameStats {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/smooth.rs"]
mod tests;
