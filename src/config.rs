use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::fill::state::FillSpeeds;
use crate::foundation::color::Rgba;
use crate::foundation::error::{TrailError, TrailResult};
use crate::input::motion::MotionTracker;
use crate::sim::chain::ChainParams;

/// Appearance and behaviour of a cursor trail.
///
/// Every field has a default, so `{}` is a valid configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TrailConfig {
    /// Chain length. Fixed once the trail is built.
    pub num_balls: usize,
    /// Chase responsiveness in `(0, 1)`; other values are accepted as-is.
    pub lerp_factor: f64,
    pub initial_ball_radius: f64,
    pub initial_ball_color: Rgba,
    /// When set, colours blend toward this along the chain.
    pub end_ball_color: Option<Rgba>,
    /// `[enter, exit]` easing factors for region fills.
    pub fill_animation_speeds: FillSpeeds,
    pub fill_color: Rgba,
    /// Per-frame radius decay while the pointer rests. Independent of `lerp_factor`.
    pub idle_radius_decay: f64,
    pub color_ease: Ease,
    /// Pointer displacement (CSS px) that counts as movement.
    pub move_threshold: f64,
    /// Quiet period after which the pointer is considered at rest.
    pub movement_timeout_ms: u64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        let chain = ChainParams::default();
        Self {
            num_balls: chain.num_balls,
            lerp_factor: chain.lerp_factor,
            initial_ball_radius: chain.initial_ball_radius,
            initial_ball_color: chain.initial_ball_color,
            end_ball_color: chain.end_ball_color,
            fill_animation_speeds: FillSpeeds::default(),
            fill_color: chain.initial_ball_color,
            idle_radius_decay: chain.idle_radius_decay,
            color_ease: chain.color_ease,
            move_threshold: MotionTracker::DEFAULT_THRESHOLD,
            movement_timeout_ms: MotionTracker::DEFAULT_TIMEOUT.as_millis() as u64,
        }
    }
}

impl TrailConfig {
    /// Parse a configuration from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> TrailResult<Self> {
        let cfg: Self = serde_json::from_reader(r)
            .map_err(|e| TrailError::config(format!("parse trail config JSON: {e}")))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn from_json_str(s: &str) -> TrailResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    /// Parse a configuration from a JSON file on disk.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> TrailResult<Self> {
        let f = File::open(path).map_err(|e| {
            TrailError::config(format!("open trail config '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> TrailResult<()> {
        if self.num_balls == 0 {
            return Err(TrailError::config("numBalls must be > 0"));
        }
        let finite = [
            ("lerpFactor", self.lerp_factor),
            ("initialBallRadius", self.initial_ball_radius),
            ("fillAnimationSpeeds[0]", self.fill_animation_speeds.enter),
            ("fillAnimationSpeeds[1]", self.fill_animation_speeds.exit),
            ("idleRadiusDecay", self.idle_radius_decay),
            ("moveThreshold", self.move_threshold),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(TrailError::config(format!("{name} must be finite")));
            }
        }
        if self.initial_ball_radius < 0.0 {
            return Err(TrailError::config("initialBallRadius must be >= 0"));
        }
        if self.move_threshold < 0.0 {
            return Err(TrailError::config("moveThreshold must be >= 0"));
        }
        Ok(())
    }

    pub fn chain_params(&self) -> ChainParams {
        ChainParams {
            num_balls: self.num_balls,
            lerp_factor: self.lerp_factor,
            initial_ball_radius: self.initial_ball_radius,
            initial_ball_color: self.initial_ball_color,
            end_ball_color: self.end_ball_color,
            idle_radius_decay: self.idle_radius_decay,
            color_ease: self.color_ease,
        }
    }

    pub fn motion_tracker(&self) -> MotionTracker {
        MotionTracker::new(
            self.move_threshold,
            Duration::from_millis(self.movement_timeout_ms),
        )
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
