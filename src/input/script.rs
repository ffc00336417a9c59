use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::animation::ease::Ease;
use crate::foundation::core::{CssSize, Fps, Point};
use crate::foundation::error::{TrailError, TrailResult};
use crate::foundation::math::lerp_point;
use crate::geometry::rect::TrackedRect;

/// A scripted pointer session: the canvas, the regions on it, and where the pointer goes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PointerScript {
    pub canvas: CssSize,
    #[serde(default = "one")]
    pub device_pixel_ratio: f64,
    pub fps: Fps,
    /// Session length in frames.
    pub duration: u64,
    #[serde(default)]
    pub reduced_motion: bool,
    #[serde(default)]
    pub regions: Vec<RegionDef>,
    pub pointer: PointerPath,
}

fn one() -> f64 {
    1.0
}

/// A tracked element's box, in CSS pixels.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegionDef {
    #[serde(default)]
    pub name: Option<String>,
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl RegionDef {
    pub fn bounds(&self) -> TrackedRect {
        TrackedRect::from_ltwh(self.left, self.top, self.width, self.height)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PointerKey {
    pub time_ms: f64,
    pub x: f64,
    pub y: f64,
    /// Easing of the segment that starts at this key.
    #[serde(default)]
    pub ease: Ease,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PointerPath {
    /// Piecewise path through timed waypoints. The pointer appears at the first key.
    Keyframes { keys: Vec<PointerKey> },
    /// Sinusoidal back-and-forth: `t = |sin(pi * time / period)|` from `from` to `to`.
    #[serde(rename_all = "camelCase")]
    PingPong {
        from: [f64; 2],
        to: [f64; 2],
        period_ms: f64,
    },
}

impl PointerPath {
    pub fn validate(&self) -> TrailResult<()> {
        match self {
            Self::Keyframes { keys } => {
                if keys.is_empty() {
                    return Err(TrailError::script("keyframes need at least one key"));
                }
                if keys.iter().any(|k| !k.time_ms.is_finite() || k.time_ms < 0.0) {
                    return Err(TrailError::script("key times must be finite and >= 0"));
                }
                if keys.windows(2).any(|w| w[1].time_ms < w[0].time_ms) {
                    return Err(TrailError::script("key times must be non-decreasing"));
                }
                Ok(())
            }
            Self::PingPong { period_ms, .. } => {
                if !(period_ms.is_finite() && *period_ms > 0.0) {
                    return Err(TrailError::script("ping_pong periodMs must be > 0"));
                }
                Ok(())
            }
        }
    }

    /// Pointer position at `time`, or `None` before the pointer has appeared.
    pub fn sample(&self, time: Duration) -> Option<Point> {
        let ms = time.as_secs_f64() * 1000.0;
        match self {
            Self::Keyframes { keys } => {
                let first = keys.first()?;
                if ms < first.time_ms {
                    return None;
                }
                let next = keys.partition_point(|k| k.time_ms <= ms);
                let Some(b) = keys.get(next) else {
                    let last = keys.last()?;
                    return Some(Point::new(last.x, last.y));
                };
                let a = &keys[next - 1];
                let span = b.time_ms - a.time_ms;
                let t = if span > 0.0 {
                    (ms - a.time_ms) / span
                } else {
                    1.0
                };
                Some(lerp_point(
                    Point::new(a.x, a.y),
                    Point::new(b.x, b.y),
                    a.ease.apply(t),
                ))
            }
            Self::PingPong {
                from,
                to,
                period_ms,
            } => {
                let t = (std::f64::consts::PI * ms / period_ms).sin().abs();
                Some(lerp_point(
                    Point::new(from[0], from[1]),
                    Point::new(to[0], to[1]),
                    t,
                ))
            }
        }
    }
}

impl PointerScript {
    /// Parse a pointer script from a JSON reader and validate it.
    pub fn from_reader<R: std::io::Read>(r: R) -> TrailResult<Self> {
        let script: Self = serde_json::from_reader(r)
            .map_err(|e| TrailError::script(format!("parse pointer script JSON: {e}")))?;
        script.validate()?;
        Ok(script)
    }

    pub fn from_json_str(s: &str) -> TrailResult<Self> {
        Self::from_reader(s.as_bytes())
    }

    #[tracing::instrument]
    pub fn from_path(path: &Path) -> TrailResult<Self> {
        let f = File::open(path).map_err(|e| {
            TrailError::script(format!("open pointer script '{}': {e}", path.display()))
        })?;
        Self::from_reader(BufReader::new(f))
    }

    pub fn validate(&self) -> TrailResult<()> {
        Fps::new(self.fps.num, self.fps.den)?;
        if self.duration == 0 {
            return Err(TrailError::script("duration must be > 0 frames"));
        }
        for (i, r) in self.regions.iter().enumerate() {
            if !(r.width >= 0.0 && r.height >= 0.0) {
                return Err(TrailError::script(format!(
                    "region {i} must have non-negative width and height"
                )));
            }
        }
        self.pointer.validate()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/script.rs"]
mod tests;
