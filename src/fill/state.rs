use std::collections::HashMap;

use crate::foundation::core::Point;
use crate::foundation::math::lerp;
use crate::geometry::rect::TrackedRect;
use crate::geometry::registry::RegionId;

/// Progress at or below which a fill is not drawn.
pub const VISIBLE_THRESHOLD: f64 = 0.01;

/// Per-frame easing factors for the fill reveal, as `[enter, exit]` in config.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(from = "[f64; 2]", into = "[f64; 2]")]
pub struct FillSpeeds {
    pub enter: f64,
    pub exit: f64,
}

impl Default for FillSpeeds {
    fn default() -> Self {
        Self {
            enter: 0.1,
            exit: 0.15,
        }
    }
}

impl From<[f64; 2]> for FillSpeeds {
    fn from([enter, exit]: [f64; 2]) -> Self {
        Self { enter, exit }
    }
}

impl From<FillSpeeds> for [f64; 2] {
    fn from(s: FillSpeeds) -> Self {
        [s.enter, s.exit]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillPhase {
    /// Cursor outside and the fill has faded out.
    Outside,
    /// Cursor inside; progress heading to 1.
    Entering,
    /// Cursor left; progress heading back to 0.
    Exiting,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillTransition {
    Entered,
    Exited,
}

/// The circle to draw for a fill, clipped to `clip`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FillCircle {
    pub center: Point,
    pub radius: f64,
    pub clip: TrackedRect,
}

/// Reveal animation state for one tracked rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct RectFillState {
    pub progress: f64,
    pub is_inside: bool,
    pub entry_point: Point,
    pub exit_point: Point,
}

impl RectFillState {
    pub fn phase(&self) -> FillPhase {
        if self.is_inside {
            FillPhase::Entering
        } else if self.progress > VISIBLE_THRESHOLD {
            FillPhase::Exiting
        } else {
            FillPhase::Outside
        }
    }

    /// Advance one frame given the cursor position and the rectangle's current bounds.
    ///
    /// Entry and exit points are captured only on the frame containment flips.
    pub fn update(
        &mut self,
        cursor: Point,
        bounds: &TrackedRect,
        speeds: FillSpeeds,
    ) -> Option<FillTransition> {
        let inside = bounds.contains(cursor);
        let transition = match (self.is_inside, inside) {
            (false, true) => {
                self.entry_point = cursor;
                Some(FillTransition::Entered)
            }
            (true, false) => {
                self.exit_point = cursor;
                Some(FillTransition::Exited)
            }
            _ => None,
        };
        self.is_inside = inside;

        let (target, speed) = if inside {
            (1.0, speeds.enter)
        } else {
            (0.0, speeds.exit)
        };
        self.progress = lerp(self.progress, target, speed);
        transition
    }

    /// The circle to draw this frame, if any.
    ///
    /// Its radius reaches the farthest corner from the origin point at full progress, so a
    /// completed fill always covers the whole rectangle.
    pub fn fill_circle(&self, bounds: &TrackedRect) -> Option<FillCircle> {
        if self.progress <= VISIBLE_THRESHOLD || bounds.is_empty() {
            return None;
        }
        let center = if self.is_inside {
            self.entry_point
        } else {
            self.exit_point
        };
        Some(FillCircle {
            center,
            radius: self.progress * bounds.farthest_corner_distance(center),
            clip: *bounds,
        })
    }
}

/// Fill state per region, created on first sight and kept for the life of the map.
#[derive(Clone, Debug, Default)]
pub struct FillStates {
    states: HashMap<RegionId, RectFillState>,
}

impl FillStates {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: RegionId) -> Option<&RectFillState> {
        self.states.get(&id)
    }

    pub fn state_mut(&mut self, id: RegionId) -> &mut RectFillState {
        self.states.entry(id).or_default()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/fill/state.rs"]
mod tests;
