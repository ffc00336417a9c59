use std::time::Duration;

use crate::config::TrailConfig;
use crate::fill::state::{FillSpeeds, FillStates, FillTransition};
use crate::foundation::color::Rgba;
use crate::geometry::rect::TrackedRect;
use crate::geometry::registry::{RegionId, RegionRegistry};
use crate::input::cursor::CursorStore;
use crate::input::motion::MotionTracker;
use crate::input::reduced_motion::ReducedMotion;
use crate::render::surface::DrawSurface;
use crate::sim::chain::Chain;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipReason {
    /// No pointer movement has been seen yet.
    CursorIdle,
    ReducedMotion,
    TornDown,
}

/// What one call to [`CursorTrail::draw`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    Skipped(SkipReason),
    Drawn {
        /// Balls drawn with a visible radius.
        balls: usize,
        /// Region fills drawn.
        fills: usize,
    },
}

/// The per-frame render loop body: motion detection, chain update, region fills, then balls.
///
/// The trail is the only writer of its simulation state. Cursor, regions and the reduced-motion
/// flag are shared with their own writers and only read here.
pub struct CursorTrail {
    cursor: CursorStore,
    regions: RegionRegistry,
    reduced_motion: ReducedMotion,
    chain: Chain,
    motion: MotionTracker,
    fills: FillStates,
    fill_speeds: FillSpeeds,
    fill_color: Rgba,
    region_buf: Vec<(RegionId, TrackedRect)>,
    rect_buf: Vec<TrackedRect>,
    torn_down: bool,
}

impl CursorTrail {
    pub fn new(
        config: &TrailConfig,
        cursor: CursorStore,
        regions: RegionRegistry,
        reduced_motion: ReducedMotion,
    ) -> Self {
        Self {
            cursor,
            regions,
            reduced_motion,
            chain: Chain::new(config.chain_params()),
            motion: config.motion_tracker(),
            fills: FillStates::new(),
            fill_speeds: config.fill_animation_speeds,
            fill_color: config.fill_color,
            region_buf: Vec::new(),
            rect_buf: Vec::new(),
            torn_down: false,
        }
    }

    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    pub fn motion(&self) -> &MotionTracker {
        &self.motion
    }

    pub fn fills(&self) -> &FillStates {
        &self.fills
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Draw the frame presented at `now`.
    #[tracing::instrument(level = "trace", skip(self, surface))]
    pub fn draw(&mut self, surface: &mut dyn DrawSurface, now: Duration) -> FrameOutcome {
        surface.clear();
        if self.torn_down {
            return FrameOutcome::Skipped(SkipReason::TornDown);
        }

        let cursor = self.cursor.snapshot();
        if !cursor.has_moved {
            return FrameOutcome::Skipped(SkipReason::CursorIdle);
        }
        if self.reduced_motion.is_enabled() {
            return FrameOutcome::Skipped(SkipReason::ReducedMotion);
        }

        let is_moving = self.motion.update(cursor.position(), now);

        self.regions.snapshot_into(&mut self.region_buf);
        // Regions that have not been measured yet take no part in this frame.
        self.region_buf.retain(|(_, rect)| !rect.is_empty());
        self.rect_buf.clear();
        self.rect_buf
            .extend(self.region_buf.iter().map(|(_, rect)| *rect));
        self.chain.update(cursor, is_moving, &self.rect_buf);

        let mut fills = 0;
        for (id, rect) in &self.region_buf {
            let state = self.fills.state_mut(*id);
            match state.update(cursor.position(), rect, self.fill_speeds) {
                Some(FillTransition::Entered) => {
                    tracing::debug!(region = id.0, x = cursor.x, y = cursor.y, "fill entered");
                }
                Some(FillTransition::Exited) => {
                    tracing::debug!(region = id.0, x = cursor.x, y = cursor.y, "fill exited");
                }
                None => {}
            }
            if let Some(circle) = state.fill_circle(rect) {
                surface.fill_circle_clipped(
                    circle.center,
                    circle.radius,
                    self.fill_color,
                    &circle.clip,
                );
                fills += 1;
            }
        }

        let mut balls = 0;
        for ball in self.chain.balls() {
            let radius = ball.rendered_radius();
            if radius > 0.0 {
                surface.fill_circle(ball.position, radius, ball.color);
                balls += 1;
            }
        }

        FrameOutcome::Drawn { balls, fills }
    }

    /// Stop drawing and cancel the pending motion reset. Idempotent.
    pub fn teardown(&mut self) {
        if !self.torn_down {
            tracing::debug!("cursor trail torn down");
        }
        self.motion.cancel();
        self.torn_down = true;
    }
}

impl Drop for CursorTrail {
    fn drop(&mut self) {
        self.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/trail.rs"]
mod tests;
