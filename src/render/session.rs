use std::ops::ControlFlow;

use crate::animation::smooth::FrameStats;
use crate::config::TrailConfig;
use crate::foundation::core::{FrameIndex, FrameRange, Point};
use crate::foundation::error::TrailResult;
use crate::geometry::registry::{RegionHandle, RegionRegistry};
use crate::input::cursor::CursorStore;
use crate::input::reduced_motion::ReducedMotion;
use crate::input::script::PointerScript;
use crate::render::cpu::CpuSurface;
use crate::render::frame_loop::{FrameLoop, FrameTick, LoopHandle};
use crate::render::surface::FrameRGBA;
use crate::render::trail::{CursorTrail, FrameOutcome};

/// Plays a [`PointerScript`] through a [`CursorTrail`] on a CPU surface.
///
/// The script stands in for the host page: it moves the pointer, owns the tracked regions and
/// supplies the refresh clock.
pub struct TrailSession {
    script: PointerScript,
    cursor: CursorStore,
    regions: Vec<RegionHandle>,
    trail: CursorTrail,
    surface: CpuSurface,
    stats: FrameStats,
    last_pointer: Option<Point>,
}

impl TrailSession {
    pub fn new(config: &TrailConfig, script: PointerScript) -> TrailResult<Self> {
        config.validate()?;
        script.validate()?;

        let surface = CpuSurface::new(script.canvas, script.device_pixel_ratio)?;
        let cursor = CursorStore::new();
        let registry = RegionRegistry::new();
        let regions = script
            .regions
            .iter()
            .map(|r| registry.register_with(r.bounds()))
            .collect();
        let reduced = ReducedMotion::new(script.reduced_motion);
        let trail = CursorTrail::new(config, cursor.clone(), registry, reduced);

        Ok(Self {
            script,
            cursor,
            regions,
            trail,
            surface,
            stats: FrameStats::new(),
            last_pointer: None,
        })
    }

    pub fn script(&self) -> &PointerScript {
        &self.script
    }

    pub fn trail(&self) -> &CursorTrail {
        &self.trail
    }

    pub fn regions(&self) -> &[RegionHandle] {
        &self.regions
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// The whole script as a frame range.
    pub fn full_range(&self) -> FrameRange {
        FrameRange {
            start: FrameIndex(0),
            end: FrameIndex(self.script.duration),
        }
    }

    /// Feed the scripted pointer for `tick` and draw it.
    pub fn step(&mut self, tick: FrameTick) -> FrameOutcome {
        if let Some(p) = self.script.pointer.sample(tick.time)
            && self.last_pointer != Some(p)
        {
            self.cursor.handle_pointer_move(p.x, p.y);
            self.last_pointer = Some(p);
        }
        let outcome = self.trail.draw(&mut self.surface, tick.time);
        self.stats.record(tick.time);
        outcome
    }

    /// Rasterize the most recently drawn frame.
    pub fn frame(&mut self) -> FrameRGBA {
        self.surface.frame()
    }

    /// Play `range` in order, handing each frame to `sink`. Frames before `range.start` are
    /// simulated but not rasterized, since trail state depends on every previous frame.
    #[tracing::instrument(skip(self, sink))]
    pub fn render_range<S>(&mut self, range: FrameRange, mut sink: S) -> TrailResult<u64>
    where
        S: FnMut(FrameIndex, &FrameRGBA) -> TrailResult<ControlFlow<()>>,
    {
        let fps = self.script.fps;
        let handle = LoopHandle::new();
        let stop = handle.clone();
        let mut delivered = 0;
        let mut frame_loop = FrameLoop::with_handle(fps, FrameIndex(0), handle, |tick| {
            self.step(tick);
            if !range.contains(tick.index) {
                return Ok(());
            }
            let frame = self.frame();
            delivered += 1;
            if sink(tick.index, &frame)?.is_break() {
                stop.cancel();
            }
            Ok(())
        });
        frame_loop.run(range.end.0)?;
        drop(frame_loop);

        tracing::info!(
            frames = self.stats.frames(),
            delivered,
            fps = self.stats.fps(),
            "render range finished"
        );
        Ok(delivered)
    }

    /// Tear the trail down; later steps draw nothing.
    pub fn teardown(&mut self) {
        self.trail.teardown();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/session.rs"]
mod tests;
