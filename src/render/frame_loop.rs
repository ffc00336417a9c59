use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use crate::foundation::core::{FrameIndex, Fps};
use crate::foundation::error::TrailResult;

/// One invocation of a [`FrameLoop`] callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FrameTick {
    pub index: FrameIndex,
    /// Presentation time of this frame since the loop's frame 0.
    pub time: Duration,
}

/// Cancellation handle for a [`FrameLoop`]. Clones share state.
#[derive(Clone, Debug, Default)]
pub struct LoopHandle {
    cancelled: Rc<Cell<bool>>,
}

impl LoopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// No callback runs after this returns.
    pub fn cancel(&self) {
        self.cancelled.set(true);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// Invokes a callback once per display refresh of a fixed-rate host clock.
pub struct FrameLoop<F> {
    fps: Fps,
    next: FrameIndex,
    handle: LoopHandle,
    callback: F,
}

impl<F> FrameLoop<F>
where
    F: FnMut(FrameTick) -> TrailResult<()>,
{
    pub fn start(fps: Fps, first: FrameIndex, callback: F) -> (Self, LoopHandle) {
        let handle = LoopHandle::new();
        (Self::with_handle(fps, first, handle.clone(), callback), handle)
    }

    pub fn with_handle(fps: Fps, first: FrameIndex, handle: LoopHandle, callback: F) -> Self {
        Self {
            fps,
            next: first,
            handle,
            callback,
        }
    }

    pub fn next_frame(&self) -> FrameIndex {
        self.next
    }

    /// Run one frame. Returns `false` without calling back once cancelled.
    pub fn tick(&mut self) -> TrailResult<bool> {
        if self.handle.is_cancelled() {
            return Ok(false);
        }
        let tick = FrameTick {
            index: self.next,
            time: self.fps.frame_time(self.next),
        };
        (self.callback)(tick)?;
        self.next = FrameIndex(self.next.0 + 1);
        Ok(true)
    }

    /// Run up to `frames` frames, stopping early on cancellation. Returns how many ran.
    pub fn run(&mut self, frames: u64) -> TrailResult<u64> {
        let mut ran = 0;
        while ran < frames && self.tick()? {
            ran += 1;
        }
        Ok(ran)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame_loop.rs"]
mod tests;
