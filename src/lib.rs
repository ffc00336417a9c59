//! trailcanvas renders a cursor-following particle trail.
//!
//! A chain of balls chases the pointer: ball 0 eases toward the cursor and every later ball eases
//! toward the position its predecessor reached in the same frame, which produces a snake-like
//! trail. Radii taper along the chain while the pointer moves and decay to nothing when it rests;
//! colours can blend from a start to an end colour along the chain. Tracked rectangles get a
//! circular fill that grows from the point where the cursor entered and shrinks back toward the
//! point where it left.
//!
//! # Frame pipeline
//!
//! 1. **Input**: the host writes pointer moves into a [`CursorStore`] and region bounds through
//!    [`RegionHandle`]s.
//! 2. **Motion**: [`MotionTracker`] turns raw positions into a debounced "is moving" flag.
//! 3. **Simulate**: [`Chain::update`] propagates targets down the chain in index order.
//! 4. **Draw**: [`CursorTrail::draw`] clears the surface, draws region fills, then balls on top.
//!
//! Everything is single-threaded and frame-driven; shared state uses `Rc` handles with a single
//! writer per piece of state.
#![forbid(unsafe_code)]

mod animation;
mod config;
mod fill;
mod foundation;
mod geometry;
mod input;
mod render;
mod sim;

pub use animation::ease::Ease;
pub use animation::smooth::{FrameStats, Smoothed};
pub use config::TrailConfig;
pub use fill::state::{
    FillCircle, FillPhase, FillSpeeds, FillStates, FillTransition, RectFillState,
    VISIBLE_THRESHOLD,
};
pub use foundation::color::Rgba;
pub use foundation::core::{CssSize, Fps, FrameIndex, FrameRange, Point};
pub use foundation::error::{TrailError, TrailResult};
pub use foundation::math::{EPSILON, clamp, distance_squared, lerp, lerp_point};
pub use foundation::timer::Debounce;
pub use geometry::rect::TrackedRect;
pub use geometry::registry::{RegionHandle, RegionId, RegionRegistry};
pub use input::cursor::{Cursor, CursorStore};
pub use input::motion::{MotionTracker, MovementState};
pub use input::reduced_motion::ReducedMotion;
pub use input::script::{PointerKey, PointerPath, PointerScript, RegionDef};
pub use render::canvas::BackingStore;
pub use render::cpu::CpuSurface;
pub use render::frame_loop::{FrameLoop, FrameTick, LoopHandle};
pub use render::session::TrailSession;
pub use render::surface::{DrawSurface, FrameRGBA};
pub use render::trail::{CursorTrail, FrameOutcome, SkipReason};
pub use sim::chain::{Ball, Chain, ChainParams};
