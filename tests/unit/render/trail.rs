use super::*;
use crate::foundation::core::{CssSize, Point};

#[derive(Debug, PartialEq)]
enum Call {
    Clear,
    Circle(Point, f64),
    Clipped(Point, f64, TrackedRect),
}

#[derive(Default)]
struct Recorder {
    calls: Vec<Call>,
}

impl DrawSurface for Recorder {
    fn css_size(&self) -> CssSize {
        CssSize::new(200.0, 200.0)
    }

    fn clear(&mut self) {
        self.calls.push(Call::Clear);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, _color: Rgba) {
        self.calls.push(Call::Circle(center, radius));
    }

    fn fill_circle_clipped(&mut self, center: Point, radius: f64, _color: Rgba, clip: &TrackedRect) {
        self.calls.push(Call::Clipped(center, radius, *clip));
    }
}

fn ms(v: u64) -> Duration {
    Duration::from_millis(v)
}

fn trail(num_balls: usize) -> (CursorTrail, CursorStore, RegionRegistry, ReducedMotion) {
    trail_with(TrailConfig {
        num_balls,
        ..TrailConfig::default()
    })
}

fn trail_with(cfg: TrailConfig) -> (CursorTrail, CursorStore, RegionRegistry, ReducedMotion) {
    let cursor = CursorStore::new();
    let regions = RegionRegistry::new();
    let reduced = ReducedMotion::default();
    let t = CursorTrail::new(&cfg, cursor.clone(), regions.clone(), reduced.clone());
    (t, cursor, regions, reduced)
}

#[test]
fn clears_but_skips_until_cursor_moves() {
    let (mut t, _cursor, _regions, _reduced) = trail(3);
    let mut s = Recorder::default();
    assert_eq!(
        t.draw(&mut s, ms(0)),
        FrameOutcome::Skipped(SkipReason::CursorIdle)
    );
    assert_eq!(s.calls, vec![Call::Clear]);
}

#[test]
fn reduced_motion_suppresses_everything() {
    let (mut t, cursor, _regions, reduced) = trail(3);
    cursor.handle_pointer_move(10.0, 10.0);
    reduced.set(true);
    let mut s = Recorder::default();
    assert_eq!(
        t.draw(&mut s, ms(0)),
        FrameOutcome::Skipped(SkipReason::ReducedMotion)
    );
    assert_eq!(s.calls, vec![Call::Clear]);
    assert!(!t.motion().is_moving());
}

#[test]
fn draws_every_ball_after_first_move() {
    let (mut t, cursor, _regions, _reduced) = trail(3);
    cursor.handle_pointer_move(50.0, 50.0);
    let mut s = Recorder::default();
    assert_eq!(
        t.draw(&mut s, ms(0)),
        FrameOutcome::Drawn { balls: 3, fills: 0 }
    );
    assert_eq!(s.calls[0], Call::Clear);
    assert_eq!(s.calls.len(), 4);
    assert_eq!(s.calls[1], Call::Circle(Point::new(50.0, 50.0), 10.0));
    assert!(t.motion().is_moving());
}

#[test]
fn fills_are_drawn_before_balls() {
    // A slow chase keeps the balls outside the region on the entry frame.
    let (mut t, cursor, regions, _reduced) = trail_with(TrailConfig {
        num_balls: 2,
        lerp_factor: 0.1,
        ..TrailConfig::default()
    });
    let region = regions.register_with(TrackedRect::from_edges(0.0, 0.0, 100.0, 100.0));
    cursor.handle_pointer_move(150.0, 50.0);
    let mut s = Recorder::default();
    t.draw(&mut s, ms(0));

    cursor.handle_pointer_move(10.0, 90.0);
    s.calls.clear();
    let outcome = t.draw(&mut s, ms(16));
    assert_eq!(outcome, FrameOutcome::Drawn { balls: 2, fills: 1 });
    match &s.calls[1] {
        Call::Clipped(center, radius, clip) => {
            assert_eq!(*center, Point::new(10.0, 90.0));
            assert!(*radius > 0.0);
            assert_eq!(*clip, region.bounds());
        }
        other => panic!("expected clipped fill first, got {other:?}"),
    }
    assert!(matches!(s.calls[2], Call::Circle(..)));

    let state = t.fills().get(region.id()).unwrap();
    assert!(state.is_inside);
    assert_eq!(state.entry_point, Point::new(10.0, 90.0));
}

#[test]
fn balls_over_regions_are_not_drawn() {
    let (mut t, cursor, regions, _reduced) = trail(3);
    regions.register_with(TrackedRect::from_edges(0.0, 0.0, 100.0, 100.0));
    cursor.handle_pointer_move(50.0, 50.0);
    let mut s = Recorder::default();
    let outcome = t.draw(&mut s, ms(0));
    assert!(matches!(outcome, FrameOutcome::Drawn { balls: 0, .. }));
}

#[test]
fn teardown_stops_drawing_and_cancels_reset() {
    let (mut t, cursor, _regions, _reduced) = trail(3);
    cursor.handle_pointer_move(50.0, 50.0);
    let mut s = Recorder::default();
    t.draw(&mut s, ms(0));
    assert!(t.motion().has_pending_reset());

    t.teardown();
    assert!(t.is_torn_down());
    assert!(!t.motion().has_pending_reset());
    s.calls.clear();
    assert_eq!(
        t.draw(&mut s, ms(16)),
        FrameOutcome::Skipped(SkipReason::TornDown)
    );
    assert_eq!(s.calls, vec![Call::Clear]);
}

#[test]
fn unmeasured_regions_neither_hide_balls_nor_fill() {
    let (mut t, cursor, regions, _reduced) = trail(3);
    let pending = regions.register();
    let mut s = Recorder::default();

    cursor.handle_pointer_move(4.0, 4.0);
    assert_eq!(
        t.draw(&mut s, ms(0)),
        FrameOutcome::Drawn { balls: 3, fills: 0 }
    );
    cursor.handle_pointer_move(0.0, 0.0);
    assert_eq!(
        t.draw(&mut s, ms(16)),
        FrameOutcome::Drawn { balls: 3, fills: 0 }
    );
    assert!(t.chain().balls().iter().all(|b| !b.is_hidden()));
    assert!(t.fills().get(pending.id()).is_none());

    pending.set_bounds(TrackedRect::from_edges(-10.0, -10.0, 10.0, 10.0));
    t.draw(&mut s, ms(32));
    let state = t.fills().get(pending.id()).unwrap();
    assert!(state.is_inside);
    assert_eq!(state.entry_point, Point::ORIGIN);
}
