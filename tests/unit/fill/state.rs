use super::*;

fn square() -> TrackedRect {
    TrackedRect::from_edges(0.0, 0.0, 100.0, 100.0)
}

#[test]
fn entering_captures_entry_point_and_grows() {
    let rect = square();
    let speeds = FillSpeeds::default();
    let mut s = RectFillState::default();
    assert_eq!(s.phase(), FillPhase::Outside);

    let t = s.update(Point::new(10.0, 90.0), &rect, speeds);
    assert_eq!(t, Some(FillTransition::Entered));
    assert_eq!(s.entry_point, Point::new(10.0, 90.0));
    assert_eq!(s.phase(), FillPhase::Entering);

    let mut prev = s.progress;
    let mut frames = 0;
    while prev < 0.99 {
        s.update(Point::new(20.0, 80.0), &rect, speeds);
        assert!(s.progress > prev);
        prev = s.progress;
        frames += 1;
        assert!(frames < 1_000);
    }
    assert_eq!(s.entry_point, Point::new(10.0, 90.0));
}

#[test]
fn exiting_uses_exit_speed_and_shrinks() {
    let rect = square();
    let speeds = FillSpeeds {
        enter: 0.2,
        exit: 0.05,
    };
    let mut s = RectFillState::default();
    for _ in 0..60 {
        s.update(Point::new(50.0, 50.0), &rect, speeds);
    }

    let t = s.update(Point::new(150.0, 40.0), &rect, speeds);
    assert_eq!(t, Some(FillTransition::Exited));
    assert_eq!(s.exit_point, Point::new(150.0, 40.0));
    assert_eq!(s.phase(), FillPhase::Exiting);

    for _ in 0..50 {
        let prev = s.progress;
        s.update(Point::new(160.0, 40.0), &rect, speeds);
        assert!(s.progress < prev);
        assert_eq!(s.progress, prev + (0.0 - prev) * speeds.exit);
    }
    assert_eq!(s.exit_point, Point::new(150.0, 40.0));
}

#[test]
fn unchanged_containment_only_moves_progress() {
    let rect = square();
    let mut s = RectFillState::default();
    s.update(Point::new(30.0, 30.0), &rect, FillSpeeds::default());
    let before = s;
    assert_eq!(
        s.update(Point::new(60.0, 60.0), &rect, FillSpeeds::default()),
        None
    );
    assert_eq!(s.entry_point, before.entry_point);
    assert_eq!(s.exit_point, before.exit_point);
    assert!(s.progress > before.progress);
}

#[test]
fn fill_circle_reaches_farthest_corner() {
    let rect = square();
    let s = RectFillState {
        progress: 1.0,
        is_inside: true,
        entry_point: Point::new(10.0, 90.0),
        exit_point: Point::ORIGIN,
    };
    let c = s.fill_circle(&rect).unwrap();
    assert_eq!(c.center, Point::new(10.0, 90.0));
    assert!((c.radius - (2.0f64 * 90.0 * 90.0).sqrt()).abs() < 1e-9);
    assert_eq!(c.clip, rect);
}

#[test]
fn fill_circle_is_centered_on_exit_point_while_outside() {
    let rect = square();
    let s = RectFillState {
        progress: 0.5,
        is_inside: false,
        entry_point: Point::new(10.0, 90.0),
        exit_point: Point::new(100.0, 50.0),
    };
    let c = s.fill_circle(&rect).unwrap();
    assert_eq!(c.center, Point::new(100.0, 50.0));
    let far = (100.0f64 * 100.0 + 50.0 * 50.0).sqrt();
    assert!((c.radius - 0.5 * far).abs() < 1e-9);
}

#[test]
fn nothing_drawn_below_threshold_or_for_empty_rect() {
    let rect = square();
    let s = RectFillState {
        progress: VISIBLE_THRESHOLD,
        ..RectFillState::default()
    };
    assert!(s.fill_circle(&rect).is_none());

    let s = RectFillState {
        progress: 1.0,
        is_inside: true,
        ..RectFillState::default()
    };
    assert!(s.fill_circle(&TrackedRect::from_ltwh(5.0, 5.0, 0.0, 0.0)).is_none());
}

#[test]
fn states_are_created_lazily_per_region() {
    let mut states = FillStates::new();
    assert!(states.get(RegionId(3)).is_none());
    states.state_mut(RegionId(3)).progress = 0.5;
    states.state_mut(RegionId(3));
    assert_eq!(states.len(), 1);
    assert_eq!(states.get(RegionId(3)).unwrap().progress, 0.5);
}

#[test]
fn speeds_deserialize_from_pair() {
    let s: FillSpeeds = serde_json::from_str("[0.2, 0.3]").unwrap();
    assert_eq!(s, FillSpeeds { enter: 0.2, exit: 0.3 });
}
