use super::*;
use crate::foundation::error::TrailError;

#[test]
fn ticks_advance_index_and_time() {
    let mut seen = Vec::new();
    let fps = Fps::new(50, 1).unwrap();
    let (mut lp, _handle) = FrameLoop::start(fps, FrameIndex(0), |tick| {
        seen.push(tick);
        Ok(())
    });
    assert_eq!(lp.run(3).unwrap(), 3);
    assert_eq!(lp.next_frame(), FrameIndex(3));
    drop(lp);
    assert_eq!(seen[2].index, FrameIndex(2));
    assert_eq!(seen[2].time, Duration::from_millis(40));
}

#[test]
fn cancelled_loop_never_calls_back() {
    let calls = Cell::new(0);
    let fps = Fps::new(60, 1).unwrap();
    let (mut lp, handle) = FrameLoop::start(fps, FrameIndex(0), |_| {
        calls.set(calls.get() + 1);
        Ok(())
    });
    assert!(lp.tick().unwrap());
    handle.cancel();
    assert!(!lp.tick().unwrap());
    assert_eq!(lp.run(10).unwrap(), 0);
    assert_eq!(calls.get(), 1);
}

#[test]
fn callback_can_cancel_through_shared_handle() {
    let handle = LoopHandle::new();
    let stop = handle.clone();
    let fps = Fps::new(60, 1).unwrap();
    let mut lp = FrameLoop::with_handle(fps, FrameIndex(10), handle, move |tick| {
        if tick.index == FrameIndex(12) {
            stop.cancel();
        }
        Ok(())
    });
    assert_eq!(lp.run(100).unwrap(), 3);
}

#[test]
fn callback_errors_propagate() {
    let fps = Fps::new(60, 1).unwrap();
    let (mut lp, _handle) =
        FrameLoop::start(fps, FrameIndex(0), |_| Err(TrailError::surface("gone")));
    assert!(matches!(lp.tick(), Err(TrailError::Surface(_))));
}
