use super::*;

#[test]
fn ids_are_stable_and_unique() {
    let reg = RegionRegistry::new();
    let a = reg.register();
    let b = reg.register();
    assert_ne!(a.id(), b.id());
    assert!(reg.unregister(a.id()));
    let c = reg.register();
    assert_ne!(c.id(), a.id());
    assert_eq!(reg.len(), 2);
}

#[test]
fn snapshot_sees_latest_bounds() {
    let reg = RegionRegistry::new();
    let h = reg.register();
    let mut snap = Vec::new();
    reg.snapshot_into(&mut snap);
    assert_eq!(snap, vec![(h.id(), TrackedRect::default())]);

    let moved = TrackedRect::from_ltwh(1.0, 2.0, 3.0, 4.0);
    h.set_bounds(moved);
    reg.snapshot_into(&mut snap);
    assert_eq!(snap, vec![(h.id(), moved)]);
}

#[test]
fn unregister_unknown_is_false() {
    let reg = RegionRegistry::new();
    assert!(!reg.unregister(RegionId(42)));
    assert!(reg.is_empty());
}
