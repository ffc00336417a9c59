use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::geometry::rect::TrackedRect;

/// Stable identifier of a tracked region.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct RegionId(pub u32);

/// Writer side of one tracked region. The layout observer calls [`RegionHandle::set_bounds`]
/// whenever the element's box changes.
#[derive(Clone, Debug)]
pub struct RegionHandle {
    id: RegionId,
    bounds: Rc<Cell<TrackedRect>>,
}

impl RegionHandle {
    pub fn id(&self) -> RegionId {
        self.id
    }

    pub fn set_bounds(&self, rect: TrackedRect) {
        self.bounds.set(rect);
    }

    pub fn bounds(&self) -> TrackedRect {
        self.bounds.get()
    }
}

#[derive(Debug, Default)]
struct RegistryInner {
    next_id: u32,
    regions: Vec<RegionHandle>,
}

/// The set of regions the render loop should consider each frame.
///
/// Clones share the same registry.
#[derive(Clone, Debug, Default)]
pub struct RegionRegistry {
    inner: Rc<RefCell<RegistryInner>>,
}

impl RegionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a region with empty bounds.
    pub fn register(&self) -> RegionHandle {
        self.register_with(TrackedRect::default())
    }

    pub fn register_with(&self, rect: TrackedRect) -> RegionHandle {
        let mut inner = self.inner.borrow_mut();
        let id = RegionId(inner.next_id);
        inner.next_id += 1;
        let handle = RegionHandle {
            id,
            bounds: Rc::new(Cell::new(rect)),
        };
        inner.regions.push(handle.clone());
        handle
    }

    /// Stop reporting a region. Returns whether it was tracked.
    pub fn unregister(&self, id: RegionId) -> bool {
        let mut inner = self.inner.borrow_mut();
        let before = inner.regions.len();
        inner.regions.retain(|h| h.id != id);
        inner.regions.len() != before
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy the current bounds of every region into `out` (cleared first), in registration order.
    pub fn snapshot_into(&self, out: &mut Vec<(RegionId, TrackedRect)>) {
        out.clear();
        out.extend(
            self.inner
                .borrow()
                .regions
                .iter()
                .map(|h| (h.id, h.bounds())),
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/registry.rs"]
mod tests;
