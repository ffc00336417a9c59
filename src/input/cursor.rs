use std::cell::Cell;
use std::rc::Rc;

use crate::foundation::core::Point;

/// Latest pointer position in viewport coordinates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Cursor {
    pub x: f64,
    pub y: f64,
    /// Latches to `true` on the first pointer move and never resets.
    pub has_moved: bool,
}

impl Cursor {
    pub fn position(self) -> Point {
        Point::new(self.x, self.y)
    }
}

/// Shared pointer state.
///
/// The pointer-event listener is the only writer; the simulation and renderer read snapshots.
/// Clones share the same underlying cursor.
#[derive(Clone, Debug, Default)]
pub struct CursorStore {
    inner: Rc<Cell<Cursor>>,
}

impl CursorStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_pointer_move(&self, x: f64, y: f64) {
        self.inner.set(Cursor {
            x,
            y,
            has_moved: true,
        });
    }

    pub fn snapshot(&self) -> Cursor {
        self.inner.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/cursor.rs"]
mod tests;
