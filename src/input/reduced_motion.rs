use std::cell::Cell;
use std::rc::Rc;

/// User/system "reduce motion" preference. When set, the render loop draws nothing.
///
/// Clones share the same flag; the preference watcher writes, the render loop reads.
#[derive(Clone, Debug, Default)]
pub struct ReducedMotion {
    inner: Rc<Cell<bool>>,
}

impl ReducedMotion {
    pub fn new(enabled: bool) -> Self {
        Self {
            inner: Rc::new(Cell::new(enabled)),
        }
    }

    pub fn set(&self, enabled: bool) {
        self.inner.set(enabled);
    }

    pub fn is_enabled(&self) -> bool {
        self.inner.get()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/reduced_motion.rs"]
mod tests;
