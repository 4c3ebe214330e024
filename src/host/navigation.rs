//! "Is navigating" flag shared between a controller and its view

use std::cell::Cell;
use std::rc::Rc;

/// Set while a transition animation is running
///
/// Clones share the same flag, so the view can hold one and clear it when its
/// animation completes. Transition requests arriving while it is set are
/// dropped by the controller.
#[derive(Debug, Clone, Default)]
pub struct NavigationFlag {
    navigating: Rc<Cell<bool>>,
}

impl NavigationFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a transition as started
    pub fn begin(&self) {
        self.navigating.set(true);
    }

    /// Mark the running transition as done
    pub fn end(&self) {
        self.navigating.set(false);
    }

    pub fn is_navigating(&self) -> bool {
        self.navigating.get()
    }
}
