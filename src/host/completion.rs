//! One-shot completion callback

use tracing::debug;

/// Callback invoked when the user cancels or finishes the wizard
///
/// Guarded by an explicit `completed` flag: only the first
/// [`invoke`](Self::invoke) reaches the callback.
pub struct CompletionHandler {
    callback: Box<dyn FnMut(bool)>,
    completed: bool,
}

impl CompletionHandler {
    /// Wrap a `(canceled) -> ()` callback
    pub fn new(callback: impl FnMut(bool) + 'static) -> Self {
        Self {
            callback: Box::new(callback),
            completed: false,
        }
    }

    /// Run the callback unless it already ran; returns whether it ran
    pub fn invoke(&mut self, canceled: bool) -> bool {
        if self.completed {
            debug!(canceled, "Completion handler already invoked, ignoring");
            return false;
        }

        self.completed = true;
        (self.callback)(canceled);
        true
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

impl std::fmt::Debug for CompletionHandler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionHandler")
            .field("completed", &self.completed)
            .finish_non_exhaustive()
    }
}
