/// Collapses repeated signals into one deferred task.
///
/// `H` is whatever handle the scheduler hands back (an animation-frame id on
/// the web). While a task is pending, further signals are dropped; the task
/// calls [`FrameTrigger::consume`] when it runs.
#[derive(Debug)]
pub struct FrameTrigger<H> {
    pending: Option<H>,
}

impl<H> Default for FrameTrigger<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> FrameTrigger<H> {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Schedule unless something is already pending. Returns true when
    /// `schedule` ran and produced a handle.
    pub fn signal<F>(&mut self, schedule: F) -> bool
    where
        F: FnOnce() -> Option<H>,
    {
        if self.pending.is_some() {
            return false;
        }
        self.pending = schedule();
        self.pending.is_some()
    }

    /// Debounce: drop the pending task (its handle is returned so the caller
    /// can cancel it) and schedule a fresh one.
    pub fn reschedule<F>(&mut self, schedule: F) -> Option<H>
    where
        F: FnOnce() -> Option<H>,
    {
        let previous = self.pending.take();
        self.pending = schedule();
        previous
    }

    /// Mark the pending task as run. Returns false if it was cancelled.
    pub fn consume(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Forget the pending task, returning its handle for cancellation.
    pub fn cancel(&mut self) -> Option<H> {
        self.pending.take()
    }
}
