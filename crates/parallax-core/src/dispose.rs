/// Collects teardown callbacks and runs each exactly once.
#[derive(Default)]
pub struct Disposer {
    disposers: Vec<Box<dyn FnOnce()>>,
}

impl Disposer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, dispose: impl FnOnce() + 'static) {
        self.disposers.push(Box::new(dispose));
    }

    pub fn len(&self) -> usize {
        self.disposers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.disposers.is_empty()
    }

    /// Run every callback in registration order. Calling again is a no-op
    /// until something new is added.
    pub fn dispose_all(&mut self) {
        for dispose in self.disposers.drain(..) {
            dispose();
        }
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        if !self.disposers.is_empty() {
            log::debug!("[dispose] dropping {} pending disposers", self.disposers.len());
            self.dispose_all();
        }
    }
}
