// Pane notification registry: the cancelable Closing event and the
// informational Closed event.

/// Cancelable notification raised before a pane is removed. Any listener may
/// cancel; the close protocol checks the flag after all listeners have run.
#[derive(Debug, Default)]
pub struct ClosingEvent {
    cancel: bool,
}

impl ClosingEvent {
    pub fn new() -> Self {
        Self { cancel: false }
    }

    /// Request that the close be abandoned.
    pub fn cancel(&mut self) {
        self.cancel = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel
    }
}

/// Listener registry owned by a pane. Dispatch is synchronous and in
/// registration order; bubbling to ancestor listeners is the layout tree's
/// job — the pane only guarantees Closed is raised exactly once per
/// successful close.
#[derive(Default)]
pub struct PaneEvents {
    closing: Vec<Box<dyn FnMut(&mut ClosingEvent)>>,
    closed: Vec<Box<dyn FnMut()>>,
}

impl PaneEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a Closing listener. The listener may cancel the close.
    pub fn on_closing(&mut self, listener: impl FnMut(&mut ClosingEvent) + 'static) {
        self.closing.push(Box::new(listener));
    }

    /// Register a Closed listener.
    pub fn on_closed(&mut self, listener: impl FnMut() + 'static) {
        self.closed.push(Box::new(listener));
    }

    /// Run every Closing listener against the given event.
    pub(crate) fn raise_closing(&mut self, event: &mut ClosingEvent) {
        for listener in &mut self.closing {
            listener(event);
        }
    }

    /// Run every Closed listener.
    pub(crate) fn raise_closed(&mut self) {
        for listener in &mut self.closed {
            listener();
        }
    }
}
