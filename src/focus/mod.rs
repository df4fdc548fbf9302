// Focus model: focusable element identity, opaque pane content, and the
// input-focus seam the activation protocol drives.

use std::collections::HashSet;
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

use crate::pane::PaneId;

/// Global monotonically increasing focus ID counter.
static NEXT_FOCUS_ID: AtomicU32 = AtomicU32::new(1);

/// Unique identifier for a focusable element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FocusId(pub u32);

impl FocusId {
    /// Generate a new unique FocusId.
    pub fn next() -> Self {
        Self(NEXT_FOCUS_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Reset the global counter (for testing only).
    #[cfg(test)]
    pub(crate) fn reset_counter() {
        NEXT_FOCUS_ID.store(1, Ordering::Relaxed);
    }
}

/// Shared handle to a pane's hosted content.
pub type ContentRef = Rc<dyn Content>;

/// The content element a pane hosts. Opaque to the pane apart from the
/// queries the activation chain needs and the attach/detach notifications
/// that track the pane's logical child registration.
pub trait Content {
    /// Called when the pane registers this content as its logical child.
    fn on_attached(&self, _pane: PaneId) {}

    /// Called when the pane unregisters this content.
    fn on_detached(&self, _pane: PaneId) {}

    /// Whether this content subtree is a focus boundary that remembers the
    /// element last focused within it.
    fn is_focus_scope(&self) -> bool {
        false
    }

    /// The element last focused within this scope, if this content is a
    /// focus scope and has a memory.
    fn remembered_focus(&self) -> Option<FocusId> {
        None
    }

    /// The first focusable element of the subtree in natural traversal order.
    fn first_focusable(&self) -> Option<FocusId>;

    /// Whether the given element lives inside this content subtree.
    fn contains(&self, id: FocusId) -> bool;
}

/// The input-focus owner the pane talks to when activating. Implemented by
/// the hosting framework's focus system; `FocusTracker` is a reference
/// implementation for embedders and tests.
pub trait FocusContext {
    /// The element currently holding input focus, if any.
    fn focused(&self) -> Option<FocusId>;

    /// Attempt to move input focus to the given element. Returns false if
    /// the element cannot take focus (not focusable, not attached).
    fn request_focus(&mut self, id: FocusId) -> bool;
}

/// Reference focus owner: tracks the focused element and the set of
/// currently focusable ids. Focus requests for unknown ids fail.
pub struct FocusTracker {
    focused: Option<FocusId>,
    focusable: HashSet<FocusId>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self {
            focused: None,
            focusable: HashSet::new(),
        }
    }

    /// Register an element as able to take focus.
    pub fn register(&mut self, id: FocusId) {
        self.focusable.insert(id);
    }

    /// Remove an element from the focusable set. Clears focus if the
    /// element currently holds it.
    pub fn unregister(&mut self, id: FocusId) {
        self.focusable.remove(&id);
        if self.focused == Some(id) {
            self.focused = None;
        }
    }

    /// Drop focus entirely (e.g. the host window lost activation).
    pub fn clear(&mut self) {
        self.focused = None;
    }
}

impl Default for FocusTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl FocusContext for FocusTracker {
    fn focused(&self) -> Option<FocusId> {
        self.focused
    }

    fn request_focus(&mut self, id: FocusId) -> bool {
        if !self.focusable.contains(&id) {
            return false;
        }
        self.focused = Some(id);
        true
    }
}
