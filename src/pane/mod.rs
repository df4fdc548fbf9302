// Dockable pane core: display attributes, the cancelable close protocol, and
// the focus activation fallback chain.

pub mod interaction;

use std::sync::atomic::{AtomicU32, Ordering};

use unicode_width::UnicodeWidthStr;

use crate::command::{CommandGate, PaneCommand};
use crate::config::PaneConfig;
use crate::event::{ClosingEvent, PaneEvents};
use crate::focus::{ContentRef, FocusContext, FocusId};
use crate::group::ContainerHandle;

/// Global monotonically increasing pane ID counter.
static NEXT_PANE_ID: AtomicU32 = AtomicU32::new(1);

/// Default sizing hint for a freshly created pane, in pixels.
pub const DEFAULT_CONTENT_SIZE: f32 = 250.0;

/// Unique identifier for a dockable pane.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PaneId(pub u32);

impl PaneId {
    /// Generate a new unique PaneId.
    pub fn next() -> Self {
        Self(NEXT_PANE_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Reset the global counter (for testing only).
    #[cfg(test)]
    pub(crate) fn reset_counter() {
        NEXT_PANE_ID.store(1, Ordering::Relaxed);
    }
}

/// How a pane reaches its current parent container. Installed by the layout
/// tree; queried at call time, never cached by the pane.
pub type ContainerLookup = Box<dyn Fn() -> Option<ContainerHandle>>;

/// A dockable pane: hosts one content element, presents a title and tab
/// label, and coordinates close/select/activate with its parent container.
pub struct Pane {
    id: PaneId,
    title: String,
    tab_label: String,
    is_selected: bool,
    content_size: f32,
    allow_close: bool,
    content: Option<ContentRef>,
    /// Focus identity of the pane frame itself, the activation chain's last
    /// resort.
    focus_id: FocusId,
    focusable: bool,
    /// Set once the close protocol has run to completion.
    detached: bool,
    events: PaneEvents,
    gate: CommandGate,
    container_lookup: Option<ContainerLookup>,
}

impl Pane {
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            id: PaneId::next(),
            tab_label: title.clone(),
            title,
            is_selected: false,
            content_size: DEFAULT_CONTENT_SIZE,
            allow_close: true,
            content: None,
            focus_id: FocusId::next(),
            focusable: true,
            detached: false,
            events: PaneEvents::new(),
            gate: CommandGate::new(),
            container_lookup: None,
        }
    }

    /// Create a pane with defaults taken from the embedder configuration.
    pub fn from_config(title: impl Into<String>, config: &PaneConfig) -> Self {
        let mut pane = Self::new(title);
        // Routed through the setter so a hand-built config with a bad size
        // hint cannot break the strictly-positive invariant.
        pane.set_content_size(config.content_size);
        pane.allow_close = config.allow_close;
        pane.focusable = config.focusable;
        pane
    }

    // ── Attributes ────────────────────────────────────────────────────

    pub fn id(&self) -> PaneId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn tab_label(&self) -> &str {
        &self.tab_label
    }

    pub fn is_selected(&self) -> bool {
        self.is_selected
    }

    pub fn content_size(&self) -> f32 {
        self.content_size
    }

    pub fn allow_close(&self) -> bool {
        self.allow_close
    }

    pub fn content(&self) -> Option<&ContentRef> {
        self.content.as_ref()
    }

    pub fn focus_id(&self) -> FocusId {
        self.focus_id
    }

    pub fn is_focusable(&self) -> bool {
        self.focusable
    }

    /// Whether the close protocol has already detached this pane.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Set the display title. A tab label that still mirrors the previous
    /// title follows the change; an independently customized label is left
    /// untouched.
    pub fn set_title(&mut self, title: impl Into<String>) {
        let title = title.into();
        if self.tab_label == self.title {
            self.tab_label = title.clone();
        }
        self.title = title;
    }

    /// Set the tab-strip label independently of the title.
    pub fn set_tab_label(&mut self, label: impl Into<String>) {
        self.tab_label = label.into();
    }

    /// Display-column width of the tab label, for tab-strip measurement.
    pub fn tab_label_width(&self) -> usize {
        self.tab_label.width()
    }

    /// Written by the container/host when the selection slot changes; the
    /// pane never flips this itself.
    pub fn set_selected(&mut self, selected: bool) {
        self.is_selected = selected;
    }

    /// Set the docked-size hint. Values that are not strictly positive are
    /// rejected and the prior value is kept.
    pub fn set_content_size(&mut self, size: f32) {
        if !(size > 0.0) {
            log::debug!("pane {:?}: rejected content size {size}", self.id);
            return;
        }
        self.content_size = size;
    }

    /// Gate the close protocol and its command. Flipping the value
    /// invalidates the command gate so hosts re-query enablement.
    pub fn set_allow_close(&mut self, allow: bool) {
        if self.allow_close == allow {
            return;
        }
        self.allow_close = allow;
        self.gate.invalidate();
    }

    pub fn set_focusable(&mut self, focusable: bool) {
        self.focusable = focusable;
    }

    /// Replace the hosted content. The previous content (if any) is detached
    /// from the pane's logical child registration and the new one (if any)
    /// attached, on every change including clearing to `None`.
    pub fn set_content(&mut self, content: Option<ContentRef>) {
        if let Some(old) = self.content.take() {
            old.on_detached(self.id);
        }
        if let Some(new) = &content {
            new.on_attached(self.id);
        }
        self.content = content;
    }

    // ── Container lookup ──────────────────────────────────────────────

    /// Install the containment-hierarchy lookup the pane uses to discover
    /// its parent container at call time.
    pub fn set_container_lookup(&mut self, lookup: impl Fn() -> Option<ContainerHandle> + 'static) {
        self.container_lookup = Some(Box::new(lookup));
    }

    /// The pane's current parent container, if reachable.
    pub fn find_parent_container(&self) -> Option<ContainerHandle> {
        self.container_lookup.as_ref().and_then(|lookup| lookup())
    }

    // ── Notifications ─────────────────────────────────────────────────

    /// Register a cancelable Closing listener.
    pub fn on_closing(&mut self, listener: impl FnMut(&mut ClosingEvent) + 'static) {
        self.events.on_closing(listener);
    }

    /// Register an informational Closed listener.
    pub fn on_closed(&mut self, listener: impl FnMut() + 'static) {
        self.events.on_closed(listener);
    }

    // ── Commands ──────────────────────────────────────────────────────

    pub fn can_execute(&self, command: PaneCommand) -> bool {
        match command {
            PaneCommand::Close => self.allow_close,
        }
    }

    /// Run a command through its enablement gate. Returns false when the
    /// gate refuses or the operation itself reports failure.
    pub fn execute(&mut self, command: PaneCommand) -> bool {
        if !self.can_execute(command) {
            log::debug!("pane {:?}: {} is disabled", self.id, command.name());
            return false;
        }
        match command {
            PaneCommand::Close => self.close(),
        }
    }

    /// Register a listener notified whenever command enablement may have
    /// changed (the host's command-invalidation contract).
    pub fn on_can_execute_changed(&mut self, listener: impl FnMut() + 'static) {
        self.gate.on_requery(listener);
    }

    // ── Close protocol ────────────────────────────────────────────────

    /// Two-phase cancelable removal. Raises Closing (cancelable, listeners
    /// run synchronously), removes the pane from its parent container,
    /// collapses the container if it became empty, then raises Closed.
    /// Returns false only on cancellation.
    pub fn close(&mut self) -> bool {
        if self.detached {
            log::warn!("pane {:?}: close() on an already-detached pane", self.id);
        }

        let mut event = ClosingEvent::new();
        self.events.raise_closing(&mut event);
        if event.is_cancelled() {
            log::debug!("pane {:?}: close cancelled by listener", self.id);
            return false;
        }

        if !self.detached {
            if let Some(container) = self.find_parent_container() {
                let mut container = container.borrow_mut();
                container.remove_member(self.id);
                if container.member_count() == 0 {
                    container.remove_self();
                }
            }
            self.detached = true;
        }

        self.events.raise_closed();
        true
    }

    // ── Activation protocol ───────────────────────────────────────────

    /// Whether the current input focus sits on the pane frame or inside the
    /// hosted content subtree.
    pub fn contains_focus(&self, focus: &dyn FocusContext) -> bool {
        let Some(current) = focus.focused() else {
            return false;
        };
        current == self.focus_id || self.content.as_ref().is_some_and(|c| c.contains(current))
    }

    /// Move input focus into the pane. Prefers whatever the content's focus
    /// scope last remembers, then the content's first focusable element,
    /// then the pane frame itself. Returns whether focus actually moved; a
    /// pane that already contains focus is left alone.
    pub fn activate(&mut self, focus: &mut dyn FocusContext) -> bool {
        if self.contains_focus(focus) {
            return false;
        }

        if let Some(content) = &self.content {
            if content.is_focus_scope() {
                if let Some(remembered) = content.remembered_focus() {
                    if focus.request_focus(remembered) {
                        log::trace!("pane {:?}: restored scope focus {remembered:?}", self.id);
                        return true;
                    }
                }
            }
            if let Some(first) = content.first_focusable() {
                if focus.request_focus(first) {
                    log::trace!("pane {:?}: focused first element {first:?}", self.id);
                    return true;
                }
            }
        }

        if self.focusable && focus.request_focus(self.focus_id) {
            log::trace!("pane {:?}: focused pane frame", self.id);
            return true;
        }

        false
    }

    /// Bring the pane to the foreground of its container, requesting a
    /// relayout so it is visible before focus moves, then optionally run the
    /// activation chain. Selecting an already-selected pane requests no
    /// redundant relayout.
    pub fn select_and_activate(&mut self, focus: &mut dyn FocusContext, activate: bool) {
        if let Some(container) = self.find_parent_container() {
            let mut container = container.borrow_mut();
            if container.selected() != Some(self.id) {
                container.set_selected(self.id);
                container.request_relayout();
            }
        }
        if activate {
            self.activate(focus);
        }
    }
}
