// Pointer-press handling: the first click on a pane arms a deferred
// activation check on the dispatch queue's lowest lane.

use super::PaneId;
use crate::schedule::TaskPriority;

/// Effects the host should apply after feeding a pointer event through the
/// interaction state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationEffect {
    /// Nothing to do.
    None,
    /// Enqueue a deferred activation check for the pane at
    /// [`ActivationEffect::PRIORITY`]. When the task runs, the host calls
    /// `Pane::activate`; its own already-contains-focus guard makes the
    /// re-check idempotent.
    ScheduleActivation(PaneId),
}

impl ActivationEffect {
    /// The lane deferred activation rides: below input, layout, and render
    /// work, so it never preempts in-flight interaction handling.
    pub const PRIORITY: TaskPriority = TaskPriority::Deferred;
}

/// Tracks pointer presses on panes and turns the first press of a gesture
/// into a deferred activation request. Multi-clicks never schedule.
pub struct PaneInteraction {
    /// Whether click-to-activate is armed (config: `activation.focus_follows_click`).
    enabled: bool,
    /// Pane currently under a pressed pointer, if any.
    pressed: Option<PaneId>,
}

impl PaneInteraction {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            pressed: None,
        }
    }

    /// The pane a pointer is currently pressed on.
    pub fn pressed_pane(&self) -> Option<PaneId> {
        self.pressed
    }

    /// Process a pointer press on a pane. `click_count` follows the host's
    /// multi-click detection (1 = single click, 2 = double, ...). Presses
    /// arriving while a gesture is already in flight never schedule.
    pub fn on_pointer_press(&mut self, pane: PaneId, click_count: u8) -> ActivationEffect {
        let in_flight = self.pressed.is_some();
        self.pressed = Some(pane);
        if !self.enabled || in_flight || click_count != 1 {
            return ActivationEffect::None;
        }
        ActivationEffect::ScheduleActivation(pane)
    }

    /// Process a pointer release, ending the gesture.
    pub fn on_pointer_release(&mut self) {
        self.pressed = None;
    }
}
