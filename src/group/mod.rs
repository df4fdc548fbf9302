// Container contract: the capability a pane requires from its owning group,
// plus PaneGroup, a minimal ordered-member reference implementation.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use crate::pane::{Pane, PaneId};

/// Shared handle to a pane's parent container, handed out by the container
/// lookup a host installs on each pane.
pub type ContainerHandle = Rc<RefCell<dyn Container>>;

/// What the close and selection protocols need from the owning group. The
/// real layout tree implements this; `PaneGroup` is the in-crate reference.
pub trait Container {
    /// Remove the pane from the member collection. Unknown ids are ignored.
    fn remove_member(&mut self, pane: PaneId);

    /// Number of member panes currently in the container.
    fn member_count(&self) -> usize;

    /// Remove the container itself from its own parent (cascading collapse
    /// of a now-empty container, one level only).
    fn remove_self(&mut self);

    /// Make the given pane the selected member. Unknown ids are ignored.
    fn set_selected(&mut self, pane: PaneId);

    /// The currently selected member, if any.
    fn selected(&self) -> Option<PaneId>;

    /// Ask the container to re-run layout so a newly selected pane becomes
    /// visible before focus moves.
    fn request_relayout(&mut self);
}

/// Ordered group of panes with one selected member. Hosts mirror the
/// selection slot into each member pane's `is_selected` flag after applying
/// selection changes.
pub struct PaneGroup {
    members: Vec<PaneId>,
    selected: Option<PaneId>,
    detached: bool,
    relayout_pending: bool,
}

impl PaneGroup {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            selected: None,
            detached: false,
            relayout_pending: false,
        }
    }

    /// Append a member pane. The first member becomes selected.
    pub fn add_member(&mut self, pane: PaneId) {
        self.members.push(pane);
        if self.selected.is_none() {
            self.selected = Some(pane);
        }
    }

    /// All member panes in order.
    pub fn members(&self) -> &[PaneId] {
        &self.members
    }

    /// Whether `remove_self` has collapsed this group.
    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Consume a pending relayout request. Returns true at most once per
    /// request.
    pub fn take_relayout_request(&mut self) -> bool {
        std::mem::take(&mut self.relayout_pending)
    }

    /// Wrap a group in the shared handle form panes resolve to.
    pub fn into_handle(self) -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(self))
    }
}

impl Default for PaneGroup {
    fn default() -> Self {
        Self::new()
    }
}

/// Register a pane as a member of the group and install the container lookup
/// that lets the pane rediscover it at call time.
pub fn attach_pane(group: &Rc<RefCell<PaneGroup>>, pane: &mut Pane) {
    group.borrow_mut().add_member(pane.id());
    let weak: Weak<RefCell<PaneGroup>> = Rc::downgrade(group);
    pane.set_container_lookup(move || weak.upgrade().map(|g| g as ContainerHandle));
}

impl Container for PaneGroup {
    fn remove_member(&mut self, pane: PaneId) {
        let Some(index) = self.members.iter().position(|&id| id == pane) else {
            return;
        };
        self.members.remove(index);
        // Selection repair: removing the selected member selects the nearest
        // remaining neighbor.
        if self.selected == Some(pane) {
            self.selected = if self.members.is_empty() {
                None
            } else {
                Some(self.members[index.min(self.members.len() - 1)])
            };
        }
    }

    fn member_count(&self) -> usize {
        self.members.len()
    }

    fn remove_self(&mut self) {
        self.detached = true;
    }

    fn set_selected(&mut self, pane: PaneId) {
        if self.members.contains(&pane) {
            self.selected = Some(pane);
        }
    }

    fn selected(&self) -> Option<PaneId> {
        self.selected
    }

    fn request_relayout(&mut self) {
        self.relayout_pending = true;
    }
}
