// velodock: dockable pane core for split-pane hosts.
//
// A `Pane` owns its identity, labels, size hint, and close permission; its
// parent container is rediscovered through an installed lookup on every use.
// Closing runs a cancelable two-phase protocol that can collapse a
// now-empty container; activation walks a fallback chain through the pane's
// content to land focus somewhere sensible.

pub mod command;
pub mod config;
pub mod event;
pub mod focus;
pub mod group;
pub mod pane;
pub mod schedule;

pub use command::{CommandGate, PaneCommand};
pub use config::{ConfigError, DockConfig};
pub use event::ClosingEvent;
pub use focus::{Content, ContentRef, FocusContext, FocusId, FocusTracker};
pub use group::{attach_pane, Container, ContainerHandle, PaneGroup};
pub use pane::interaction::{ActivationEffect, PaneInteraction};
pub use pane::{Pane, PaneId, DEFAULT_CONTENT_SIZE};
pub use schedule::{TaskPriority, TaskQueue};
