// Command surface a pane exposes to menus, buttons, and keybindings, and the
// gate that tells the host when its enablement must be re-queried.

/// Commands a pane can be asked to run by the host's dispatch mechanism.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaneCommand {
    /// Close the pane through the cancelable close protocol.
    Close,
}

impl PaneCommand {
    pub const fn name(&self) -> &'static str {
        match self {
            PaneCommand::Close => "Close Pane",
        }
    }

    pub const fn description(&self) -> &'static str {
        match self {
            PaneCommand::Close => "Close this pane and collapse its group if empty",
        }
    }

    /// Suggested default keybinding for menu display.
    pub const fn keybinding(&self) -> &'static str {
        match self {
            PaneCommand::Close => "Cmd+W",
        }
    }
}

/// Requery hook registry. The pane invalidates the gate whenever a command's
/// enablement input changes (today: `allow_close`), so the host can re-run
/// its can-execute checks.
#[derive(Default)]
pub struct CommandGate {
    requery: Vec<Box<dyn FnMut()>>,
}

impl CommandGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a listener notified when command enablement may have changed.
    pub fn on_requery(&mut self, listener: impl FnMut() + 'static) {
        self.requery.push(Box::new(listener));
    }

    /// Notify every requery listener.
    pub(crate) fn invalidate(&mut self) {
        for listener in &mut self.requery {
            listener();
        }
    }
}
