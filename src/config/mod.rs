// Embedder configuration: defaults applied to newly created panes and the
// click-activation behavior switch. Loaded from a TOML file.

use serde::Deserialize;
use std::path::Path;

use crate::pane::DEFAULT_CONTENT_SIZE;

/// Top-level dock configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DockConfig {
    pub pane: PaneConfig,
    pub activation: ActivationConfig,
}

/// Defaults applied to new panes.
#[derive(Debug, Clone, PartialEq)]
pub struct PaneConfig {
    /// Docked-size hint for new panes, in pixels. Must be > 0.
    pub content_size: f32,
    /// Whether new panes may be closed.
    pub allow_close: bool,
    /// Whether the pane frame itself can take focus as the activation
    /// chain's last resort.
    pub focusable: bool,
}

/// Activation behavior.
#[derive(Debug, Clone, PartialEq)]
pub struct ActivationConfig {
    /// Whether the first single click on a pane schedules a deferred
    /// activation check.
    pub focus_follows_click: bool,
}

/// Errors that can occur during config loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("parse error: {0}")]
    Parse(String),
    #[error("validation error: {0}")]
    Validation(String),
}

// ── Serde intermediate structs ──────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(default)]
struct RawConfig {
    pane: RawPaneConfig,
    activation: RawActivationConfig,
}

#[derive(Deserialize)]
#[serde(default)]
struct RawPaneConfig {
    content_size: f32,
    allow_close: bool,
    focusable: bool,
}

impl Default for RawPaneConfig {
    fn default() -> Self {
        Self {
            content_size: DEFAULT_CONTENT_SIZE,
            allow_close: true,
            focusable: true,
        }
    }
}

#[derive(Deserialize)]
#[serde(default)]
struct RawActivationConfig {
    focus_follows_click: bool,
}

impl Default for RawActivationConfig {
    fn default() -> Self {
        Self {
            focus_follows_click: true,
        }
    }
}

// ── Default impls ───────────────────────────────────────────────────────

impl Default for PaneConfig {
    fn default() -> Self {
        Self {
            content_size: DEFAULT_CONTENT_SIZE,
            allow_close: true,
            focusable: true,
        }
    }
}

impl Default for ActivationConfig {
    fn default() -> Self {
        Self {
            focus_follows_click: true,
        }
    }
}

// ── DockConfig implementation ───────────────────────────────────────────

impl DockConfig {
    /// Load config from a TOML file path. Returns defaults if the file does
    /// not exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::from_toml(&contents),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::Io(e)),
        }
    }

    /// Parse a TOML string into a DockConfig.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let raw: RawConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))?;

        let config = Self {
            pane: PaneConfig {
                content_size: raw.pane.content_size,
                allow_close: raw.pane.allow_close,
                focusable: raw.pane.focusable,
            },
            activation: ActivationConfig {
                focus_follows_click: raw.activation.focus_follows_click,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate the config, returning an error if any values are out of range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pane.content_size > 0.0) {
            return Err(ConfigError::Validation(
                "pane content_size must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Default configuration as commented TOML text.
    pub fn print_default() -> String {
        format!(
            "\
[pane]
# Docked-size hint for new panes, in pixels
content_size = {DEFAULT_CONTENT_SIZE}
# Whether new panes may be closed
allow_close = true
# Whether the pane frame itself can take focus
focusable = true

[activation]
# First single click on a pane moves focus into it
focus_follows_click = true
"
        )
    }
}
