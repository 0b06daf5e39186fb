use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::color::Rgba;
use crate::theme::ThemeColorsConfig;

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Log filter used when `SETCOLOR_LOG` is not set (e.g. "debug")
    #[serde(default)]
    pub log_level: Option<String>,

    #[serde(default)]
    pub theme: ThemeConfig,

    /// Standard colors keyed by lower-case setting name (e.g. `wire = "#418dd9"`)
    #[serde(default)]
    pub standard_colors: BTreeMap<String, Rgba>,

    #[serde(default)]
    pub bindings: Vec<KeyBinding>,
}

impl Config {
    /// Parse a config file's contents
    pub fn from_toml(content: &str) -> crate::error::Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Merge two configs, with `other` taking precedence
    pub fn merge(self, other: Config) -> Config {
        let mut standard_colors = self.standard_colors;
        standard_colors.extend(other.standard_colors);

        // Earlier bindings win in the dispatcher, so `other` goes first
        let mut bindings = other.bindings;
        bindings.extend(self.bindings);

        Config {
            log_level: other.log_level.or(self.log_level),
            theme: ThemeConfig {
                preset: other.theme.preset.or(self.theme.preset),
                colors: self.theme.colors.merge(other.theme.colors),
            },
            standard_colors,
            bindings,
        }
    }

    /// Standard color configured for a setting name (case insensitive)
    pub fn standard_color(&self, message: &str) -> Option<Rgba> {
        self.standard_colors.get(&message.to_lowercase()).copied()
    }
}

/// Theme selection
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ThemeConfig {
    /// Preset name ("default" or "classic")
    #[serde(default)]
    pub preset: Option<String>,

    /// Per-color overrides on top of the preset
    #[serde(default)]
    pub colors: ThemeColorsConfig,
}

/// Key binding configuration (Alacritty-style)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KeyBinding {
    /// Key to bind (e.g., "j", "Enter", "Esc", "F1")
    pub key: String,

    /// Modifier keys (e.g., "Control", "Alt", "Control|Alt")
    #[serde(default)]
    pub mods: Option<String>,

    /// Mode restriction (e.g., "Dialog", "Picker|HexInput", "~HexInput")
    #[serde(default)]
    pub mode: Option<String>,

    /// Built-in action to execute
    #[serde(default)]
    pub action: Option<String>,

    /// Characters to send (for HexInput mode)
    #[serde(default)]
    pub chars: Option<String>,
}

impl KeyBinding {
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            mods: None,
            mode: None,
            action: None,
            chars: None,
        }
    }

    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    pub fn with_mods(mut self, mods: impl Into<String>) -> Self {
        self.mods = Some(mods.into());
        self
    }

    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.mode = Some(mode.into());
        self
    }
}
