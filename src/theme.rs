//! Color theme for the dialog chrome
//!
//! The colors being chosen are always drawn as true color fills; the theme
//! only covers borders, buttons and text around them.
//!
//! # Preset Themes
//!
//! - `default`: True Color theme
//! - `classic`: 16-color theme for limited terminals

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::color;

/// All color definitions for the UI
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub header: Color,
    pub bar_bg: Color,
    pub text: Color,
    pub text_muted: Color,
    pub border: Color,
    pub border_focus: Color,
    pub button: Color,
    pub button_focus: Color,
    pub key: Color,
}

impl Default for ThemeColors {
    fn default() -> Self {
        Self::default_theme()
    }
}

impl ThemeColors {
    /// Classic theme - 16-color scheme
    pub fn classic() -> Self {
        Self {
            header: Color::Cyan,
            bar_bg: Color::Black,
            text: Color::White,
            text_muted: Color::DarkGray,
            border: Color::DarkGray,
            border_focus: Color::Cyan,
            button: Color::White,
            button_focus: Color::Yellow,
            key: Color::Yellow,
        }
    }

    /// Default theme - True Color scheme
    pub fn default_theme() -> Self {
        Self {
            header: Color::Rgb(6, 182, 212),        // Cyan 400 (#06B6D4)
            bar_bg: Color::Rgb(31, 41, 55),         // Gray 800 (#1F2937)
            text: Color::Rgb(243, 244, 246),        // Gray 100 (#F3F4F6)
            text_muted: Color::Rgb(156, 163, 175),  // Gray 400 (#9CA3AF)
            border: Color::Rgb(107, 114, 128),      // Gray 500 (#6B7280)
            border_focus: Color::Rgb(6, 182, 212),  // Cyan 400 (#06B6D4)
            button: Color::Rgb(229, 231, 235),      // Gray 200 (#E5E7EB)
            button_focus: Color::Rgb(251, 191, 36), // Amber 400 (#FBBF24)
            key: Color::Rgb(245, 158, 11),          // Amber 500 (#F59E0B)
        }
    }

    /// Create ThemeColors from a preset name
    pub fn from_preset(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::default_theme()),
            "classic" => Some(Self::classic()),
            _ => None,
        }
    }
}

/// Theme color overrides as written in the config file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeColorsConfig {
    pub header: Option<String>,
    pub bar_bg: Option<String>,
    pub text: Option<String>,
    pub text_muted: Option<String>,
    pub border: Option<String>,
    pub border_focus: Option<String>,
    pub button: Option<String>,
    pub button_focus: Option<String>,
    pub key: Option<String>,
}

impl ThemeColorsConfig {
    /// Apply color overrides; unparsable values are ignored
    pub fn apply_to(&self, base: &mut ThemeColors) {
        let overrides = [
            (&self.header, &mut base.header),
            (&self.bar_bg, &mut base.bar_bg),
            (&self.text, &mut base.text),
            (&self.text_muted, &mut base.text_muted),
            (&self.border, &mut base.border),
            (&self.border_focus, &mut base.border_focus),
            (&self.button, &mut base.button),
            (&self.button_focus, &mut base.button_focus),
            (&self.key, &mut base.key),
        ];

        for (value, target) in overrides {
            let Some(value) = value else { continue };
            match parse_color(value) {
                Some(color) => *target = color,
                None => tracing::warn!(%value, "ignoring invalid theme color"),
            }
        }
    }

    /// Merge two override sets, with `other` taking precedence
    pub fn merge(self, other: ThemeColorsConfig) -> ThemeColorsConfig {
        ThemeColorsConfig {
            header: other.header.or(self.header),
            bar_bg: other.bar_bg.or(self.bar_bg),
            text: other.text.or(self.text),
            text_muted: other.text_muted.or(self.text_muted),
            border: other.border.or(self.border),
            border_focus: other.border_focus.or(self.border_focus),
            button: other.button.or(self.button),
            button_focus: other.button_focus.or(self.button_focus),
            key: other.key.or(self.key),
        }
    }
}

/// Complete theme containing colors
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,
    pub colors: ThemeColors,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            colors: ThemeColors::default_theme(),
        }
    }
}

impl Theme {
    /// Create a theme from config settings
    pub fn from_config(
        theme_name: Option<&str>,
        colors_config: Option<&ThemeColorsConfig>,
    ) -> Self {
        let preset_name = theme_name.unwrap_or("default");
        let mut colors = ThemeColors::from_preset(preset_name).unwrap_or_else(|| {
            tracing::warn!(preset = %preset_name, "unknown theme preset, using default");
            ThemeColors::default_theme()
        });

        // Apply color overrides if provided
        if let Some(config) = colors_config {
            config.apply_to(&mut colors);
        }

        Self {
            name: preset_name.to_string(),
            colors,
        }
    }
}

/// Parse a theme color string into a ratatui Color
///
/// Supports:
/// - Hex colors: "#RRGGBB" or "#RGB"
/// - Named terminal colors: "red", "darkgray", etc.
/// - 256-color index: "0" to "255"
pub fn parse_color(s: &str) -> Option<Color> {
    let s = s.trim();

    // Hex color
    if let Some(hex) = s.strip_prefix('#') {
        return color::parse_hex(hex).map(|rgba| rgba.to_color());
    }

    // 256-color index
    if let Ok(index) = u8::from_str(s) {
        return Some(Color::Indexed(index));
    }

    parse_named_color(s)
}

/// Parse a named terminal color
fn parse_named_color(s: &str) -> Option<Color> {
    match s.to_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "darkgray" | "darkgrey" | "dark_gray" | "dark_grey" => Some(Color::DarkGray),
        "white" => Some(Color::White),
        "reset" | "default" => Some(Color::Reset),
        _ => None,
    }
}
