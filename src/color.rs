//! RGBA color value used by the dialog
//!
//! Colors are written the same way everywhere a user sees them: `#rrggbb`
//! in lower case. Parsing also accepts the short `#rgb` form, `#aarrggbb`
//! with a leading alpha byte, and a handful of named colors.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// An 8-bit-per-channel color with alpha
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::rgb(0, 0, 0);
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    /// Opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn is_opaque(&self) -> bool {
        self.a == 255
    }

    /// `#rrggbb`, alpha omitted
    pub fn name(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// `#aarrggbb`
    pub fn name_with_alpha(&self) -> String {
        format!("#{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
    }

    /// True-color value for ratatui fills (terminals have no alpha)
    pub fn to_color(&self) -> Color {
        Color::Rgb(self.r, self.g, self.b)
    }

    /// Perceived brightness in 0.0..=1.0 (Rec. 601 weights)
    pub fn brightness(&self) -> f32 {
        (0.299 * self.r as f32 + 0.587 * self.g as f32 + 0.114 * self.b as f32) / 255.0
    }

    /// Black or white, whichever reads better on top of this color
    pub fn contrasting_text(&self) -> Rgba {
        if self.brightness() > 0.5 {
            Rgba::BLACK
        } else {
            Rgba::WHITE
        }
    }
}

impl Default for Rgba {
    fn default() -> Self {
        Rgba::BLACK
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            f.write_str(&self.name())
        } else {
            f.write_str(&self.name_with_alpha())
        }
    }
}

impl FromStr for Rgba {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        let parsed = if let Some(hex) = s.strip_prefix('#') {
            parse_hex(hex)
        } else {
            parse_named(s)
        };

        parsed.ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Rgba {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_string()
    }
}

/// Parse hex digits without the leading `#`
///
/// Accepts `rgb`, `rrggbb` and `aarrggbb`.
pub(crate) fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    let byte = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

    match hex.len() {
        // rgb -> rrggbb
        3 => {
            let r = u8::from_str_radix(&hex[0..1].repeat(2), 16).ok()?;
            let g = u8::from_str_radix(&hex[1..2].repeat(2), 16).ok()?;
            let b = u8::from_str_radix(&hex[2..3].repeat(2), 16).ok()?;
            Some(Rgba::rgb(r, g, b))
        }
        6 => Some(Rgba::rgb(byte(0..2)?, byte(2..4)?, byte(4..6)?)),
        8 => Some(Rgba::new(byte(2..4)?, byte(4..6)?, byte(6..8)?, byte(0..2)?)),
        _ => None,
    }
}

/// SVG color names
fn parse_named(s: &str) -> Option<Rgba> {
    match s.to_lowercase().as_str() {
        "black" => Some(Rgba::rgb(0, 0, 0)),
        "white" => Some(Rgba::rgb(255, 255, 255)),
        "red" => Some(Rgba::rgb(255, 0, 0)),
        "green" => Some(Rgba::rgb(0, 128, 0)),
        "blue" => Some(Rgba::rgb(0, 0, 255)),
        "yellow" => Some(Rgba::rgb(255, 255, 0)),
        "cyan" => Some(Rgba::rgb(0, 255, 255)),
        "magenta" => Some(Rgba::rgb(255, 0, 255)),
        "gray" | "grey" => Some(Rgba::rgb(128, 128, 128)),
        "orange" => Some(Rgba::rgb(255, 165, 0)),
        "purple" => Some(Rgba::rgb(128, 0, 128)),
        "transparent" => Some(Rgba::new(0, 0, 0, 0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_6_digits() {
        assert_eq!("#FF5733".parse::<Rgba>().unwrap(), Rgba::rgb(255, 87, 51));
    }

    #[test]
    fn test_parse_hex_3_digits() {
        assert_eq!("#F53".parse::<Rgba>().unwrap(), Rgba::rgb(255, 85, 51));
    }

    #[test]
    fn test_parse_hex_with_alpha() {
        let color: Rgba = "#80ff0000".parse().unwrap();
        assert_eq!(color, Rgba::new(255, 0, 0, 128));
        assert!(!color.is_opaque());
    }

    #[test]
    fn test_parse_invalid() {
        assert!("#GG0000".parse::<Rgba>().is_err());
        assert!("#FF".parse::<Rgba>().is_err());
        assert!("#FFFFFFF".parse::<Rgba>().is_err());
        assert!("".parse::<Rgba>().is_err());
        assert!("chartreuse-ish".parse::<Rgba>().is_err());
    }

    #[test]
    fn test_parse_named_and_whitespace() {
        assert_eq!("  Red ".parse::<Rgba>().unwrap(), Rgba::rgb(255, 0, 0));
        assert_eq!("green".parse::<Rgba>().unwrap(), Rgba::rgb(0, 128, 0));
        assert_eq!("GREY".parse::<Rgba>().unwrap(), Rgba::rgb(128, 128, 128));
    }

    #[test]
    fn test_name_is_lowercase_without_alpha() {
        assert_eq!(Rgba::rgb(255, 0, 171).name(), "#ff00ab");
        assert_eq!(Rgba::new(255, 0, 171, 10).name(), "#ff00ab");
    }

    #[test]
    fn test_display() {
        assert_eq!(Rgba::rgb(0, 0, 255).to_string(), "#0000ff");
        assert_eq!(Rgba::new(0, 0, 255, 0x40).to_string(), "#400000ff");
    }

    #[test]
    fn test_to_color() {
        assert_eq!(Rgba::rgb(1, 2, 3).to_color(), Color::Rgb(1, 2, 3));
    }

    #[test]
    fn test_brightness_weights() {
        assert_eq!(Rgba::BLACK.brightness(), 0.0);
        assert!((Rgba::WHITE.brightness() - 1.0).abs() < 1e-6);
        // Green dominates the Rec. 601 weights
        assert!(Rgba::rgb(0, 255, 0).brightness() > 0.5);
        assert!(Rgba::rgb(255, 0, 0).brightness() < 0.5);
    }

    #[test]
    fn test_contrasting_text() {
        assert_eq!(Rgba::WHITE.contrasting_text(), Rgba::BLACK);
        assert_eq!(Rgba::rgb(255, 255, 0).contrasting_text(), Rgba::BLACK);
        assert_eq!(Rgba::rgb(0, 0, 255).contrasting_text(), Rgba::WHITE);
        assert_eq!(Rgba::BLACK.contrasting_text(), Rgba::WHITE);
    }
}
