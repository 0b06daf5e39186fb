//! Custom color picker
//!
//! The dialog only knows the [`ColorPicker`] trait: something that blocks
//! until the user either confirms a color or dismisses the picker.
//! [`RgbPicker`] holds the state of the terminal picker; the event loop
//! that drives it lives in `tui::picker`.

use crate::action::Action;
use crate::app::Mode;
use crate::color::{self, Rgba};
use crate::error::Result;

/// Modal color picker
pub trait ColorPicker {
    /// Ask the user for a color, starting from `initial`.
    ///
    /// Returns `Ok(None)` when the picker is dismissed without a color.
    fn pick(&mut self, initial: Rgba, title: &str) -> Result<Option<Rgba>>;
}

impl<F> ColorPicker for F
where
    F: FnMut(Rgba, &str) -> Option<Rgba>,
{
    fn pick(&mut self, initial: Rgba, title: &str) -> Result<Option<Rgba>> {
        Ok(self(initial, title))
    }
}

/// Step size for the "more" adjustments
const COARSE_STEP: u8 = 16;

/// Maximum digits in the hex field
const HEX_MAX_LEN: usize = 6;

/// Picker field that currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PickerField {
    #[default]
    Red,
    Green,
    Blue,
    Hex,
}

impl PickerField {
    const ALL: [PickerField; 4] = [
        PickerField::Red,
        PickerField::Green,
        PickerField::Blue,
        PickerField::Hex,
    ];

    fn index(self) -> usize {
        Self::ALL.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    pub fn label(self) -> &'static str {
        match self {
            PickerField::Red => "Red",
            PickerField::Green => "Green",
            PickerField::Blue => "Blue",
            PickerField::Hex => "Hex",
        }
    }
}

/// Result of feeding an action to the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerStatus {
    /// Still open
    Open,
    /// Confirmed with a color
    Picked(Rgba),
    /// Dismissed
    Dismissed,
}

/// State of the RGB picker
#[derive(Debug, Clone)]
pub struct RgbPicker {
    pub title: String,
    pub color: Rgba,
    pub field: PickerField,
    /// Hex digits typed so far, without `#`
    pub hex_input: String,
    pub editing_hex: bool,
}

impl RgbPicker {
    pub fn new(initial: Rgba, title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            color: initial,
            field: PickerField::default(),
            hex_input: String::new(),
            editing_hex: false,
        }
    }

    /// Mode used for key dispatch
    pub fn mode(&self) -> Mode {
        if self.editing_hex {
            Mode::HexInput
        } else {
            Mode::Picker
        }
    }

    /// Value of a channel field (`None` for the hex field)
    pub fn channel(&self, field: PickerField) -> Option<u8> {
        match field {
            PickerField::Red => Some(self.color.r),
            PickerField::Green => Some(self.color.g),
            PickerField::Blue => Some(self.color.b),
            PickerField::Hex => None,
        }
    }

    fn channel_mut(&mut self) -> Option<&mut u8> {
        match self.field {
            PickerField::Red => Some(&mut self.color.r),
            PickerField::Green => Some(&mut self.color.g),
            PickerField::Blue => Some(&mut self.color.b),
            PickerField::Hex => None,
        }
    }

    fn adjust(&mut self, delta: i16) {
        if let Some(value) = self.channel_mut() {
            *value = (*value as i16 + delta).clamp(0, u8::MAX as i16) as u8;
        }
    }

    fn begin_hex_input(&mut self) {
        self.field = PickerField::Hex;
        self.editing_hex = true;
        self.hex_input = self.color.name().trim_start_matches('#').to_string();
    }

    /// Apply the hex buffer; an invalid buffer stays for further editing
    fn commit_hex_input(&mut self) {
        match color::parse_hex(&self.hex_input) {
            Some(parsed) => {
                self.color = Rgba::new(parsed.r, parsed.g, parsed.b, self.color.a);
                self.editing_hex = false;
            }
            None => {
                tracing::debug!(input = %self.hex_input, "ignoring invalid hex input");
            }
        }
    }

    /// Feed one action to the picker
    pub fn handle(&mut self, action: &Action) -> PickerStatus {
        if self.editing_hex {
            return self.handle_hex_input(action);
        }

        match action {
            Action::MoveDown => self.field = self.field.next(),
            Action::MoveUp => self.field = self.field.prev(),
            Action::Increase => self.adjust(1),
            Action::Decrease => self.adjust(-1),
            Action::IncreaseMore => self.adjust(COARSE_STEP as i16),
            Action::DecreaseMore => self.adjust(-(COARSE_STEP as i16)),
            Action::EnterHexInput => self.begin_hex_input(),
            Action::Select if self.field == PickerField::Hex => self.begin_hex_input(),
            Action::Select | Action::Accept => return PickerStatus::Picked(self.color),
            Action::Cancel | Action::ForceQuit => return PickerStatus::Dismissed,
            _ => {}
        }

        PickerStatus::Open
    }

    fn handle_hex_input(&mut self, action: &Action) -> PickerStatus {
        match action {
            Action::InsertChar(c) if c.is_ascii_hexdigit() => {
                if self.hex_input.len() < HEX_MAX_LEN {
                    self.hex_input.push(c.to_ascii_lowercase());
                }
            }
            Action::DeleteChar => {
                self.hex_input.pop();
            }
            Action::Select | Action::Accept => self.commit_hex_input(),
            Action::Cancel => self.editing_hex = false,
            Action::ForceQuit => return PickerStatus::Dismissed,
            _ => {}
        }

        PickerStatus::Open
    }
}
