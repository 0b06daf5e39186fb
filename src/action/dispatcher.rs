use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::Mode;
use crate::config::{default_bindings, parse_key, parse_modifiers, Config, KeyBinding};

use super::Action;

/// Dispatches key events to actions based on configuration
#[derive(Debug, Clone)]
pub struct ActionDispatcher {
    bindings: Vec<KeyBinding>,
}

impl ActionDispatcher {
    /// Create a new dispatcher; configured bindings shadow the defaults
    pub fn new(config: &Config) -> Self {
        let mut bindings = config.bindings.clone();
        bindings.extend(default_bindings());
        Self { bindings }
    }

    /// Dispatch a key event to an action
    pub fn dispatch(&self, key: KeyEvent, mode: &Mode) -> Option<Action> {
        // First, check bindings (configured, then built-in)
        for binding in &self.bindings {
            if self.matches(binding, &key, mode) {
                return self.to_action(binding);
            }
        }

        // Handle character input in HexInput mode
        if *mode == Mode::HexInput {
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT {
                if let KeyCode::Char(c) = key.code {
                    return Some(Action::InsertChar(c));
                }
            }
            if key.code == KeyCode::Backspace {
                return Some(Action::DeleteChar);
            }
        }

        None
    }

    /// Check if a binding matches the key event and mode
    fn matches(&self, binding: &KeyBinding, key: &KeyEvent, mode: &Mode) -> bool {
        // Parse the binding key
        let Ok(binding_key) = parse_key(&binding.key) else {
            return false;
        };

        let binding_mods = parse_modifiers(binding.mods.as_deref());

        // Bindings that ask for Shift see the raw event; the rest name the
        // shifted key itself (`H`, `#`)
        let (code_matches, event_mods) = if binding_mods.contains(KeyModifiers::SHIFT) {
            (same_key_ignoring_case(binding_key, key.code), key.modifiers)
        } else {
            let key = normalize(*key);
            (binding_key == key.code, key.modifiers)
        };

        if !code_matches || binding_mods != event_mods {
            return false;
        }

        // Check mode restriction
        if let Some(mode_str) = &binding.mode {
            if !self.mode_matches(mode_str, mode) {
                return false;
            }
        }

        true
    }

    /// Check if mode restriction matches current mode
    fn mode_matches(&self, mode_str: &str, current_mode: &Mode) -> bool {
        let mode_str = mode_str.trim();

        // Handle negation (~)
        if let Some(stripped) = mode_str.strip_prefix('~') {
            return !self.mode_matches(stripped, current_mode);
        }

        // Handle multiple modes (|)
        if mode_str.contains('|') {
            return mode_str
                .split('|')
                .any(|m| self.mode_matches(m.trim(), current_mode));
        }

        self.mode_name_matches(mode_str, current_mode)
    }

    /// Check if a mode name matches
    fn mode_name_matches(&self, name: &str, current_mode: &Mode) -> bool {
        match name.to_lowercase().as_str() {
            "dialog" => matches!(current_mode, Mode::Dialog),
            "picker" => matches!(current_mode, Mode::Picker),
            "hexinput" => matches!(current_mode, Mode::HexInput),
            _ => false,
        }
    }

    /// Convert a binding to an action
    fn to_action(&self, binding: &KeyBinding) -> Option<Action> {
        if let Some(action_str) = &binding.action {
            return Action::from_str(action_str);
        }

        // Only the first character is sent
        if let Some(chars) = &binding.chars {
            if let Some(c) = chars.chars().next() {
                return Some(Action::InsertChar(c));
            }
        }

        None
    }
}

/// Terminals report shifted characters (`H`, `#`) and BackTab with SHIFT set
fn normalize(mut key: KeyEvent) -> KeyEvent {
    if matches!(key.code, KeyCode::Char(_) | KeyCode::BackTab) {
        key.modifiers.remove(KeyModifiers::SHIFT);
    }
    key
}

/// `x` and `X` are the same key once Shift is part of the binding
fn same_key_ignoring_case(binding: KeyCode, event: KeyCode) -> bool {
    match (binding, event) {
        (KeyCode::Char(a), KeyCode::Char(b)) => a.eq_ignore_ascii_case(&b),
        (a, b) => a == b,
    }
}
