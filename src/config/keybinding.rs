use crossterm::event::{KeyCode, KeyModifiers};

use crate::error::{Error, Result};

use super::KeyBinding;

/// Parse a key string into KeyCode
pub fn parse_key(key: &str) -> Result<KeyCode> {
    let key = key.trim();

    // Single character
    let mut chars = key.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return Ok(KeyCode::Char(c));
    }

    // Named keys
    match key.to_lowercase().as_str() {
        "enter" | "return" => Ok(KeyCode::Enter),
        "escape" | "esc" => Ok(KeyCode::Esc),
        "backspace" | "back" => Ok(KeyCode::Backspace),
        "tab" => Ok(KeyCode::Tab),
        "backtab" => Ok(KeyCode::BackTab),
        "space" => Ok(KeyCode::Char(' ')),
        "up" => Ok(KeyCode::Up),
        "down" => Ok(KeyCode::Down),
        "left" => Ok(KeyCode::Left),
        "right" => Ok(KeyCode::Right),
        "home" => Ok(KeyCode::Home),
        "end" => Ok(KeyCode::End),
        "pageup" => Ok(KeyCode::PageUp),
        "pagedown" => Ok(KeyCode::PageDown),
        "delete" | "del" => Ok(KeyCode::Delete),
        "numpadenter" => Ok(KeyCode::Enter),
        "numpadadd" => Ok(KeyCode::Char('+')),
        "numpadsubtract" => Ok(KeyCode::Char('-')),
        _ => {
            if let Some(n) = key
                .to_lowercase()
                .strip_prefix('f')
                .and_then(|n| n.parse::<u8>().ok())
                .filter(|n| (1..=12).contains(n))
            {
                return Ok(KeyCode::F(n));
            }
            Err(Error::InvalidKeyBinding(format!("Unknown key: {}", key)))
        }
    }
}

/// Parse modifier string into KeyModifiers
pub fn parse_modifiers(mods: Option<&str>) -> KeyModifiers {
    let Some(mods) = mods else {
        return KeyModifiers::NONE;
    };

    let mut result = KeyModifiers::NONE;

    for part in mods.split('|') {
        let part = part.trim().to_lowercase();
        match part.as_str() {
            "control" | "ctrl" => result |= KeyModifiers::CONTROL,
            "shift" => result |= KeyModifiers::SHIFT,
            "alt" | "option" => result |= KeyModifiers::ALT,
            "super" | "command" | "cmd" => result |= KeyModifiers::SUPER,
            _ => {}
        }
    }

    result
}

/// Built-in bindings, consulted after the configured ones
pub fn default_bindings() -> Vec<KeyBinding> {
    const NAV: &str = "Dialog|Picker";

    let mut bindings = vec![
        // Always available
        KeyBinding::new("c").with_mods("Control").with_action("ForceQuit"),
        KeyBinding::new("Esc").with_action("Cancel"),
        KeyBinding::new("Enter").with_action("Select"),
        KeyBinding::new("s")
            .with_mods("Control")
            .with_mode("~HexInput")
            .with_action("Accept"),
    ];

    // Focus movement in the dialog and between picker fields
    for key in ["j", "Down", "Tab"] {
        bindings.push(KeyBinding::new(key).with_mode(NAV).with_action("MoveDown"));
    }
    for key in ["k", "Up", "BackTab"] {
        bindings.push(KeyBinding::new(key).with_mode(NAV).with_action("MoveUp"));
    }
    bindings.push(KeyBinding::new("q").with_mode(NAV).with_action("Cancel"));

    // Dialog rows
    for (key, action) in [
        ("Space", "Select"),
        ("1", "ChooseCurrent"),
        ("2", "ChooseStandard"),
        ("3", "ChooseCustom"),
        ("c", "ChooseCustom"),
        ("4", "ChooseLastCustom"),
        ("p", "TogglePrefs"),
        ("o", "Accept"),
    ] {
        bindings.push(KeyBinding::new(key).with_mode("Dialog").with_action(action));
    }

    // Picker channels
    for (key, action) in [
        ("h", "Decrease"),
        ("Left", "Decrease"),
        ("l", "Increase"),
        ("Right", "Increase"),
        ("H", "DecreaseMore"),
        ("PageDown", "DecreaseMore"),
        ("L", "IncreaseMore"),
        ("PageUp", "IncreaseMore"),
        ("#", "EnterHexInput"),
    ] {
        bindings.push(KeyBinding::new(key).with_mode("Picker").with_action(action));
    }

    bindings
}
