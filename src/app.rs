use crate::action::{ActionDispatcher, ActionHandler};
use crate::config::Config;
use crate::dialog::{ColorChoiceDialog, DialogOutcome};
use crate::error::Result;
use crate::theme::Theme;
use crate::tui::{render, Event, EventHandler, Terminal, TerminalColorPicker};

/// Input mode, used to restrict key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    #[default]
    Dialog,
    Picker,
    HexInput,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mode::Dialog => write!(f, "Dialog"),
            Mode::Picker => write!(f, "Picker"),
            Mode::HexInput => write!(f, "Hex"),
        }
    }
}

/// Focusable elements of the dialog, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Current,
    Standard,
    Custom,
    Prefs,
    Ok,
    Cancel,
}

impl Focus {
    const ORDER: [Focus; 6] = [
        Focus::Current,
        Focus::Standard,
        Focus::Custom,
        Focus::Prefs,
        Focus::Ok,
        Focus::Cancel,
    ];

    fn available(has_prefs: bool) -> impl Iterator<Item = Focus> {
        Self::ORDER
            .into_iter()
            .filter(move |f| has_prefs || *f != Focus::Prefs)
    }

    /// Next element, wrapping; the checkbox is skipped when absent
    pub fn next(self, has_prefs: bool) -> Self {
        let order: Vec<Focus> = Self::available(has_prefs).collect();
        let idx = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(idx + 1) % order.len()]
    }

    /// Previous element, wrapping
    pub fn prev(self, has_prefs: bool) -> Self {
        let order: Vec<Focus> = Self::available(has_prefs).collect();
        let idx = order.iter().position(|f| *f == self).unwrap_or(0);
        order[(idx + order.len() - 1) % order.len()]
    }
}

/// Main application state
pub struct App {
    pub dialog: ColorChoiceDialog,
    pub focus: Focus,
    pub mode: Mode,
    pub theme: Theme,
    action_dispatcher: ActionDispatcher,
}

impl App {
    /// Create a new application instance around a dialog
    pub fn new(dialog: ColorChoiceDialog, config: &Config) -> Self {
        let theme = Theme::from_config(config.theme.preset.as_deref(), Some(&config.theme.colors));

        Self {
            dialog,
            focus: Focus::default(),
            mode: Mode::Dialog,
            theme,
            action_dispatcher: ActionDispatcher::new(config),
        }
    }

    pub fn dispatcher(&self) -> &ActionDispatcher {
        &self.action_dispatcher
    }

    pub fn has_prefs(&self) -> bool {
        self.dialog.prefs().is_present()
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next(self.has_prefs());
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev(self.has_prefs());
    }

    /// Run the dialog until it is accepted or cancelled
    pub fn run(&mut self, terminal: &mut Terminal) -> Result<DialogOutcome> {
        let event_handler = EventHandler::default();
        // The picker borrows these while the handler holds `self` mutably
        let picker_dispatcher = self.action_dispatcher.clone();
        let picker_theme = self.theme.clone();
        tracing::info!(message = %self.dialog.message(), "color dialog opened");

        loop {
            if let Some(outcome) = self.dialog.outcome() {
                return Ok(outcome);
            }

            terminal.draw(|frame| render(frame, self))?;

            match event_handler.poll()? {
                Some(Event::Key(key)) => {
                    let Some(action) = self.action_dispatcher.dispatch(key, &self.mode) else {
                        continue;
                    };
                    let mut picker = TerminalColorPicker::new(
                        terminal,
                        &event_handler,
                        &picker_dispatcher,
                        &picker_theme,
                    );
                    ActionHandler::handle(self, action, &mut picker)?;
                }
                // Terminal handles resize automatically
                Some(Event::Resize) | Some(Event::Tick) | None => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_display() {
        assert_eq!(format!("{}", Mode::Dialog), "Dialog");
        assert_eq!(format!("{}", Mode::Picker), "Picker");
        assert_eq!(format!("{}", Mode::HexInput), "Hex");
    }

    #[test]
    fn test_focus_cycle_with_prefs() {
        assert_eq!(Focus::Custom.next(true), Focus::Prefs);
        assert_eq!(Focus::Cancel.next(true), Focus::Current);
        assert_eq!(Focus::Current.prev(true), Focus::Cancel);
    }

    #[test]
    fn test_focus_cycle_skips_absent_prefs() {
        assert_eq!(Focus::Custom.next(false), Focus::Ok);
        assert_eq!(Focus::Ok.prev(false), Focus::Custom);
    }
}
