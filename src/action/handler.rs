use crate::app::{App, Focus};
use crate::error::Result;
use crate::picker::ColorPicker;

use super::Action;

/// Handles action execution for the dialog
pub struct ActionHandler;

impl ActionHandler {
    /// Handle an action; `picker` is opened for the custom color row
    pub fn handle(app: &mut App, action: Action, picker: &mut dyn ColorPicker) -> Result<()> {
        match action {
            // Navigation
            Action::MoveUp => app.focus_prev(),
            Action::MoveDown => app.focus_next(),
            Action::Select => Self::handle_select(app, picker)?,

            // Row choices
            Action::ChooseCurrent => app.dialog.choose_current(),
            Action::ChooseStandard => app.dialog.choose_standard(),
            Action::ChooseCustom => {
                app.dialog.choose_custom(picker)?;
            }
            Action::ChooseLastCustom => app.dialog.choose_last_custom(),
            Action::TogglePrefs => app.dialog.toggle_prefs(),

            // Closing
            Action::Accept => app.dialog.accept(),
            Action::Cancel | Action::ForceQuit => app.dialog.reject(),

            // Picker-only actions
            Action::Increase
            | Action::Decrease
            | Action::IncreaseMore
            | Action::DecreaseMore
            | Action::EnterHexInput
            | Action::InsertChar(_)
            | Action::DeleteChar => {}
        }

        Ok(())
    }

    /// Activate the focused element
    fn handle_select(app: &mut App, picker: &mut dyn ColorPicker) -> Result<()> {
        match app.focus {
            Focus::Current => app.dialog.choose_current(),
            Focus::Standard => app.dialog.choose_standard(),
            Focus::Custom => {
                app.dialog.choose_custom(picker)?;
            }
            Focus::Prefs => app.dialog.toggle_prefs(),
            Focus::Ok => app.dialog.accept(),
            Focus::Cancel => app.dialog.reject(),
        }
        Ok(())
    }
}
