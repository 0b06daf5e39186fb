//! Color choice dialog state
//!
//! Holds the four colors the dialog juggles (current, standard, last custom
//! and selected) plus the optional "make default" checkbox. Rendering and key
//! handling live elsewhere; everything here is plain state.

use crate::color::Rgba;
use crate::error::Result;
use crate::picker::ColorPicker;

/// The "make this the default color" checkbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefsCheckbox {
    /// Dialog was built without the checkbox
    Absent,
    Present { checked: bool },
}

impl PrefsCheckbox {
    pub fn is_checked(&self) -> bool {
        matches!(self, PrefsCheckbox::Present { checked: true })
    }

    pub fn is_present(&self) -> bool {
        matches!(self, PrefsCheckbox::Present { .. })
    }
}

/// How the dialog was closed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogOutcome {
    Accepted,
    Cancelled,
}

/// Modal dialog for choosing the color of one named setting
#[derive(Debug, Clone)]
pub struct ColorChoiceDialog {
    message: String,
    current_color: Rgba,
    standard_color: Rgba,
    custom_color: Rgba,
    selected_color: Rgba,
    prefs: PrefsCheckbox,
    outcome: Option<DialogOutcome>,
}

impl ColorChoiceDialog {
    /// Create a dialog for `message` (e.g. "Wire")
    ///
    /// The selection and the custom row both start out as `current_color`.
    pub fn new(
        message: impl Into<String>,
        current_color: Rgba,
        standard_color: Rgba,
        ask_prefs: bool,
    ) -> Self {
        let prefs = if ask_prefs {
            PrefsCheckbox::Present { checked: false }
        } else {
            PrefsCheckbox::Absent
        };

        Self {
            message: message.into(),
            current_color,
            standard_color,
            custom_color: current_color,
            selected_color: current_color,
            prefs,
            outcome: None,
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn current_color(&self) -> Rgba {
        self.current_color
    }

    pub fn standard_color(&self) -> Rgba {
        self.standard_color
    }

    /// Last color confirmed in the custom picker
    pub fn custom_color(&self) -> Rgba {
        self.custom_color
    }

    /// Latest selection; not reset when the dialog is cancelled
    pub fn selected_color(&self) -> Rgba {
        self.selected_color
    }

    pub fn prefs(&self) -> PrefsCheckbox {
        self.prefs
    }

    /// Whether the user asked to make the selection the default
    pub fn is_prefs_color(&self) -> bool {
        self.prefs.is_checked()
    }

    pub fn outcome(&self) -> Option<DialogOutcome> {
        self.outcome
    }

    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }

    pub fn choose_current(&mut self) {
        self.set_selected(self.current_color);
    }

    pub fn choose_standard(&mut self) {
        self.set_selected(self.standard_color);
    }

    pub fn choose_last_custom(&mut self) {
        self.set_selected(self.custom_color);
    }

    /// Run the custom picker seeded with the current selection.
    ///
    /// Returns `Ok(true)` if a color was picked. A dismissed picker leaves
    /// everything as it was.
    pub fn choose_custom(&mut self, picker: &mut dyn ColorPicker) -> Result<bool> {
        if self.is_finished() {
            return Ok(false);
        }

        let title = self.picker_title();
        tracing::debug!(%title, initial = %self.selected_color, "opening custom color picker");

        let Some(color) = picker.pick(self.selected_color, &title)? else {
            tracing::debug!("custom color picker dismissed");
            return Ok(false);
        };

        self.set_selected(color);
        self.custom_color = color;
        Ok(true)
    }

    pub fn toggle_prefs(&mut self) {
        if let PrefsCheckbox::Present { checked } = self.prefs {
            self.set_prefs_checked(!checked);
        }
    }

    /// No effect when the checkbox is absent
    pub fn set_prefs_checked(&mut self, checked: bool) {
        if self.is_finished() {
            return;
        }
        if let PrefsCheckbox::Present { .. } = self.prefs {
            self.prefs = PrefsCheckbox::Present { checked };
        }
    }

    pub fn accept(&mut self) {
        self.finish(DialogOutcome::Accepted);
    }

    /// Cancel button, Esc, or closing the window
    pub fn reject(&mut self) {
        self.finish(DialogOutcome::Cancelled);
    }

    fn finish(&mut self, outcome: DialogOutcome) {
        if self.outcome.is_none() {
            tracing::info!(?outcome, selected = %self.selected_color, "color dialog closed");
            self.outcome = Some(outcome);
        }
    }

    fn set_selected(&mut self, color: Rgba) {
        if self.is_finished() {
            tracing::debug!(%color, "ignoring selection on a closed dialog");
            return;
        }
        tracing::debug!(%color, "selected color changed");
        self.selected_color = color;
    }

    fn lower_message(&self) -> String {
        self.message.to_lowercase()
    }

    pub fn window_title(&self) -> String {
        format!("Set {} Color...", self.message)
    }

    pub fn prompt(&self) -> String {
        format!("Choose a new {} color.", self.lower_message())
    }

    pub fn current_label(&self) -> String {
        format!(
            "current {} color ({})",
            self.lower_message(),
            self.current_color.name()
        )
    }

    pub fn standard_label(&self) -> String {
        format!(
            "standard {} color ({})",
            self.lower_message(),
            self.standard_color.name()
        )
    }

    pub fn custom_label(&self) -> String {
        format!("custom color ({})", self.custom_color.name())
    }

    pub fn selected_label(&self) -> String {
        format!("selected color ({})", self.selected_color.name())
    }

    /// Checkbox text, if the checkbox exists
    pub fn prefs_label(&self) -> Option<String> {
        self.prefs
            .is_present()
            .then(|| format!("Make this the default {} color", self.lower_message()))
    }

    pub fn picker_title(&self) -> String {
        format!("Select custom {} color", self.lower_message())
    }

    /// Result lines printed for the caller: `color=#rrggbb`, `make_default=...`
    pub fn report(&self) -> String {
        format!(
            "color={}\nmake_default={}",
            self.selected_color.name(),
            self.is_prefs_color()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: Rgba = Rgba::rgb(255, 0, 0);
    const GREEN: Rgba = Rgba::rgb(0, 255, 0);
    const BLUE: Rgba = Rgba::rgb(0, 0, 255);

    #[test]
    fn test_new_selects_current() {
        let dialog = ColorChoiceDialog::new("Wire", RED, GREEN, false);
        assert_eq!(dialog.selected_color(), RED);
        assert_eq!(dialog.custom_color(), RED);
        assert_eq!(dialog.outcome(), None);
    }

    #[test]
    fn test_choose_rows() {
        let mut dialog = ColorChoiceDialog::new("Wire", RED, GREEN, false);
        dialog.choose_standard();
        assert_eq!(dialog.selected_color(), GREEN);
        dialog.choose_current();
        assert_eq!(dialog.selected_color(), RED);
    }

    #[test]
    fn test_choose_custom_dismissed() {
        let mut dialog = ColorChoiceDialog::new("Wire", RED, GREEN, false);
        dialog.choose_standard();
        let mut picker = |_: Rgba, _: &str| -> Option<Rgba> { None };
        assert!(!dialog.choose_custom(&mut picker).unwrap());
        assert_eq!(dialog.selected_color(), GREEN);
        assert_eq!(dialog.custom_color(), RED);
    }

    #[test]
    fn test_choose_custom_seeds_picker_with_selection() {
        let mut dialog = ColorChoiceDialog::new("Wire", RED, GREEN, false);
        dialog.choose_standard();

        let mut seen = None;
        let mut picker = |initial: Rgba, title: &str| -> Option<Rgba> {
            seen = Some((initial, title.to_string()));
            Some(BLUE)
        };
        assert!(dialog.choose_custom(&mut picker).unwrap());

        assert_eq!(seen, Some((GREEN, "Select custom wire color".to_string())));
        assert_eq!(dialog.selected_color(), BLUE);
        assert_eq!(dialog.custom_color(), BLUE);
    }

    #[test]
    fn test_prefs_absent() {
        let mut dialog = ColorChoiceDialog::new("Wire", RED, GREEN, false);
        dialog.toggle_prefs();
        dialog.set_prefs_checked(true);
        assert_eq!(dialog.prefs(), PrefsCheckbox::Absent);
        assert!(!dialog.is_prefs_color());
        assert_eq!(dialog.prefs_label(), None);
    }

    #[test]
    fn test_prefs_toggle() {
        let mut dialog = ColorChoiceDialog::new("Wire", RED, GREEN, true);
        assert!(!dialog.is_prefs_color());
        dialog.toggle_prefs();
        assert!(dialog.is_prefs_color());
        dialog.toggle_prefs();
        assert!(!dialog.is_prefs_color());
    }

    #[test]
    fn test_first_outcome_wins() {
        let mut dialog = ColorChoiceDialog::new("Wire", RED, GREEN, false);
        dialog.accept();
        dialog.reject();
        assert_eq!(dialog.outcome(), Some(DialogOutcome::Accepted));
    }

    #[test]
    fn test_selection_ignored_after_close() {
        let mut dialog = ColorChoiceDialog::new("Wire", RED, GREEN, false);
        dialog.reject();
        dialog.choose_standard();
        assert_eq!(dialog.selected_color(), RED);
    }

    #[test]
    fn test_report_uses_rgb_name() {
        let translucent = Rgba::new(0, 0, 255, 0x80);
        let mut dialog = ColorChoiceDialog::new("Wire", translucent, GREEN, true);
        dialog.toggle_prefs();
        dialog.accept();
        assert_eq!(dialog.report(), "color=#0000ff\nmake_default=true");
    }

    #[test]
    fn test_labels() {
        let dialog = ColorChoiceDialog::new("Wire", RED, GREEN, true);
        assert_eq!(dialog.window_title(), "Set Wire Color...");
        assert_eq!(dialog.prompt(), "Choose a new wire color.");
        assert_eq!(dialog.current_label(), "current wire color (#ff0000)");
        assert_eq!(dialog.standard_label(), "standard wire color (#00ff00)");
        assert_eq!(dialog.custom_label(), "custom color (#ff0000)");
        assert_eq!(dialog.selected_label(), "selected color (#ff0000)");
        assert_eq!(
            dialog.prefs_label().as_deref(),
            Some("Make this the default wire color")
        );
    }
}
