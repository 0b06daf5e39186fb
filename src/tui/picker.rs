use crate::action::ActionDispatcher;
use crate::color::Rgba;
use crate::error::Result;
use crate::picker::{ColorPicker, PickerStatus, RgbPicker};
use crate::theme::Theme;

use super::{render_picker, Event, EventHandler, Terminal};

/// Color picker that takes over the terminal until it is closed
pub struct TerminalColorPicker<'a> {
    terminal: &'a mut Terminal,
    events: &'a EventHandler,
    dispatcher: &'a ActionDispatcher,
    theme: &'a Theme,
}

impl<'a> TerminalColorPicker<'a> {
    pub fn new(
        terminal: &'a mut Terminal,
        events: &'a EventHandler,
        dispatcher: &'a ActionDispatcher,
        theme: &'a Theme,
    ) -> Self {
        Self {
            terminal,
            events,
            dispatcher,
            theme,
        }
    }
}

impl ColorPicker for TerminalColorPicker<'_> {
    fn pick(&mut self, initial: Rgba, title: &str) -> Result<Option<Rgba>> {
        let mut picker = RgbPicker::new(initial, title);

        loop {
            let theme = self.theme;
            self.terminal
                .draw(|frame| render_picker(frame, &picker, theme))?;

            let Some(Event::Key(key)) = self.events.poll()? else {
                continue;
            };
            let Some(action) = self.dispatcher.dispatch(key, &picker.mode()) else {
                continue;
            };

            match picker.handle(&action) {
                PickerStatus::Open => {}
                PickerStatus::Picked(color) => return Ok(Some(color)),
                PickerStatus::Dismissed => return Ok(None),
            }
        }
    }
}
