//! Common test utilities

use std::collections::VecDeque;

use setcolor::{ColorPicker, Result, Rgba};

pub const RED: Rgba = Rgba::rgb(0xFF, 0x00, 0x00);
pub const GREEN: Rgba = Rgba::rgb(0x00, 0xFF, 0x00);
pub const BLUE: Rgba = Rgba::rgb(0x00, 0x00, 0xFF);

/// Picker that replays canned answers and records how it was opened
#[derive(Default)]
pub struct ScriptedPicker {
    answers: VecDeque<Option<Rgba>>,
    pub calls: Vec<(Rgba, String)>,
}

impl ScriptedPicker {
    pub fn new(answers: impl IntoIterator<Item = Option<Rgba>>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            calls: Vec::new(),
        }
    }

    /// Picker that is always dismissed
    pub fn dismissed() -> Self {
        Self::default()
    }
}

impl ColorPicker for ScriptedPicker {
    fn pick(&mut self, initial: Rgba, title: &str) -> Result<Option<Rgba>> {
        self.calls.push((initial, title.to_string()));
        Ok(self.answers.pop_front().flatten())
    }
}
