pub mod event;
pub mod picker;
pub mod terminal;
pub mod ui;
pub mod widgets;

pub use event::{Event, EventHandler};
pub use picker::TerminalColorPicker;
pub use terminal::Terminal;
pub use ui::{render, render_picker};
