pub mod action;
pub mod app;
pub mod color;
pub mod config;
pub mod dialog;
pub mod error;
pub mod logging;
pub mod picker;
pub mod theme;
pub mod tui;

pub use app::App;
pub use color::Rgba;
pub use config::Config;
pub use dialog::{ColorChoiceDialog, DialogOutcome, PrefsCheckbox};
pub use error::{Error, Result};
pub use picker::ColorPicker;
