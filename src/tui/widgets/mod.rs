mod color_dialog;
mod help_footer;
mod picker_dialog;
mod swatch;

pub use color_dialog::render_color_dialog;
pub use help_footer::render_help_footer;
pub use picker_dialog::render_picker_dialog;
pub use swatch::{fill_style, swatch, truncate};
