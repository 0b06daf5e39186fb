mod keybinding;
mod loader;
mod types;

pub use keybinding::{default_bindings, parse_key, parse_modifiers};
pub use loader::{
    config_sources, find_local_config, global_config_path, load_config_file, load_config_from,
};
pub use types::{Config, KeyBinding, ThemeConfig};
