//! Tests for config loading

use setcolor::config::{find_local_config, load_config_file};
use setcolor::Rgba;
use tempfile::TempDir;

fn write_local_config(dir: &TempDir, content: &str) {
    let config_dir = dir.path().join(".setcolor");
    std::fs::create_dir_all(&config_dir).unwrap();
    std::fs::write(config_dir.join("config.toml"), content).unwrap();
}

#[test]
fn test_local_config_found_from_subdirectory() {
    let dir = TempDir::new().unwrap();
    write_local_config(&dir, "[standard_colors]\nwire = \"#418dd9\"\n");
    let nested = dir.path().join("src").join("deep");
    std::fs::create_dir_all(&nested).unwrap();

    let path = find_local_config(&nested).expect("config should be found");
    let config = load_config_file(&path).unwrap().unwrap();

    assert_eq!(config.standard_color("Wire"), Some(Rgba::rgb(0x41, 0x8d, 0xd9)));
}

#[test]
fn test_bindings_and_theme_from_file() {
    let dir = TempDir::new().unwrap();
    write_local_config(
        &dir,
        r##"
[theme]
preset = "classic"

[[bindings]]
key = "Enter"
mods = "Control"
action = "Accept"
"##,
    );

    let path = find_local_config(dir.path()).unwrap();
    let config = load_config_file(&path).unwrap().unwrap();

    assert_eq!(config.theme.preset.as_deref(), Some("classic"));
    assert_eq!(config.bindings.len(), 1);
    assert_eq!(config.bindings[0].mods.as_deref(), Some("Control"));
}

#[test]
fn test_invalid_color_in_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    write_local_config(&dir, "[standard_colors]\nwire = \"#12\"\n");

    let path = find_local_config(dir.path()).unwrap();
    let err = load_config_file(&path).unwrap_err();
    assert!(err.to_string().contains("TOML parse error"));
}
