use std::path::{Path, PathBuf};

use crate::error::Result;

use super::Config;

const APP_DIR: &str = "setcolor";
const LOCAL_DIR: &str = ".setcolor";
const CONFIG_FILE: &str = "config.toml";

/// Path of the global config file (~/.config/setcolor/config.toml on Linux)
pub fn global_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR).join(CONFIG_FILE))
}

/// Find .setcolor/config.toml in `start_path` or one of its parents
pub fn find_local_config(start_path: &Path) -> Option<PathBuf> {
    let mut current = start_path.to_path_buf();

    loop {
        let config_path = current.join(LOCAL_DIR).join(CONFIG_FILE);
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Read a config file, `None` if it does not exist
pub fn load_config_file(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let config = Config::from_toml(&content)?;
    tracing::debug!(path = %path.display(), "loaded config file");
    Ok(Some(config))
}

/// Existing config files that `load_config_from` reads, global first
pub fn config_sources(start_path: &Path) -> Vec<PathBuf> {
    global_config_path()
        .filter(|path| path.exists())
        .into_iter()
        .chain(find_local_config(start_path))
        .collect()
}

/// Load and merge global and local configs starting the local search at `start_path`
pub fn load_config_from(start_path: &Path) -> Result<Config> {
    let global = match global_config_path() {
        Some(path) => load_config_file(&path)?.unwrap_or_default(),
        None => Config::default(),
    };

    let local = match find_local_config(start_path) {
        Some(path) => load_config_file(&path)?.unwrap_or_default(),
        None => Config::default(),
    };

    Ok(global.merge(local))
}

impl Config {
    /// Load and merge configs (global + local from the current directory)
    pub fn load() -> Result<Config> {
        let current_dir = std::env::current_dir()?;
        load_config_from(&current_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_find_local_config_in_parent() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(LOCAL_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILE), "").unwrap();

        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        assert_eq!(
            find_local_config(&nested),
            Some(config_dir.join(CONFIG_FILE))
        );
    }

    #[test]
    fn test_config_sources_lists_local_file() {
        let dir = TempDir::new().unwrap();
        let config_dir = dir.path().join(LOCAL_DIR);
        std::fs::create_dir_all(&config_dir).unwrap();
        std::fs::write(config_dir.join(CONFIG_FILE), "").unwrap();

        let sources = config_sources(dir.path());
        assert_eq!(sources.last(), Some(&config_dir.join(CONFIG_FILE)));
    }

    #[test]
    fn test_load_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = load_config_file(&dir.path().join("missing.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_load_invalid_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "log_level = [").unwrap();
        assert!(load_config_file(&path).is_err());
    }
}
