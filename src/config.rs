use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app_dirs::AppDirs;
use crate::widget::{WidgetOptions, DEFAULT_HOUR_HAND_LENGTH, DEFAULT_MINUTE_HAND_LENGTH};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub lock_on_solve: bool,
    pub hour_hand_length: f64,
    pub minute_hand_length: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            lock_on_solve: true,
            hour_hand_length: DEFAULT_HOUR_HAND_LENGTH,
            minute_hand_length: DEFAULT_MINUTE_HAND_LENGTH,
        }
    }
}

impl From<&Config> for WidgetOptions {
    fn from(cfg: &Config) -> Self {
        // hands longer than the face would be unreachable by the pointer
        Self {
            hour_hand_length: cfg.hour_hand_length.clamp(0.1, 1.0),
            minute_hand_length: cfg.minute_hand_length.clamp(0.1, 1.0),
            lock_on_solve: cfg.lock_on_solve,
        }
    }
}

pub trait ConfigStore {
    fn load(&self) -> Config;
    fn save(&self, cfg: &Config) -> std::io::Result<()>;
}

#[derive(Debug, Clone)]
pub struct FileConfigStore {
    path: PathBuf,
}

impl FileConfigStore {
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        let path = AppDirs::config_path().unwrap_or_else(|| PathBuf::from("klok_config.json"));
        Self { path }
    }

    pub fn with_path<P: AsRef<Path>>(p: P) -> Self {
        Self {
            path: p.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for FileConfigStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigStore for FileConfigStore {
    fn load(&self) -> Config {
        match fs::read(&self.path) {
            Ok(bytes) => match serde_json::from_slice::<Config>(&bytes) {
                Ok(cfg) => cfg,
                Err(e) => {
                    log::warn!("ignoring malformed config {}: {}", self.path.display(), e);
                    Config::default()
                }
            },
            Err(_) => Config::default(),
        }
    }

    fn save(&self, cfg: &Config) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_vec_pretty(cfg).map_err(std::io::Error::other)?;
        fs::write(&self.path, data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn roundtrip_default_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config::default();
        store.save(&cfg).unwrap();
        let loaded = store.load();
        assert_eq!(cfg, loaded);
    }

    #[test]
    fn save_and_load_custom_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let store = FileConfigStore::with_path(&path);
        let cfg = Config {
            lock_on_solve: false,
            hour_hand_length: 0.5,
            minute_hand_length: 0.8,
        };
        store.save(&cfg).unwrap();
        assert_eq!(store.load(), cfg);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let store = FileConfigStore::with_path(dir.path().join("absent.json"));
        assert_eq!(store.load(), Config::default());
    }

    #[test]
    fn malformed_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, b"{ not json").unwrap();
        assert_eq!(FileConfigStore::with_path(&path).load(), Config::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, br#"{ "lock_on_solve": false }"#).unwrap();
        let cfg = FileConfigStore::with_path(&path).load();
        assert!(!cfg.lock_on_solve);
        assert_eq!(cfg.minute_hand_length, DEFAULT_MINUTE_HAND_LENGTH);
    }

    #[test]
    fn widget_options_clamp_hand_lengths() {
        let cfg = Config {
            lock_on_solve: true,
            hour_hand_length: 3.0,
            minute_hand_length: 0.0,
        };
        let opts = WidgetOptions::from(&cfg);
        assert_eq!(opts.hour_hand_length, 1.0);
        assert_eq!(opts.minute_hand_length, 0.1);
        assert!(opts.lock_on_solve);
    }
}
