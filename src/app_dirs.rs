use directories::ProjectDirs;
use std::path::PathBuf;

/// Centralized application directory resolution
pub struct AppDirs;

impl AppDirs {
    fn project() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "klok")
    }

    pub fn config_path() -> Option<PathBuf> {
        Self::project().map(|pd| pd.config_dir().join("config.json"))
    }

    /// Where `RUST_LOG` output goes; the terminal itself belongs to the TUI
    pub fn log_path() -> Option<PathBuf> {
        if let Ok(home) = std::env::var("HOME") {
            let state_dir = PathBuf::from(home)
                .join(".local")
                .join("state")
                .join("klok");
            Some(state_dir.join("klok.log"))
        } else {
            Self::project().map(|pd| pd.data_local_dir().join("klok.log"))
        }
    }
}
