use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TmuxlSettings {
    /// tmux executable, looked up on PATH when not absolute. Default: "tmux".
    #[serde(default = "default_tmux_bin")]
    pub tmux_bin: String,
    /// Open new panes in the directory of the pane they split from. Default: true.
    #[serde(default = "default_true")]
    pub split_in_current_path: bool,
    /// Focus the bottom-left pane when the window grows to 3+ panes. Default: true.
    #[serde(default = "default_true")]
    pub focus_bottom_left: bool,
    /// Log filter used when RUST_LOG is unset. Default: "warn".
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_tmux_bin() -> String {
    "tmux".into()
}

fn default_true() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".into()
}

impl Default for TmuxlSettings {
    fn default() -> Self {
        TmuxlSettings {
            tmux_bin: default_tmux_bin(),
            split_in_current_path: true,
            focus_bottom_left: true,
            log_level: default_log_level(),
        }
    }
}

impl TmuxlSettings {
    pub fn from_yaml(input: &str) -> Result<TmuxlSettings> {
        if input.trim().is_empty() {
            return Ok(TmuxlSettings::default());
        }
        Ok(serde_yaml::from_str(input)?)
    }

    /// Load `config.yaml` from `config_dir`. A missing file yields defaults.
    pub fn load(config_dir: &Path) -> Result<TmuxlSettings> {
        let path = config_dir.join("config.yaml");
        match std::fs::read_to_string(&path) {
            Ok(content) => Self::from_yaml(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(TmuxlSettings::default()),
            Err(e) => Err(e.into()),
        }
    }
}

/// `$TMUXL_CONFIG_DIR`, else `$HOME/.config/tmuxl`.
pub fn resolve_config_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("TMUXL_CONFIG_DIR") {
        return PathBuf::from(dir);
    }
    let home = std::env::var("HOME").unwrap_or_else(|_| "/tmp".into());
    PathBuf::from(home).join(".config").join("tmuxl")
}
