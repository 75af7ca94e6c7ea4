use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Settings read from `~/.config/repo-tree-fetch/config.toml`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AppConfig {
    /// GitHub Enterprise or mock API root. Defaults to api.github.com.
    pub api_base_url: Option<String>,
    #[serde(default = "default_branch")]
    pub default_branch: String,
    /// Per-request timeout. Unset means requests may block indefinitely.
    pub timeout_secs: Option<u64>,
}

impl AppConfig {
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: None,
            default_branch: default_branch(),
            timeout_secs: None,
        }
    }
}

fn default_branch() -> String {
    tree_fetch::coordinates::DEFAULT_BRANCH.into()
}

/// Config file path: `~/.config/repo-tree-fetch/config.toml`
pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("repo-tree-fetch").join("config.toml"))
}

/// Load config from file, falling back to defaults if missing.
pub fn load_config() -> AppConfig {
    if let Some(path) = config_path()
        && let Ok(contents) = std::fs::read_to_string(&path)
    {
        if let Ok(config) = toml::from_str::<AppConfig>(&contents) {
            return config;
        }
        eprintln!(
            "warning: failed to parse config at {}, using defaults",
            path.display()
        );
    }

    AppConfig::default()
}
