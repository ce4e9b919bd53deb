//! Demo configuration
//!
//! Loaded from `.ready-todos.toml` in the current directory first, then from
//! the user config directory (`~/.config/ready-wrapper/todos.toml` on Linux).
//! Missing fields fall back to their defaults.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

const APP_NAME: &str = "ready-wrapper";
const LOCAL_CONFIG_FILE: &str = ".ready-todos.toml";
const GLOBAL_CONFIG_FILE: &str = "todos.toml";

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TodosConfig {
    /// Forwarded as the `show_loader` option of the ready notification
    #[serde(default = "default_show_loader")]
    pub show_loader: bool,

    /// Simulated latency of the todo fetch
    #[serde(default = "default_fetch_delay_ms")]
    pub fetch_delay_ms: u64,

    /// What the simulated fetch returns; empty makes it fail
    #[serde(default = "default_seed_todos")]
    pub seed_todos: Vec<String>,
}

fn default_show_loader() -> bool {
    true
}

fn default_fetch_delay_ms() -> u64 {
    250
}

fn default_seed_todos() -> Vec<String> {
    vec!["my new todo!".to_string(), "water the plants".to_string()]
}

impl Default for TodosConfig {
    fn default() -> Self {
        Self {
            show_loader: default_show_loader(),
            fetch_delay_ms: default_fetch_delay_ms(),
            seed_todos: default_seed_todos(),
        }
    }
}

impl TodosConfig {
    /// Load config from CWD first, then the config directory, or use defaults
    pub fn load() -> Self {
        for path in candidate_paths() {
            if !path.exists() {
                continue;
            }
            match Self::from_file(&path) {
                Ok(config) => {
                    log::info!("Loaded config from {}", path.display());
                    return config;
                }
                Err(e) => log::warn!("Ignoring config {}: {:#}", path.display(), e),
            }
        }

        log::debug!("Using default config");
        Self::default()
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn fetch_delay(&self) -> Duration {
        Duration::from_millis(self.fetch_delay_ms)
    }
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join(APP_NAME).join(GLOBAL_CONFIG_FILE));
    }
    paths
}
