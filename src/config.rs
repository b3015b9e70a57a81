// SPDX-License-Identifier: MPL-2.0
//! Loading of user preferences from `settings.toml`. The file is maintained
//! by hand; the application only reads it.
//!
//! # Configuration Sections
//!
//! - `[general]` - UI language
//! - `[server]` - Rendering backend endpoint
//!
//! # Path Resolution
//!
//! The config file location can be customized for testing or portable
//! deployments:
//! 1. Use `load_from_path()` with an explicit path
//! 2. Set the `TIKZMOTION_CONFIG_DIR` environment variable
//! 3. Falls back to the platform-specific config directory

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";
const CONFIG_DIR_NAME: &str = "TikzMotion";

/// Environment variable overriding the config directory.
pub const CONFIG_DIR_ENV: &str = "TIKZMOTION_CONFIG_DIR";

/// Default rendering backend endpoint, matching a locally run service.
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000/";

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

/// Rendering backend settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ServerConfig {
    /// Base URL of the animation rendering service.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
}

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub server: ServerConfig,
}

impl Config {
    /// The effective backend endpoint: configured value or the compiled default.
    pub fn base_url(&self) -> &str {
        self.server.base_url.as_deref().unwrap_or(DEFAULT_BASE_URL)
    }
}

/// Resolves the directory holding `settings.toml`.
pub fn config_dir() -> Option<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME))
}

fn config_path() -> Option<PathBuf> {
    config_dir().map(|dir| dir.join(CONFIG_FILE))
}

/// Loads the configuration, falling back to defaults.
///
/// Returns the config together with an optional i18n warning key when the
/// file exists but could not be read or parsed. The caller surfaces the
/// warning as a notification; startup continues with defaults either way.
pub fn load() -> (Config, Option<&'static str>) {
    let Some(path) = config_path() else {
        return (Config::default(), None);
    };
    if !path.exists() {
        return (Config::default(), None);
    }
    match load_from_path(&path) {
        Ok(config) => (config, None),
        Err(err) => {
            tracing::warn!(path = %path.display(), %err, "falling back to default settings");
            (Config::default(), Some("notification-config-load-warning"))
        }
    }
}

/// Loads configuration from an explicit path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let contents = fs::read_to_string(path)?;
    let config = toml::from_str(&contents)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};
    use tempfile::tempdir;

    fn env_lock() -> &'static Mutex<()> {
        static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
        LOCK.get_or_init(|| Mutex::new(()))
    }

    fn with_temp_config_dir<F>(test: F)
    where
        F: FnOnce(&Path),
    {
        let _guard = env_lock().lock().expect("failed to lock mutex");
        let temp_dir = tempdir().expect("failed to create temp dir");
        let previous = std::env::var(CONFIG_DIR_ENV).ok();
        std::env::set_var(CONFIG_DIR_ENV, temp_dir.path());

        test(temp_dir.path());

        if let Some(value) = previous {
            std::env::set_var(CONFIG_DIR_ENV, value);
        } else {
            std::env::remove_var(CONFIG_DIR_ENV);
        }
    }

    #[test]
    fn default_base_url_is_local_backend() {
        let config = Config::default();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
    }

    #[test]
    fn configured_base_url_wins_over_default() {
        let config = Config {
            server: ServerConfig {
                base_url: Some("https://diagrams.example/".to_string()),
            },
            ..Config::default()
        };
        assert_eq!(config.base_url(), "https://diagrams.example/");
    }

    #[test]
    fn load_from_path_reads_both_sections() {
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join(CONFIG_FILE);
        fs::write(
            &path,
            "[general]\nlanguage = \"fr\"\n\n[server]\nbase_url = \"http://render.local:9000/\"\n",
        )
        .expect("write");

        let loaded = load_from_path(&path).expect("load should succeed");

        assert_eq!(loaded.general.language.as_deref(), Some("fr"));
        assert_eq!(loaded.base_url(), "http://render.local:9000/");
    }

    #[test]
    fn load_missing_file_yields_defaults_without_warning() {
        with_temp_config_dir(|_| {
            let (config, warning) = load();
            assert_eq!(config, Config::default());
            assert!(warning.is_none());
        });
    }

    #[test]
    fn load_corrupt_file_yields_defaults_with_warning() {
        with_temp_config_dir(|dir| {
            fs::write(dir.join(CONFIG_FILE), "this is not { toml").expect("write");
            let (config, warning) = load();
            assert_eq!(config, Config::default());
            assert_eq!(warning, Some("notification-config-load-warning"));
        });
    }

    #[test]
    fn load_reads_from_env_override_directory() {
        with_temp_config_dir(|dir| {
            fs::write(
                dir.join(CONFIG_FILE),
                "[server]\nbase_url = \"http://10.0.0.5:8000/\"\n",
            )
            .expect("write");

            let (config, warning) = load();

            assert!(warning.is_none());
            assert_eq!(config.base_url(), "http://10.0.0.5:8000/");
        });
    }
}
