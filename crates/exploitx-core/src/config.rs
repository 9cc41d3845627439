//! Configuration management for ExploitX.
//!
//! Loads configuration from ${EXPLOITX_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

/// Environment variable overriding `store.url`.
pub const DB_URL_ENV: &str = "EXPLOITX_DB_URL";
/// Environment variable overriding `store.auth`.
pub const DB_AUTH_ENV: &str = "EXPLOITX_DB_AUTH";

/// Returns the default config template with comments.
///
/// This is embedded from default_config.toml at compile time.
fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

/// Merges user config values into the default template.
///
/// New comments/sections from the template are kept while the user's values win.
fn merge_with_template(user_config: &str) -> Result<String> {
    use toml_edit::DocumentMut;

    let mut doc: DocumentMut = default_config_template()
        .parse()
        .context("Failed to parse default config template")?;
    let user_doc: DocumentMut = user_config.parse().context("Failed to parse user config")?;

    merge_items(doc.as_table_mut(), user_doc.as_table());

    Ok(doc.to_string())
}

/// Copies user values over the template.
///
/// Tables merge key by key so template comments for keys the user never set
/// survive. Everything else is replaced wholesale.
fn merge_items(target: &mut toml_edit::Table, source: &toml_edit::Table) {
    use toml_edit::Item;

    for (key, item) in source {
        if let Item::Table(user_table) = item
            && let Some(Item::Table(template_table)) = target.get_mut(key)
        {
            merge_items(template_table, user_table);
        } else if !item.is_none() {
            target[key] = item.clone();
        }
    }
}

pub mod paths {
    //! Path resolution for ExploitX configuration and data directories.
    //!
    //! EXPLOITX_HOME resolution order:
    //! 1. EXPLOITX_HOME environment variable (if set)
    //! 2. ~/.config/exploitx (default)

    use std::path::PathBuf;

    /// Returns the ExploitX home directory.
    pub fn exploitx_home() -> PathBuf {
        if let Ok(home) = std::env::var("EXPLOITX_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".exploitx"),
            |h| h.join(".config").join("exploitx"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        exploitx_home().join("config.toml")
    }

    /// Returns the path to the cached sign-in.
    pub fn session_path() -> PathBuf {
        exploitx_home().join("session.json")
    }

    /// Returns the directory for TUI log files.
    pub fn logs_dir() -> PathBuf {
        exploitx_home().join("logs")
    }
}

/// Key-value store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Realtime Database URL. `None` selects the in-memory store.
    pub url: Option<String>,
    /// Token sent as the `auth` query parameter.
    pub auth: Option<String>,
    /// Per-read timeout in seconds.
    pub timeout_secs: u64,
    /// JSON export used as the in-memory store when `url` is unset.
    pub seed_file: Option<PathBuf>,
}

impl StoreConfig {
    const DEFAULT_TIMEOUT_SECS: u64 = 10;

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            url: None,
            auth: None,
            timeout_secs: Self::DEFAULT_TIMEOUT_SECS,
            seed_file: None,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub store: StoreConfig,
    pub log: LogConfig,
}

impl Config {
    /// Loads configuration from the default config path, then applies
    /// environment overrides.
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&paths::config_path())?;
        config.apply_env(|name| std::env::var(name).ok());
        Ok(config)
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Applies `EXPLOITX_DB_URL` / `EXPLOITX_DB_AUTH` overrides. Empty values are ignored.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        let non_empty = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());
        if let Some(url) = non_empty(DB_URL_ENV) {
            self.store.url = Some(url);
        }
        if let Some(auth) = non_empty(DB_AUTH_ENV) {
            self.store.auth = Some(auth);
        }
    }

    /// Writes the default template to `path`.
    ///
    /// # Errors
    /// Fails if the file already exists.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            bail!("Config file already exists at {}", path.display());
        }
        Self::write_config(path, default_config_template())
    }

    /// Saves only `store.url` to a specific config file path.
    ///
    /// Creates the file with default template if it doesn't exist.
    /// If file exists, merges user values into the latest template.
    pub fn save_store_url_to(path: &Path, url: &str) -> Result<()> {
        use toml_edit::{DocumentMut, value};

        let contents = if path.exists() {
            let user_config = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            merge_with_template(&user_config)?
        } else {
            default_config_template().to_string()
        };

        let mut doc: DocumentMut = contents
            .parse()
            .with_context(|| format!("Failed to parse config from {}", path.display()))?;

        doc["store"]["url"] = value(url);

        Self::write_config(path, &doc.to_string())
    }

    fn write_config(path: &Path, contents: &str) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {}", parent.display()))?;
        }
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config to {}", path.display()))
    }
}
