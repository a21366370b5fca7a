//
//  mediawiki-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! This module provides configuration management for the `mw` CLI. Settings
//! are stored as TOML in a platform-specific directory.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/mw/config.toml`
//! - **macOS**: `~/Library/Application Support/mw/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\mw\config.toml`
//!
//! The `MW_CONFIG` environment variable overrides the location.
//!
//! ## Example Configuration File
//!
//! ```toml
//! [core]
//! default_wiki = "de"
//! user_agent = "MyBot/1.0 (bot@example.org)"
//! verbose = false
//!
//! [wikis.local]
//! endpoint = "http://localhost/w/api.php"
//! ```
//!
//! ## Endpoint Resolution
//!
//! A wiki name is looked up in `[wikis]`; an unknown name is taken as a
//! Wikipedia language code, and a full URL is used as-is. Without a name,
//! `core.default_wiki` applies, then English Wikipedia.
//!
//! ## Submodules
//!
//! - [`file`]: Low-level configuration file I/O operations
//! - [`wikis`]: Named wiki configuration

mod file;
mod wikis;

pub use file::*;
pub use wikis::*;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::api::client::wikipedia_endpoint;
use crate::api::ClientOptions;

/// Environment variable overriding the configuration file path.
pub const CONFIG_ENV: &str = "MW_CONFIG";

/// Keys accepted by [`Config::get`], [`Config::set`] and [`Config::unset`].
pub const CORE_KEYS: &[&str] = &["default_wiki", "user_agent", "verbose"];

/// Global configuration container for the `mw` CLI.
///
/// # Examples
///
/// ```rust
/// use mediawiki_client::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.resolve_endpoint(None), "https://en.wikipedia.org/w/api.php");
/// assert_eq!(config.resolve_endpoint(Some("nl")), "https://nl.wikipedia.org/w/api.php");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Core settings applying to every wiki.
    #[serde(default)]
    pub core: CoreConfig,

    /// Named wikis.
    #[serde(default)]
    pub wikis: BTreeMap<String, WikiConfig>,
}

/// Core configuration options.
///
/// | Field | Default |
/// |-------|---------|
/// | `default_wiki` | `None` (English Wikipedia) |
/// | `user_agent` | `None` (built-in User-Agent) |
/// | `verbose` | `false` |
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct CoreConfig {
    /// Wiki name, language code or endpoint URL used when none is given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_wiki: Option<String>,

    /// User-Agent sent to every wiki without its own.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Print every request to stderr.
    #[serde(default)]
    pub verbose: bool,
}

impl Config {
    /// Loads configuration from the default location.
    ///
    /// A missing file is not an error; defaults are used.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read, is not valid
    /// TOML, or contains unknown keys.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Loads configuration from `path`, or defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if config_exists(path) {
            let content = read_config_file(path)?;
            Ok(toml::from_str(&content)?)
        } else {
            Ok(Self::default())
        }
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    /// Saves the configuration to `path` as pretty TOML.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file.
    ///
    /// `MW_CONFIG` wins over the platform directory.
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Returns the configuration of a named wiki.
    pub fn wiki(&self, name: &str) -> Option<&WikiConfig> {
        self.wikis.get(name)
    }

    /// Resolves a wiki name (or `core.default_wiki`) to an endpoint URL.
    pub fn resolve_endpoint(&self, wiki: Option<&str>) -> String {
        let name = wiki
            .or(self.core.default_wiki.as_deref())
            .unwrap_or(DEFAULT_WIKI);

        if is_endpoint_url(name) {
            return name.to_string();
        }

        match self.wiki(name) {
            Some(wiki) => wiki.endpoint.clone(),
            None => wikipedia_endpoint(name),
        }
    }

    /// Client options for a wiki: per-wiki settings over core settings.
    pub fn client_options(&self, wiki: Option<&str>) -> ClientOptions {
        let name = wiki.or(self.core.default_wiki.as_deref());
        let wiki = name.and_then(|n| self.wiki(n));

        ClientOptions {
            verbose: wiki
                .and_then(|w| w.verbose)
                .unwrap_or(self.core.verbose),
            user_agent: wiki
                .and_then(|w| w.user_agent.clone())
                .or_else(|| self.core.user_agent.clone()),
        }
    }

    /// Gets a core configuration value by key.
    ///
    /// Returns `None` for unknown keys and unset optional values.
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "default_wiki" => self.core.default_wiki.clone(),
            "user_agent" => self.core.user_agent.clone(),
            "verbose" => Some(self.core.verbose.to_string()),
            _ => None,
        }
    }

    /// Sets a core configuration value by key.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown keys, or a `verbose` value that is not
    /// `true` or `false`.
    pub fn set(&mut self, key: &str, value: String) -> Result<()> {
        match key {
            "default_wiki" => self.core.default_wiki = Some(value),
            "user_agent" => self.core.user_agent = Some(value),
            "verbose" => {
                self.core.verbose = value.parse().map_err(|_| {
                    anyhow::anyhow!("Invalid value for verbose. Valid values: true, false")
                })?
            }
            _ => anyhow::bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key,
                CORE_KEYS.join(", ")
            ),
        }
        Ok(())
    }

    /// Resets a core configuration value to its default.
    pub fn unset(&mut self, key: &str) -> Result<()> {
        match key {
            "default_wiki" => self.core.default_wiki = None,
            "user_agent" => self.core.user_agent = None,
            "verbose" => self.core.verbose = false,
            _ => anyhow::bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                key,
                CORE_KEYS.join(", ")
            ),
        }
        Ok(())
    }
}
