//
//  mediawiki-client
//  config/wikis.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Wiki Configuration Module
//!
//! Named wikis let users write `mw --wiki local page "Main Page"` instead of
//! repeating an endpoint URL. A wiki name that is not configured is treated as
//! a Wikipedia language code.
//!
//! ## Usage
//!
//! ```rust
//! use mediawiki_client::config::{is_endpoint_url, WikiConfig};
//!
//! assert!(is_endpoint_url("https://en.wikipedia.org/w/api.php"));
//! assert!(!is_endpoint_url("en"));
//!
//! let wiki = WikiConfig::new("http://localhost/w/api.php");
//! assert!(wiki.user_agent.is_none());
//! ```

use serde::{Deserialize, Serialize};

/// Wiki used when neither the command line nor the config names one.
pub const DEFAULT_WIKI: &str = "en";

/// Per-wiki settings.
///
/// # Example Configuration
///
/// ```toml
/// [wikis.local]
/// endpoint = "http://localhost/w/api.php"
/// user_agent = "LocalBot/0.1"
/// verbose = true
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WikiConfig {
    /// URL of the wiki's `api.php`.
    pub endpoint: String,

    /// User-Agent for this wiki, overriding `core.user_agent`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Verbose mode for this wiki, overriding `core.verbose`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,
}

impl WikiConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            ..Default::default()
        }
    }
}

/// Reports whether `value` is an endpoint URL rather than a wiki name.
pub fn is_endpoint_url(value: &str) -> bool {
    value.starts_with("http://") || value.starts_with("https://")
}
