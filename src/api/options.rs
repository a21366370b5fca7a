//
//  mediawiki-client
//  api/options.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Client construction options
//!
//! Only two options are recognized:
//!
//! | Key | Type | Default |
//! |-----|------|---------|
//! | `verbose` | bool | `false` |
//! | `user_agent` (alias `userAgent`) | string | [`default_user_agent`] |
//!
//! Options coming from untyped sources (key/value pairs, config files) are
//! checked against this list, and any other key fails construction before a
//! request is ever sent.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Returns the User-Agent sent when none is configured.
///
/// # Example
///
/// ```rust
/// use mediawiki_client::api::default_user_agent;
///
/// assert!(default_user_agent().starts_with("Mozilla/5.0 (compatible; MediaWiki Client "));
/// ```
pub fn default_user_agent() -> String {
    format!(
        "Mozilla/5.0 (compatible; MediaWiki Client {}; {}-{})",
        crate::VERSION,
        std::env::consts::ARCH,
        std::env::consts::OS
    )
}

/// Options for [`MediaWikiClient`](super::MediaWikiClient).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientOptions {
    /// Print each request to stderr before sending it.
    #[serde(default)]
    pub verbose: bool,

    /// Custom User-Agent header.
    #[serde(default, alias = "userAgent", skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ClientOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    /// Builds options from untyped key/value pairs.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownOption`] for any key other than `verbose`,
    ///   `user_agent` or `userAgent`
    /// - [`Error::InvalidOption`] when `verbose` is not a boolean
    ///
    /// # Example
    ///
    /// ```rust
    /// use mediawiki_client::api::ClientOptions;
    ///
    /// let options = ClientOptions::from_pairs([("verbose", "true")]).unwrap();
    /// assert!(options.verbose);
    ///
    /// assert!(ClientOptions::from_pairs([("timeout", "5")]).is_err());
    /// ```
    pub fn from_pairs<I, K, V>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "verbose" => options.verbose = parse_bool(key, value)?,
                "user_agent" | "userAgent" => options.user_agent = Some(value.to_string()),
                other => return Err(Error::UnknownOption(other.to_string())),
            }
        }
        Ok(options)
    }

    /// The configured User-Agent, or [`default_user_agent`].
    pub fn effective_user_agent(&self) -> String {
        self.user_agent.clone().unwrap_or_else(default_user_agent)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(Error::InvalidOption {
            key: key.to_string(),
            reason: format!("expected a boolean, got '{}'", value),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ClientOptions::default();
        assert!(!options.verbose);
        assert_eq!(options.effective_user_agent(), default_user_agent());
    }

    #[test]
    fn test_from_pairs() {
        let options =
            ClientOptions::from_pairs([("verbose", "yes"), ("userAgent", "TestBot/1.0")]).unwrap();
        assert!(options.verbose);
        assert_eq!(options.effective_user_agent(), "TestBot/1.0");
    }

    #[test]
    fn test_from_pairs_rejects_unknown_key() {
        let err = ClientOptions::from_pairs([("timeout", "5")]).unwrap_err();
        assert!(matches!(err, Error::UnknownOption(key) if key == "timeout"));
    }

    #[test]
    fn test_from_pairs_rejects_bad_bool() {
        let err = ClientOptions::from_pairs([("verbose", "loud")]).unwrap_err();
        assert!(matches!(err, Error::InvalidOption { .. }));
    }

    #[test]
    fn test_deserialize_rejects_unknown_key() {
        let result: std::result::Result<ClientOptions, _> = toml::from_str("timeout = 5\n");
        assert!(result.is_err());

        let options: ClientOptions = toml::from_str("verbose = true\nuser_agent = \"X\"\n").unwrap();
        assert!(options.verbose);
        assert_eq!(options.user_agent.as_deref(), Some("X"));
    }
}
