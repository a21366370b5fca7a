//
//  mediawiki-client
//  api/client.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # MediaWiki API Client
//!
//! This module provides [`MediaWikiClient`], a generic client for a wiki's
//! `api.php`. Instead of one method per API module, every action goes through
//! [`MediaWikiClient::call`], which takes the action name and its parameters
//! and returns the decoded response.
//!
//! ## Features
//!
//! - One call path for every API action
//! - Transparent POST retry for actions that must be posted
//! - Normalized error handling via [`ApiError`]
//! - Session cookies kept across calls
//! - Custom User-Agent header
//!
//! ## Request Flow
//!
//! ```text
//! call(action, params)
//!   └─ api_request(params, force_post)   format=yaml, GET/POST, parse, error check
//!        └─ Transport::send(url, post)   one locked HTTP round trip
//! ```

use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use console::style;
use serde_yaml::Value;
use url::Url;

use super::error::{Error, Result};
use super::options::ClientOptions;
use super::params::Params;
use super::response::{parse_body, RESPONSE_FORMAT};
use super::siteinfo::SiteInfo;
use super::transport::Transport;

/// Error code asking for the request to be repeated as POST.
const MUST_BE_POSTED: &str = "mustbeposted";

/// Error code for an action the wiki does not know.
const UNKNOWN_ACTION: &str = "unknown_action";

/// Returns the `api.php` URL of the Wikipedia for a language code.
///
/// # Example
///
/// ```rust
/// use mediawiki_client::api::client::wikipedia_endpoint;
///
/// assert_eq!(wikipedia_endpoint("de"), "https://de.wikipedia.org/w/api.php");
/// ```
pub fn wikipedia_endpoint(lang: &str) -> String {
    format!("https://{}.wikipedia.org/w/api.php", lang)
}

/// A client for one wiki's `api.php`.
///
/// The client is `Send + Sync`; share it behind an [`Arc`] to use it from
/// several tasks. Requests from different tasks are sent one at a time.
///
/// # Creating a Client
///
/// ```rust,no_run
/// use mediawiki_client::api::{ClientOptions, MediaWikiClient};
///
/// // Any wiki
/// let local = MediaWikiClient::new("http://localhost/w/api.php")?;
///
/// // German Wikipedia, with a custom User-Agent
/// let dewiki = MediaWikiClient::wikipedia(
///     "de",
///     ClientOptions::new().with_user_agent("MyBot/1.0 (bot@example.org)"),
/// )?;
/// # Ok::<(), mediawiki_client::Error>(())
/// ```
///
/// # Calling Actions
///
/// ```rust,no_run
/// use mediawiki_client::api::{MediaWikiClient, Params};
///
/// # async fn example() -> mediawiki_client::Result<()> {
/// let wiki = MediaWikiClient::wikipedia("en", Default::default())?;
///
/// let result = wiki
///     .call("query", Params::new().with("list", "random").with("rnlimit", 3i64))
///     .await?;
/// println!("{:?}", result["query"]["random"]);
///
/// println!("{}", wiki.page_content("Rust (programming language)").await?);
/// # Ok(())
/// # }
/// ```
pub struct MediaWikiClient {
    /// The `api.php` URL
    endpoint: Url,
    /// Locked HTTP transport
    transport: Transport,
    /// Print requests to stderr
    verbose: AtomicBool,
    /// Memoized `siteinfo` result
    site_info: Mutex<Option<Arc<SiteInfo>>>,
}

impl MediaWikiClient {
    /// Creates a client with default options.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidEndpoint`] if `endpoint` is not a valid URL.
    pub fn new(endpoint: &str) -> Result<Self> {
        Self::with_options(endpoint, ClientOptions::default())
    }

    /// Creates a client with the given options.
    ///
    /// No request is sent during construction.
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidEndpoint`] if `endpoint` is not a valid URL
    /// - [`Error::Network`] if the HTTP client cannot be built
    pub fn with_options(endpoint: &str, options: ClientOptions) -> Result<Self> {
        let endpoint = Url::parse(endpoint).map_err(|source| Error::InvalidEndpoint {
            endpoint: endpoint.to_string(),
            source,
        })?;
        let transport = Transport::new(&options.effective_user_agent())?;

        Ok(Self {
            endpoint,
            transport,
            verbose: AtomicBool::new(options.verbose),
            site_info: Mutex::new(None),
        })
    }

    /// Creates a client for the Wikipedia in language `lang`.
    pub fn wikipedia(lang: &str, options: ClientOptions) -> Result<Self> {
        Self::with_options(&wikipedia_endpoint(lang), options)
    }

    /// The `api.php` URL this client talks to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Are requests printed to stderr?
    pub fn verbose(&self) -> bool {
        self.verbose.load(Ordering::Relaxed)
    }

    /// Starts printing requests to stderr.
    pub fn verbose_on(&self) {
        self.verbose.store(true, Ordering::Relaxed);
    }

    /// Stops printing requests to stderr.
    pub fn verbose_off(&self) {
        self.verbose.store(false, Ordering::Relaxed);
    }

    /// Sends one request to `api.php` and decodes the response.
    ///
    /// `format` is always set to `yaml`, whatever the caller passed. The
    /// request is sent as POST when `force_post` is set or `params` carries
    /// the post flag (see [`Params::post`]).
    ///
    /// # Errors
    ///
    /// - [`Error::Network`] if the HTTP round trip fails
    /// - [`Error::Api`] if the body is not a YAML document or carries an error
    pub async fn api_request(&self, mut params: Params, force_post: bool) -> Result<Value> {
        params.insert("format", RESPONSE_FORMAT);
        let post = params.take_post_flag() || force_post;
        let url = params.to_url(&self.endpoint);
        let method = if post { "POST" } else { "GET" };

        tracing::debug!("{} {} {}", method, self.endpoint, params);
        if self.verbose() {
            eprintln!("{}: {}", style(method).cyan(), params);
        }

        let body = self.transport.send(&url, post).await?;
        Ok(parse_body(&body)?)
    }

    /// Invokes an API action.
    ///
    /// `action` overrides any `action` entry in `params`. A `mustbeposted`
    /// error is answered by sending the same request once more as POST; the
    /// outcome of that second request is returned as-is.
    ///
    /// # Errors
    ///
    /// - [`Error::UnsupportedAction`] if the wiki reports `unknown_action`
    /// - [`Error::Api`] for every other API error
    /// - [`Error::Network`] if the HTTP round trip fails
    pub async fn call(&self, action: &str, params: Params) -> Result<Value> {
        let params = params.with("action", action);

        match self.api_request(params.clone(), false).await {
            Err(Error::Api(e)) if e.code() == MUST_BE_POSTED => {
                tracing::debug!("Action '{}' must be posted, retrying", action);
                self.api_request(params, true).await
            }
            Err(Error::Api(e)) if e.code() == UNKNOWN_ACTION => Err(Error::UnsupportedAction {
                action: action.to_string(),
                source: e,
            }),
            other => other,
        }
    }

    /// Returns the wikitext of the latest revision of `title`.
    ///
    /// A page the wiki reports as missing yields an empty string.
    ///
    /// # Errors
    ///
    /// Any error from [`call`](Self::call), or [`Error::UnexpectedResponse`]
    /// if the response has no page or revision content.
    pub async fn page_content(&self, title: &str) -> Result<String> {
        let params = Params::new()
            .with("prop", "revisions")
            .with("titles", title)
            .with("rvprop", "content");
        let result = self.call("query", params).await?;

        let page = result
            .get("query")
            .and_then(|q| q.get("pages"))
            .and_then(first_entry)
            .ok_or_else(|| Error::UnexpectedResponse(format!("no pages returned for '{}'", title)))?;

        if page.get("missing").is_some() {
            return Ok(String::new());
        }

        page.get("revisions")
            .and_then(first_entry)
            .and_then(revision_content)
            .map(str::to_string)
            .ok_or_else(|| Error::UnexpectedResponse(format!("no revision content for '{}'", title)))
    }

    /// Returns the general site information, fetching it on first use.
    ///
    /// Two tasks asking at the same time before the first answer arrives may
    /// both send the request; the later result overwrites the earlier one.
    pub async fn site_info(&self) -> Result<Arc<SiteInfo>> {
        if let Some(info) = self.cached_site_info() {
            return Ok(info);
        }

        let result = self
            .call("query", Params::new().with("meta", "siteinfo"))
            .await?;
        let general = result
            .get("query")
            .and_then(|q| q.get("general"))
            .cloned()
            .ok_or_else(|| Error::UnexpectedResponse("siteinfo without query.general".to_string()))?;
        let info: SiteInfo = serde_yaml::from_value(general)
            .map_err(|e| Error::UnexpectedResponse(format!("siteinfo: {}", e)))?;

        let info = Arc::new(info);
        *self.site_info.lock().unwrap_or_else(|e| e.into_inner()) = Some(Arc::clone(&info));
        Ok(info)
    }

    fn cached_site_info(&self) -> Option<Arc<SiteInfo>> {
        self.site_info
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// Returns `"<sitename> (<lang>), <endpoint>"`.
    ///
    /// Needs [`site_info`](Self::site_info), so it fails when that fails.
    pub async fn describe(&self) -> Result<String> {
        let info = self.site_info().await?;
        Ok(format!("{} ({}), {}", info.sitename, info.lang, self.endpoint))
    }

    /// Sends `action=login` with the given credentials.
    ///
    /// The response is returned untouched; token handshakes are left to the caller.
    pub async fn login(&self, name: &str, password: &str) -> Result<Value> {
        let params = Params::new()
            .with("lgname", name)
            .with("lgpassword", password)
            .post();
        self.call("login", params).await
    }

    /// Sends `action=logout`.
    pub async fn logout(&self) -> Result<Value> {
        self.call("logout", Params::new().post()).await
    }
}

impl fmt::Debug for MediaWikiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaWikiClient")
            .field("endpoint", &self.endpoint.as_str())
            .field("verbose", &self.verbose())
            .finish_non_exhaustive()
    }
}

/// First value of a mapping (pages keyed by id) or first element of a sequence.
fn first_entry(value: &Value) -> Option<&Value> {
    match value {
        Value::Mapping(map) => map.values().next(),
        Value::Sequence(seq) => seq.first(),
        _ => None,
    }
}

/// Revision text in any of the layouts MediaWiki has used: `*`, `content`,
/// or `slots.main.*` / `slots.main.content`.
fn revision_content(revision: &Value) -> Option<&str> {
    fn text(value: &Value) -> Option<&str> {
        value
            .get("*")
            .or_else(|| value.get("content"))
            .and_then(Value::as_str)
    }

    text(revision).or_else(|| {
        revision
            .get("slots")
            .and_then(|s| s.get("main"))
            .and_then(text)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_first_entry() {
        assert_eq!(first_entry(&yaml("'12': a\n'13': b\n")), Some(&Value::from("a")));
        assert_eq!(first_entry(&yaml("- x\n- y\n")), Some(&Value::from("x")));
        assert_eq!(first_entry(&yaml("[]")), None);
        assert_eq!(first_entry(&yaml("text")), None);
    }

    #[test]
    fn test_revision_content_layouts() {
        assert_eq!(revision_content(&yaml("'*': legacy\n")), Some("legacy"));
        assert_eq!(revision_content(&yaml("content: v2\n")), Some("v2"));
        assert_eq!(revision_content(&yaml("slots:\n  main:\n    '*': slotted\n")), Some("slotted"));
        assert_eq!(revision_content(&yaml("revid: 1\n")), None);
    }

    #[test]
    fn test_invalid_endpoint() {
        let err = MediaWikiClient::new("not a url").unwrap_err();
        assert!(matches!(err, Error::InvalidEndpoint { .. }));
    }

    #[test]
    fn test_verbose_toggles() {
        let client = MediaWikiClient::with_options(
            "http://localhost/w/api.php",
            ClientOptions::new().with_verbose(true),
        )
        .unwrap();
        assert!(client.verbose());
        client.verbose_off();
        assert!(!client.verbose());
        client.verbose_on();
        assert!(client.verbose());
    }

    #[test]
    fn test_wikipedia_client() {
        let client = MediaWikiClient::wikipedia("fr", ClientOptions::default()).unwrap();
        assert_eq!(client.endpoint().as_str(), "https://fr.wikipedia.org/w/api.php");
        assert!(format!("{:?}", client).contains("fr.wikipedia.org"));
    }
}
