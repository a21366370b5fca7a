//
//  mediawiki-client
//  lib.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # MediaWiki Client Library
//!
//! A generic client for the MediaWiki web API, and the library behind the
//! `mw` command-line tool.
//!
//! ## Overview
//!
//! Rather than wrapping each of the hundreds of `api.php` modules (and falling
//! behind whenever a wiki adds one), the client exposes a single call path:
//! [`MediaWikiClient::call`] takes an action name plus parameters and returns
//! the decoded response. Errors reported by the wiki, in whatever shape, are
//! normalized into [`ApiError`].
//!
//! ## Features
//!
//! - **Any Action**: `call("query", ...)`, `call("parse", ...)`, `call("edit", ...)`
//! - **POST Fallback**: actions answered with `mustbeposted` are resent as POST
//! - **Normalized Errors**: structured, plain-text and unparseable error bodies
//!   all become an [`ApiError`] with a `code`
//! - **Sessions**: cookies are kept across calls on one client
//! - **Helpers**: page wikitext, cached site information, login/logout
//!
//! ## Module Structure
//!
//! - [`api`]: The client, its transport, parameters and errors
//! - [`cli`]: Command-line interface definitions using clap
//! - [`config`]: Configuration file management
//! - [`output`]: Output formatting (YAML, JSON, tables)
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use mediawiki_client::{MediaWikiClient, Params};
//!
//! # async fn example() -> mediawiki_client::Result<()> {
//! // Source of the German Wikipedia's main page
//! let dewiki = MediaWikiClient::wikipedia("de", Default::default())?;
//! println!("{}", dewiki.page_content("Wikipedia:Hauptseite").await?);
//!
//! // Any other action
//! let result = dewiki
//!     .call("query", Params::new().with("meta", "userinfo"))
//!     .await?;
//! println!("{:?}", result["query"]["userinfo"]["name"]);
//! # Ok(())
//! # }
//! ```

/// MediaWiki API client.
///
/// Provides [`MediaWikiClient`] with the generic `call` path, the locked HTTP
/// transport, request parameters, response decoding and error normalization.
pub mod api;

/// Command-line interface definitions.
///
/// Contains the `mw` commands, arguments, and subcommands defined using the
/// clap derive API.
pub mod cli;

/// Configuration file management.
///
/// Manages the CLI's configuration stored in platform-specific locations:
/// - Linux: `~/.config/mw/config.toml`
/// - macOS: `~/Library/Application Support/mw/config.toml`
/// - Windows: `%APPDATA%\mw\config.toml`
pub mod config;

/// Output formatting for API results.
pub mod output;

pub use api::{ApiError, ClientOptions, Error, MediaWikiClient, Params, Result};

/// Re-export of the main CLI struct for convenient access.
pub use cli::Cli;

/// Re-export of the configuration struct.
pub use config::Config;

/// Application name constant.
///
/// The name of the CLI binary, used for display purposes and configuration paths.
pub const APP_NAME: &str = "mw";

/// Library version, from Cargo.toml.
///
/// Also embedded in the default User-Agent.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Exit codes for the CLI.
///
/// # Exit Code Ranges
///
/// - `0`: Success
/// - `1-3`: General errors and usage issues
/// - `8-15`: Errors reported by the wiki
/// - `32+`: Network issues
pub mod exit_codes {
    /// Successful execution.
    pub const SUCCESS: i32 = 0;

    /// General error.
    pub const ERROR: i32 = 1;

    /// Invalid usage or arguments.
    pub const USAGE: i32 = 2;

    /// The wiki answered with an API error.
    pub const API_ERROR: i32 = 8;

    /// The wiki does not support the requested action.
    pub const UNSUPPORTED_ACTION: i32 = 9;

    /// The HTTP round trip failed.
    pub const NETWORK_ERROR: i32 = 32;
}
