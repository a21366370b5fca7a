//
//  mediawiki-client
//  api/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # API Client Layer
//!
//! This module provides a generic client for the MediaWiki web API (`api.php`).
//!
//! ## Architecture
//!
//! The API layer is organized as follows:
//!
//! - [`client`]: [`MediaWikiClient`] with the generic `call` path and convenience methods
//! - [`transport`]: Locked, cookie-keeping HTTP transport
//! - [`params`]: Ordered request parameters and query encoding
//! - [`response`]: Response body decoding
//! - [`error`]: [`ApiError`], payload classification and the crate [`Error`]
//! - [`options`]: Client construction options
//! - [`siteinfo`]: Typed general site information
//! - [`registry`]: Caller-owned registry of shared clients
//!
//! ## Usage
//!
//! ```rust,no_run
//! use mediawiki_client::api::{MediaWikiClient, Params};
//!
//! # async fn example() -> mediawiki_client::Result<()> {
//! let wiki = MediaWikiClient::new("http://localhost/w/api.php")?;
//! wiki.login("MyBot", "password123").await?;
//! wiki.call("purge", Params::new().with("titles", "Main Page").post()).await?;
//! wiki.logout().await?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! - `Error::Api`: the wiki answered with an error (or with something unparseable)
//! - `Error::UnsupportedAction`: the wiki does not know the action
//! - `Error::Network`: the HTTP round trip failed

pub mod client;
pub mod error;
pub mod options;
pub mod params;
pub mod registry;
pub mod response;
pub mod siteinfo;
pub mod transport;

pub use client::MediaWikiClient;
pub use error::{classify, ApiError, Error, ErrorClass, ErrorPayload, Result};
pub use options::{default_user_agent, ClientOptions};
pub use params::{ParamValue, Params};
pub use registry::ClientRegistry;
pub use siteinfo::SiteInfo;
