//
//  mediawiki-client
//  api/transport.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! HTTP transport for `api.php`
//!
//! A thin wrapper around a [`reqwest::Client`] with a cookie store. One
//! transport serves one [`MediaWikiClient`](super::MediaWikiClient); the mutex
//! around the handle keeps a single request/response cycle in flight at a time,
//! so session cookies set by one response are in place before the next request
//! is built.

use reqwest::Client;
use tokio::sync::Mutex;
use url::Url;

/// Serialized access to a cookie-keeping HTTP client.
#[derive(Debug)]
pub struct Transport {
    http: Mutex<Client>,
}

impl Transport {
    /// Creates a transport sending `user_agent` with every request.
    ///
    /// Cookies are kept for the life of the transport and redirects are followed.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(user_agent: &str) -> Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(user_agent)
            .cookie_store(true)
            .build()?;

        Ok(Self {
            http: Mutex::new(http),
        })
    }

    /// Performs one HTTP round trip and returns the body text.
    ///
    /// The lock is held from request setup through the end of the body read.
    /// Non-success statuses are not errors here; MediaWiki reports failures in
    /// the body.
    pub async fn send(&self, url: &Url, post: bool) -> Result<String, reqwest::Error> {
        let http = self.http.lock().await;

        let request = if post {
            http.post(url.clone())
        } else {
            http.get(url.clone())
        };

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::trace!("{} {} -> {} ({} bytes)", if post { "POST" } else { "GET" }, url, status, body.len());

        Ok(body)
    }
}
