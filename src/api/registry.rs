//
//  mediawiki-client
//  api/registry.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Caller-owned registry of clients
//!
//! Keeping one client per wiki preserves its session cookies and its cached
//! site information. [`ClientRegistry`] hands out shared clients keyed by
//! name; for keys it has never seen, [`ClientRegistry::get_or_create`] builds
//! a Wikipedia client treating the key as a language code.

use std::collections::HashMap;
use std::sync::Arc;

use super::client::MediaWikiClient;
use super::error::Result;
use super::options::ClientOptions;

/// Shared clients keyed by wiki name or Wikipedia language code.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use mediawiki_client::api::ClientRegistry;
///
/// let mut registry = ClientRegistry::default();
/// let de = registry.get_or_create("de")?;
/// let again = registry.get_or_create("de")?;
///
/// assert!(Arc::ptr_eq(&de, &again));
/// assert_eq!(de.endpoint().as_str(), "https://de.wikipedia.org/w/api.php");
/// # Ok::<(), mediawiki_client::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct ClientRegistry {
    options: ClientOptions,
    clients: HashMap<String, Arc<MediaWikiClient>>,
}

impl ClientRegistry {
    /// Creates an empty registry whose Wikipedia clients use `options`.
    pub fn new(options: ClientOptions) -> Self {
        Self {
            options,
            clients: HashMap::new(),
        }
    }

    /// Returns the client registered under `key`.
    pub fn get(&self, key: &str) -> Option<Arc<MediaWikiClient>> {
        self.clients.get(key).cloned()
    }

    /// Returns the client for `key`, creating a Wikipedia client for language
    /// `key` if none is registered.
    pub fn get_or_create(&mut self, key: &str) -> Result<Arc<MediaWikiClient>> {
        if let Some(client) = self.clients.get(key) {
            return Ok(Arc::clone(client));
        }

        let client = Arc::new(MediaWikiClient::wikipedia(key, self.options.clone())?);
        self.clients.insert(key.to_string(), Arc::clone(&client));
        Ok(client)
    }

    /// Registers `client` under `key`, returning the client it replaces.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        client: MediaWikiClient,
    ) -> Option<Arc<MediaWikiClient>> {
        self.clients.insert(key.into(), Arc::new(client))
    }

    pub fn len(&self) -> usize {
        self.clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clients.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_or_create_reuses_clients() {
        let mut registry = ClientRegistry::new(ClientOptions::new().with_user_agent("TestBot/1.0"));
        let en = registry.get_or_create("en").unwrap();
        let en_again = registry.get_or_create("en").unwrap();
        let de = registry.get_or_create("de").unwrap();

        assert!(Arc::ptr_eq(&en, &en_again));
        assert!(!Arc::ptr_eq(&en, &de));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_insert_custom_client() {
        let mut registry = ClientRegistry::default();
        assert!(registry.is_empty());

        let local = MediaWikiClient::new("http://localhost/w/api.php").unwrap();
        assert!(registry.insert("local", local).is_none());

        let client = registry.get("local").unwrap();
        assert_eq!(client.endpoint().host_str(), Some("localhost"));
        assert!(registry.get("missing").is_none());
    }
}
