//
//  mediawiki-client
//  api/params.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Request parameters for `api.php`
//!
//! [`Params`] is an ordered map from parameter name to [`ParamValue`]. It is
//! built fresh for every call and serialized into the query string of the
//! endpoint URL.
//!
//! ## Value Encoding
//!
//! | Value | Wire form |
//! |-------|-----------|
//! | `Text("x")` | `x` |
//! | `Int(5)` | `5` |
//! | `Bool(true)` | `1` |
//! | `Bool(false)` | omitted (MediaWiki treats presence as true) |
//! | `List(["a", "b"])` | `a\|b` |

use std::fmt;

use url::Url;

/// Name of the parameter that selects POST instead of GET.
///
/// It is stripped before the query string is built and never reaches the wire.
pub const POST_FLAG: &str = "post";

/// A single parameter value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamValue {
    /// Plain text, sent as-is.
    Text(String),
    /// Integer, sent in decimal.
    Int(i64),
    /// Boolean flag.
    Bool(bool),
    /// Multi-value parameter, joined with `|`.
    List(Vec<String>),
}

impl ParamValue {
    /// Returns the wire form of this value, or `None` when it should be omitted.
    pub fn to_query_value(&self) -> Option<String> {
        match self {
            ParamValue::Text(s) => Some(s.clone()),
            ParamValue::Int(n) => Some(n.to_string()),
            ParamValue::Bool(true) => Some("1".to_string()),
            ParamValue::Bool(false) => None,
            ParamValue::List(items) => Some(items.join("|")),
        }
    }

    /// Interprets this value as a flag.
    ///
    /// Text values are truthy unless empty, `"0"` or `"false"`.
    pub fn is_truthy(&self) -> bool {
        match self {
            ParamValue::Bool(b) => *b,
            ParamValue::Int(n) => *n != 0,
            ParamValue::Text(s) => !matches!(s.as_str(), "" | "0" | "false"),
            ParamValue::List(items) => !items.is_empty(),
        }
    }
}

impl fmt::Display for ParamValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParamValue::Text(s) => write!(f, "{:?}", s),
            ParamValue::Int(n) => write!(f, "{}", n),
            ParamValue::Bool(b) => write!(f, "{}", b),
            ParamValue::List(items) => write!(f, "{:?}", items),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        ParamValue::Text(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        ParamValue::Text(value)
    }
}

impl From<&String> for ParamValue {
    fn from(value: &String) -> Self {
        ParamValue::Text(value.clone())
    }
}

impl From<i64> for ParamValue {
    fn from(value: i64) -> Self {
        ParamValue::Int(value)
    }
}

impl From<u32> for ParamValue {
    fn from(value: u32) -> Self {
        ParamValue::Int(i64::from(value))
    }
}

impl From<bool> for ParamValue {
    fn from(value: bool) -> Self {
        ParamValue::Bool(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(value: Vec<String>) -> Self {
        ParamValue::List(value)
    }
}

impl From<&[&str]> for ParamValue {
    fn from(value: &[&str]) -> Self {
        ParamValue::List(value.iter().map(|s| s.to_string()).collect())
    }
}

/// Ordered parameter map for a single API request.
///
/// Inserting a key that is already present replaces its value without
/// changing its position.
///
/// # Example
///
/// ```rust
/// use mediawiki_client::api::Params;
///
/// let params = Params::new()
///     .with("prop", "revisions")
///     .with("titles", "Main Page")
///     .with("rvlimit", 1i64);
///
/// assert_eq!(params.len(), 3);
/// assert_eq!(params.get("prop").and_then(|v| v.to_query_value()), Some("revisions".into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    entries: Vec<(String, ParamValue)>,
}

impl Params {
    /// Creates an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Params::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Marks the request to be sent as POST.
    pub fn post(self) -> Self {
        self.with(POST_FLAG, true)
    }

    /// Inserts or replaces a parameter.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Returns the value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Removes and returns the value for `key`, if present.
    pub fn remove(&mut self, key: &str) -> Option<ParamValue> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Removes the post flag and reports whether it was set.
    pub fn take_post_flag(&mut self) -> bool {
        self.remove(POST_FLAG).is_some_and(|v| v.is_truthy())
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Are there no parameters?
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over the parameters in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Builds the request URL: `base` with its query replaced by these parameters.
    pub fn to_url(&self, base: &Url) -> Url {
        let mut url = base.clone();
        url.set_query(None);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in self.iter() {
                if let Some(v) = value.to_query_value() {
                    pairs.append_pair(key, &v);
                }
            }
        }
        url
    }
}

impl fmt::Display for Params {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", key, value)?;
        }
        write!(f, "}}")
    }
}

impl<K, V> FromIterator<(K, V)> for Params
where
    K: Into<String>,
    V: Into<ParamValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = Params::new();
        for (key, value) in iter {
            params.insert(key, value);
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut params = Params::new().with("a", "1").with("b", "2");
        params.insert("a", "3");
        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["a", "b"]);
        assert_eq!(params.len(), 2);
        assert!(!params.is_empty());
        assert_eq!(params.get("a"), Some(&ParamValue::Text("3".into())));
    }

    #[test]
    fn test_take_post_flag() {
        let mut params = Params::new().with("action", "edit").post();
        assert!(params.take_post_flag());
        assert!(params.get(POST_FLAG).is_none());
        assert!(!params.take_post_flag());
    }

    #[test]
    fn test_false_post_flag_is_stripped_but_not_set() {
        let mut params = Params::new().with(POST_FLAG, false);
        assert!(!params.take_post_flag());
        assert!(params.is_empty());
    }

    #[test]
    fn test_to_url_replaces_existing_query() {
        let base = Url::parse("http://localhost/w/api.php?stale=1").unwrap();
        let params = Params::new()
            .with("action", "query")
            .with("titles", "Main Page")
            .with("redirects", true)
            .with("utf8", false)
            .with("prop", &["info", "revisions"][..]);

        let url = params.to_url(&base);
        assert_eq!(url.path(), "/w/api.php");
        assert_eq!(
            url.query(),
            Some("action=query&titles=Main+Page&redirects=1&prop=info%7Crevisions")
        );
    }

    #[test]
    fn test_display_lists_in_order() {
        let params = Params::new().with("action", "query").with("limit", 5i64);
        assert_eq!(params.to_string(), r#"{action: "query", limit: 5}"#);
    }
}
