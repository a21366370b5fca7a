//
//  mediawiki-client
//  api/error.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Error types for MediaWiki API operations
//!
//! This module holds the two error types of the crate:
//!
//! - [`ApiError`] - a normalized MediaWiki error, built from whatever the server
//!   sent back (a structured `error` mapping, a plain-text error line, or a
//!   body that could not be parsed at all)
//! - [`Error`] - the crate-wide error enum returned by every client operation
//!
//! # Payload Classification
//!
//! Every [`ApiError`] is produced by [`classify`], a total function over
//! [`ErrorPayload`]:
//!
//! | Payload | Class | `code` |
//! |---------|-------|--------|
//! | mapping with an `error` mapping | [`ErrorClass::Structured`] | `error.code` |
//! | text `unknown_<word>: <message>` | [`ErrorClass::UnknownPrefixed`] | `unknown_<word>` |
//! | YAML help document | [`ErrorClass::Help`] | `help` |
//! | anything else | [`ErrorClass::Unknown`] | `unknown` |
//!
//! # Example
//!
//! ```rust
//! use mediawiki_client::api::{ApiError, ErrorPayload};
//!
//! let err = ApiError::new(ErrorPayload::Text("unknown_action: Unrecognized value".into()));
//! assert_eq!(err.code(), "unknown_action");
//! assert_eq!(err.info(), Some("Unrecognized value"));
//! assert_eq!(err.text(), Some("Unrecognized value"));
//! ```

use once_cell::sync::Lazy;
use regex::Regex;
use serde_yaml::Value;
use thiserror::Error;

/// Matches plain-text errors such as `unknown_action: Unrecognized value`.
static UNKNOWN_PREFIXED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?ms)^(unknown_[^ \n]*): (.*)\z").unwrap()
});

/// Matches the YAML help document the server emits for requests without an action.
static HELP_DOCUMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?s)\A---\r?\n *error: *\r?\n *code: +help *\r?\n *info: *\r?\n *"?\*"?: *(?:\|[-+]?)?[ \t]*(?:\r?\n)+(.*)\z"#,
    )
    .unwrap()
});

/// Shown by `Display` when the server sent no `info`.
const NO_INFO: &str = "(no info given, try text)";

/// The raw error payload an [`ApiError`] was built from.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPayload {
    /// A parsed response mapping containing an `error` key.
    Structured(Value),
    /// A response body that was not a parseable YAML document.
    Text(String),
    /// Any other value.
    Other(Value),
}

/// Result of classifying an [`ErrorPayload`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ErrorClass {
    /// `error.code`, `error.info` and `error.*` from a structured response.
    Structured {
        code: String,
        info: Option<String>,
        text: Option<String>,
    },
    /// A plain-text `unknown_<word>: <message>` line.
    UnknownPrefixed { code: String, info: String },
    /// The YAML help document; `text` is the help content.
    Help { text: String },
    /// Fallback; `info` is the payload's textual representation.
    Unknown { info: String },
}

/// Classifies an error payload. Never fails: anything that cannot be read
/// lands in [`ErrorClass::Unknown`].
pub fn classify(payload: &ErrorPayload) -> ErrorClass {
    match payload {
        ErrorPayload::Structured(value) => classify_structured(value),
        ErrorPayload::Text(text) => classify_text(text),
        ErrorPayload::Other(value) => ErrorClass::Unknown {
            info: render(value),
        },
    }
}

fn classify_structured(value: &Value) -> ErrorClass {
    let error = match value.get("error") {
        Some(error @ Value::Mapping(_)) => error,
        Some(other) => return ErrorClass::Unknown { info: render(other) },
        None => return ErrorClass::Unknown { info: render(value) },
    };

    let field = |key: &str| error.get(key).and_then(scalar_to_string);

    ErrorClass::Structured {
        code: field("code").unwrap_or_else(|| "unknown".to_string()),
        info: field("info"),
        text: field("*").or_else(|| field("text")),
    }
}

fn classify_text(text: &str) -> ErrorClass {
    if let Some(caps) = UNKNOWN_PREFIXED.captures(text) {
        return ErrorClass::UnknownPrefixed {
            code: caps[1].to_string(),
            info: caps[2].trim_end().to_string(),
        };
    }

    if let Some(caps) = HELP_DOCUMENT.captures(text) {
        return ErrorClass::Help {
            text: caps[1].trim_end().to_string(),
        };
    }

    ErrorClass::Unknown {
        info: non_empty(text.trim_end().to_string()),
    }
}

/// Stringifies scalar YAML values; mappings and sequences are rendered as YAML.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        other => Some(render(other)),
    }
}

/// Textual representation of a value. A rendering failure is described
/// instead of propagated.
fn render(value: &Value) -> String {
    let rendered = match value {
        Value::String(s) => s.clone(),
        other => match serde_yaml::to_string(other) {
            Ok(s) => s.trim_end().to_string(),
            Err(e) => e.to_string(),
        },
    };
    non_empty(rendered)
}

fn non_empty(s: String) -> String {
    if s.is_empty() {
        "(empty response)".to_string()
    } else {
        s
    }
}

/// A normalized MediaWiki API error.
///
/// `text` falls back to `info` when the payload carries no separate detail.
/// Construction always succeeds; see [`classify`].
#[derive(Error, Debug, Clone)]
#[error("{code} - {}", .info.as_deref().unwrap_or(NO_INFO))]
pub struct ApiError {
    code: String,
    info: Option<String>,
    text: Option<String>,
    raw: ErrorPayload,
}

impl ApiError {
    /// Builds an error from a raw payload.
    pub fn new(raw: ErrorPayload) -> Self {
        let (code, info, text) = match classify(&raw) {
            ErrorClass::Structured { code, info, text } => (code, info, text),
            ErrorClass::UnknownPrefixed { code, info } => (code, Some(info), None),
            ErrorClass::Help { text } => ("help".to_string(), None, Some(text)),
            ErrorClass::Unknown { info } => ("unknown".to_string(), Some(info), None),
        };
        let text = text.or_else(|| info.clone());

        Self {
            code,
            info,
            text,
            raw,
        }
    }

    /// Short machine-readable error code, e.g. `mustbeposted`.
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Human-readable message.
    pub fn info(&self) -> Option<&str> {
        self.info.as_deref()
    }

    /// Additional detail; equals `info` unless the server sent its own.
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    /// The payload this error was built from.
    pub fn raw(&self) -> &ErrorPayload {
        &self.raw
    }
}

impl From<ErrorPayload> for ApiError {
    fn from(raw: ErrorPayload) -> Self {
        ApiError::new(raw)
    }
}

/// Errors returned by [`MediaWikiClient`](crate::api::MediaWikiClient) operations.
///
/// # Variants
///
/// | Variant | Cause |
/// |---------|-------|
/// | `Network` | Connection, DNS or I/O failure in the HTTP layer |
/// | `Api` | The server answered with an error, or with an unparseable body |
/// | `UnsupportedAction` | The server does not know the requested action |
/// | `UnexpectedResponse` | A convenience method could not read the response shape |
/// | `InvalidEndpoint` | The endpoint URL does not parse |
/// | `UnknownOption` / `InvalidOption` | Bad client options |
#[derive(Error, Debug)]
pub enum Error {
    /// A network-level error occurred during the request.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server reported an error.
    #[error("API error: {0}")]
    Api(#[from] ApiError),

    /// The requested action has no server-side handler.
    #[error("Unsupported action: {action}")]
    UnsupportedAction {
        action: String,
        #[source]
        source: ApiError,
    },

    /// A response did not have the shape a convenience method expects.
    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The endpoint is not a valid URL.
    #[error("Invalid endpoint '{endpoint}': {source}")]
    InvalidEndpoint {
        endpoint: String,
        #[source]
        source: url::ParseError,
    },

    /// A client option key is not recognized.
    #[error("Unknown option '{0}'. Valid options: verbose, user_agent")]
    UnknownOption(String),

    /// A client option has a value of the wrong form.
    #[error("Invalid value for option '{key}': {reason}")]
    InvalidOption { key: String, reason: String },
}

impl Error {
    /// Returns the API error code, if this error carries one.
    pub fn api_code(&self) -> Option<&str> {
        match self {
            Error::Api(e) => Some(e.code()),
            Error::UnsupportedAction { source, .. } => Some(source.code()),
            _ => None,
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    fn yaml(s: &str) -> Value {
        serde_yaml::from_str(s).unwrap()
    }

    #[test]
    fn test_structured_with_all_fields() {
        let value = yaml("error:\n  code: badtoken\n  info: Invalid token\n  \"*\": See docs\n");
        let err = ApiError::new(ErrorPayload::Structured(value));
        assert_eq!(err.code(), "badtoken");
        assert_eq!(err.info(), Some("Invalid token"));
        assert_eq!(err.text(), Some("See docs"));
    }

    #[test]
    fn test_structured_text_field() {
        let value = yaml("error:\n  code: C\n  info: I\n  text: T\n");
        let err = ApiError::new(ErrorPayload::Structured(value));
        assert_eq!(err.code(), "C");
        assert_eq!(err.info(), Some("I"));
        assert_eq!(err.text(), Some("T"));
    }

    #[test]
    fn test_structured_text_defaults_to_info() {
        let value = yaml("error:\n  code: mustbeposted\n  info: The edit module requires a POST request\n");
        let err = ApiError::new(ErrorPayload::Structured(value));
        assert_eq!(err.code(), "mustbeposted");
        assert_eq!(err.text(), err.info());
    }

    #[test]
    fn test_structured_numeric_values_are_stringified() {
        let value = yaml("error:\n  code: 42\n  info: true\n");
        let err = ApiError::new(ErrorPayload::Structured(value));
        assert_eq!(err.code(), "42");
        assert_eq!(err.info(), Some("true"));
    }

    #[test]
    fn test_structured_without_code_falls_back() {
        let value = yaml("error:\n  info: Something broke\n");
        let err = ApiError::new(ErrorPayload::Structured(value));
        assert_eq!(err.code(), "unknown");
        assert_eq!(err.info(), Some("Something broke"));
    }

    #[test]
    fn test_structured_error_not_a_mapping() {
        let value = yaml("error: just a string\n");
        let err = ApiError::new(ErrorPayload::Structured(value));
        assert_eq!(err.code(), "unknown");
        assert_eq!(err.info(), Some("just a string"));
    }

    #[test]
    fn test_unknown_prefixed_text() {
        let err = ApiError::new(ErrorPayload::Text("unknown_foo: bar baz".into()));
        assert_eq!(err.code(), "unknown_foo");
        assert_eq!(err.info(), Some("bar baz"));
        assert_eq!(err.text(), Some("bar baz"));
    }

    #[test]
    fn test_unknown_prefixed_on_later_line() {
        let body = "<br />\nunknown_action: Unrecognized value for parameter 'action'\n";
        let err = ApiError::new(ErrorPayload::Text(body.into()));
        assert_eq!(err.code(), "unknown_action");
        assert_eq!(err.info(), Some("Unrecognized value for parameter 'action'"));
    }

    #[test]
    fn test_help_document() {
        let body = "---\nerror:\n  code: help\n  info:\n  \"*\": |\n\n    Usage: api.php?action=...\n    More help\n";
        let err = ApiError::new(ErrorPayload::Text(body.into()));
        assert_eq!(err.code(), "help");
        assert_eq!(err.info(), None);
        assert!(err.text().unwrap().contains("Usage: api.php"));
        assert!(err.to_string().contains("(no info given, try text)"));
    }

    #[test]
    fn test_plain_text_fallback() {
        let err = ApiError::new(ErrorPayload::Text("<html>Internal error</html>".into()));
        assert_eq!(err.code(), "unknown");
        assert_eq!(err.info(), Some("<html>Internal error</html>"));
    }

    #[test]
    fn test_empty_text_has_non_empty_info() {
        let err = ApiError::new(ErrorPayload::Text(String::new()));
        assert_eq!(err.code(), "unknown");
        assert!(!err.info().unwrap().is_empty());
    }

    #[test]
    fn test_other_value_is_rendered() {
        let err = ApiError::new(ErrorPayload::Other(yaml("- a\n- b\n")));
        assert_eq!(err.code(), "unknown");
        assert_eq!(err.info(), Some("- a\n- b"));
    }

    #[test]
    fn test_display() {
        let err = ApiError::new(ErrorPayload::Text("unknown_foo: bar".into()));
        assert_eq!(err.to_string(), "unknown_foo - bar");
    }

    #[test]
    fn test_raw_payload_is_kept() {
        let payload = ErrorPayload::Text("oops".into());
        let err = ApiError::new(payload.clone());
        assert_eq!(err.raw(), &payload);
    }

    #[test]
    fn test_api_code() {
        let api = ApiError::new(ErrorPayload::Text("unknown_action: nope".into()));
        let err = Error::UnsupportedAction {
            action: "frobnicate".into(),
            source: api.clone(),
        };
        assert_eq!(err.api_code(), Some("unknown_action"));
        assert_eq!(Error::Api(api).api_code(), Some("unknown_action"));
        assert_eq!(Error::UnexpectedResponse("x".into()).api_code(), None);
    }
}
