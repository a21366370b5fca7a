//
//  mediawiki-client
//  api/response.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Response body decoding
//!
//! `api.php` is always asked for `format=yaml`, so a well-formed body starts
//! with the YAML document-start marker `---`. Anything else (HTML error pages,
//! PHP warnings, plain-text errors from hand-written endpoints) is turned into
//! an [`ApiError`] carrying the raw text.

use serde_yaml::{Mapping, Value};

use super::error::{ApiError, ErrorPayload};

/// Value of the `format` parameter sent with every request.
pub const RESPONSE_FORMAT: &str = "yaml";

/// Document-start marker every well-formed response begins with.
pub const DOCUMENT_MARKER: &str = "---";

/// Reports whether `body` starts with the document marker on its own or
/// followed by inline content.
pub fn has_document_marker(body: &str) -> bool {
    match body.strip_prefix(DOCUMENT_MARKER) {
        Some(rest) => rest.is_empty() || rest.starts_with(['\n', '\r', ' ', '\t']),
        None => false,
    }
}

/// Decodes a response body.
///
/// # Errors
///
/// Returns an [`ApiError`] when the body lacks the document marker, fails to
/// decode, or decodes into a document carrying an error (see [`has_error`]).
pub fn parse_body(body: &str) -> Result<Value, ApiError> {
    if !has_document_marker(body) {
        return Err(ApiError::new(ErrorPayload::Text(body.to_string())));
    }

    let value: Value = match serde_yaml::from_str(body) {
        Ok(Value::Null) => Value::Mapping(Mapping::new()),
        Ok(value) => value,
        Err(e) => {
            tracing::debug!("Response is not valid YAML: {}", e);
            return Err(ApiError::new(ErrorPayload::Text(body.to_string())));
        }
    };

    if !has_error(&value) {
        return Ok(value);
    }

    let payload = if value.is_mapping() {
        ErrorPayload::Structured(value)
    } else {
        ErrorPayload::Other(value)
    };
    Err(ApiError::new(payload))
}

/// Reports whether a decoded document carries an error: a mapping with an
/// `error` key, a sequence with an `"error"` element, or a string mentioning
/// `error`.
pub fn has_error(value: &Value) -> bool {
    match value {
        Value::Mapping(map) => map.contains_key("error"),
        Value::Sequence(seq) => seq.iter().any(|v| v.as_str() == Some("error")),
        Value::String(s) => s.contains("error"),
        _ => false,
    }
}
