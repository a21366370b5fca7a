//
//  mediawiki-client
//  output/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Output Module
//!
//! Rendering of API results for the terminal:
//!
//! - **YAML** (default): the decoded response, as the wiki sent it
//! - **JSON** (`--json`): the same structure, for piping to `jq`
//!
//! Key/value tables for summaries live in [`table`].

mod table;

pub use table::*;

use serde::Serialize;

/// Available output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl OutputFormat {
    /// JSON when `json` is set, YAML otherwise.
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            OutputFormat::Json
        } else {
            OutputFormat::Yaml
        }
    }
}

/// Renders `value` in the given format, without a trailing newline.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<String> {
    let rendered = match format {
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
    };
    Ok(rendered.trim_end().to_string())
}

/// Prints `value` to stdout in the given format.
pub fn write_value<T: Serialize>(value: &T, format: OutputFormat) -> anyhow::Result<()> {
    println!("{}", render(value, format)?);
    Ok(())
}
