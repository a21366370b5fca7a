//
//  mediawiki-client
//  output/table.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Table Output Formatting
//!
//! Two-column tables for summaries such as `mw siteinfo`, rendered with
//! `comfy_table` using UTF-8 box-drawing characters.

use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

/// Creates a new styled table with default settings.
pub fn create_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Builds a `Field | Value` table from `rows`.
///
/// Header cells are cyan when `color` is set.
pub fn key_value_table<I, K, V>(rows: I, color: bool) -> Table
where
    I: IntoIterator<Item = (K, V)>,
    K: ToString,
    V: ToString,
{
    let mut table = create_table();

    if color {
        table.set_header(vec![
            Cell::new("Field").fg(Color::Cyan),
            Cell::new("Value").fg(Color::Cyan),
        ]);
    } else {
        table.set_header(vec!["Field", "Value"]);
    }

    for (key, value) in rows {
        table.add_row(vec![key.to_string(), value.to_string()]);
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_value_table() {
        let table = key_value_table([("sitename", "Wikipedia"), ("lang", "en")], false);
        let rendered = table.to_string();
        assert!(rendered.contains("Field"));
        assert!(rendered.contains("Wikipedia"));
        assert!(rendered.contains("lang"));
    }
}
