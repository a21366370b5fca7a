//
//  mediawiki-client
//  cli/page.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Page source command

use anyhow::Result;
use clap::Args;
use console::style;

use super::GlobalOptions;

/// Print the wikitext of a page
#[derive(Args, Debug)]
pub struct PageCommand {
    /// Page title
    pub title: String,
}

impl PageCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let content = client.page_content(&self.title).await?;

        if global.json {
            let result = serde_json::json!({
                "title": self.title,
                "missing": content.is_empty(),
                "content": content,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if content.is_empty() {
            eprintln!(
                "{} Page '{}' does not exist or is empty",
                style("!").yellow(),
                self.title
            );
        } else {
            println!("{}", content);
        }

        Ok(())
    }
}
