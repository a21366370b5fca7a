//
//  mediawiki-client
//  cli/siteinfo.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Site information command

use anyhow::Result;
use clap::Args;
use console::style;

use crate::output::key_value_table;

use super::GlobalOptions;

/// Show general site information
#[derive(Args, Debug)]
pub struct SiteinfoCommand {
    /// Include every field the wiki reports, not only the common ones
    #[arg(long, short = 'a')]
    pub all: bool,
}

impl SiteinfoCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;
        let info = client.site_info().await?;

        if global.json {
            println!("{}", serde_json::to_string_pretty(&*info)?);
            return Ok(());
        }

        println!();
        println!("{}", style(client.describe().await?).bold());

        let mut rows: Vec<(String, String)> = vec![
            ("sitename".to_string(), info.sitename.clone()),
            ("lang".to_string(), info.lang.clone()),
        ];
        let optional = [
            ("mainpage", &info.mainpage),
            ("base", &info.base),
            ("generator", &info.generator),
            ("server", &info.server),
        ];
        for (key, value) in optional {
            if let Some(value) = value {
                rows.push((key.to_string(), value.clone()));
            }
        }

        if self.all {
            for (key, value) in &info.extra {
                let rendered = match value {
                    serde_yaml::Value::String(s) => s.clone(),
                    other => serde_yaml::to_string(other)?.trim_end().to_string(),
                };
                rows.push((key.clone(), rendered));
            }
        }

        println!("{}", key_value_table(rows, console::colors_enabled()));
        Ok(())
    }
}
