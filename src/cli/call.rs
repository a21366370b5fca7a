//
//  mediawiki-client
//  cli/call.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Generic action command
//!
//! Invokes any `api.php` action with `key=value` parameters, similar to
//! `gh api` for GitHub. Useful for modules without a dedicated command.
//!
//! ## Examples
//!
//! ```bash
//! # Ten random articles
//! mw call query list=random rnnamespace=0 rnlimit=10
//!
//! # Several values for one parameter
//! mw call query prop=info titles=Foo titles=Bar
//!
//! # Force POST
//! mw --wiki local call purge titles="Main Page" --post
//! ```

use anyhow::{bail, Result};
use clap::Args;

use crate::api::{ParamValue, Params};
use crate::output::write_value;

use super::GlobalOptions;

/// Invoke any API action
#[derive(Args, Debug)]
pub struct CallCommand {
    /// Action name (e.g., query, parse, edit)
    pub action: String,

    /// Parameters as key=value; repeat a key to send several values
    pub params: Vec<String>,

    /// Send the request as POST
    #[arg(long)]
    pub post: bool,
}

impl CallCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        let client = global.client()?;

        let mut params = parse_params(&self.params)?;
        if self.post {
            params = params.post();
        }

        let result = client.call(&self.action, params).await?;
        write_value(&result, global.output_format())
    }
}

/// Parses `key=value` arguments; repeated keys become a list.
fn parse_params(args: &[String]) -> Result<Params> {
    let mut params = Params::new();

    for arg in args {
        let Some((key, value)) = arg.split_once('=') else {
            bail!("Invalid parameter format: {}. Expected key=value", arg);
        };
        if key.is_empty() {
            bail!("Invalid parameter format: {}. Key must not be empty", arg);
        }

        let value = match params.remove(key) {
            Some(ParamValue::List(mut items)) => {
                items.push(value.to_string());
                ParamValue::List(items)
            }
            Some(existing) => ParamValue::List(vec![
                existing.to_query_value().unwrap_or_default(),
                value.to_string(),
            ]),
            None => ParamValue::Text(value.to_string()),
        };
        params.insert(key, value);
    }

    Ok(params)
}
