//
//  mediawiki-client
//  cli/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI command definitions using clap derive macros

mod call;
mod completion;
mod config;
mod page;
mod siteinfo;

pub use call::CallCommand;
pub use completion::CompletionCommand;
pub use config::ConfigCommand;
pub use page::PageCommand;
pub use siteinfo::SiteinfoCommand;

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::api::MediaWikiClient;
use crate::config::Config;
use crate::output::OutputFormat;

/// mw - Talk to any MediaWiki from the command line
#[derive(Parser, Debug)]
#[command(
    name = "mw",
    version,
    about = "Talk to any MediaWiki from the command line",
    long_about = "mw is a generic client for the MediaWiki web API.\n\n\
                  Any API action can be invoked with 'mw call'; errors reported by the wiki\n\
                  are shown with their code and message.",
    propagate_version = true,
    after_help = "Use 'mw <command> --help' for more information about a command."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[command(flatten)]
    pub global: GlobalOptions,
}

/// Global options available to all commands
#[derive(Parser, Debug, Clone, Default)]
pub struct GlobalOptions {
    /// URL of the wiki's api.php (overrides --wiki)
    #[arg(long, short = 'e', global = true, env = "MW_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Configured wiki name or Wikipedia language code
    #[arg(long, short = 'w', global = true, env = "MW_WIKI")]
    pub wiki: Option<String>,

    /// Custom User-Agent header
    #[arg(long, global = true, env = "MW_USER_AGENT")]
    pub user_agent: Option<String>,

    /// Print each request to stderr
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    /// Output format as JSON
    #[arg(long, global = true)]
    pub json: bool,
}

impl GlobalOptions {
    /// Builds a client from these options layered over the config file.
    pub fn client(&self) -> Result<MediaWikiClient> {
        let config = Config::load()?;
        self.client_with(&config)
    }

    /// Builds a client from these options layered over `config`.
    pub fn client_with(&self, config: &Config) -> Result<MediaWikiClient> {
        let wiki = self.wiki.as_deref();
        let endpoint = match &self.endpoint {
            Some(endpoint) => endpoint.clone(),
            None => config.resolve_endpoint(wiki),
        };

        let mut options = config.client_options(wiki);
        if self.verbose {
            options.verbose = true;
        }
        if let Some(user_agent) = &self.user_agent {
            options.user_agent = Some(user_agent.clone());
        }

        tracing::debug!("Using endpoint {}", endpoint);
        Ok(MediaWikiClient::with_options(&endpoint, options)?)
    }

    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_json_flag(self.json)
    }
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Invoke any API action
    #[command(visible_alias = "api")]
    Call(CallCommand),

    /// Print the wikitext of a page
    #[command(visible_alias = "get")]
    Page(PageCommand),

    /// Show general site information
    #[command(name = "siteinfo", visible_alias = "info")]
    Siteinfo(SiteinfoCommand),

    /// Manage CLI configuration
    Config(ConfigCommand),

    /// Generate shell completion scripts
    Completion(CompletionCommand),

    /// Print version information
    Version,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WikiConfig;

    #[test]
    fn test_endpoint_flag_wins() {
        let mut config = Config::default();
        config
            .wikis
            .insert("local".to_string(), WikiConfig::new("http://localhost/w/api.php"));

        let global = GlobalOptions {
            endpoint: Some("http://override.example/api.php".to_string()),
            wiki: Some("local".to_string()),
            ..Default::default()
        };
        let client = global.client_with(&config).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://override.example/api.php");
    }

    #[test]
    fn test_wiki_and_flags() {
        let mut config = Config::default();
        config
            .wikis
            .insert("local".to_string(), WikiConfig::new("http://localhost/w/api.php"));

        let global = GlobalOptions {
            wiki: Some("local".to_string()),
            verbose: true,
            ..Default::default()
        };
        let client = global.client_with(&config).unwrap();
        assert_eq!(client.endpoint().as_str(), "http://localhost/w/api.php");
        assert!(client.verbose());
    }

    #[test]
    fn test_cli_parses_call() {
        let cli = Cli::try_parse_from([
            "mw", "--wiki", "de", "call", "query", "meta=siteinfo", "--post",
        ])
        .unwrap();
        assert_eq!(cli.global.wiki.as_deref(), Some("de"));
        match cli.command {
            Commands::Call(cmd) => {
                assert_eq!(cmd.action, "query");
                assert_eq!(cmd.params, vec!["meta=siteinfo".to_string()]);
                assert!(cmd.post);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
