//
//  mediawiki-client
//  cli/config.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! CLI configuration commands
//!
//! This module provides commands for managing the CLI configuration:
//! core values (`default_wiki`, `user_agent`, `verbose`) and named wikis.

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use console::style;

use crate::config::{is_endpoint_url, Config, WikiConfig, CORE_KEYS};

use super::GlobalOptions;

/// Manage CLI configuration
#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(subcommand)]
    pub command: ConfigSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Get a configuration value
    Get(GetArgs),

    /// Set a configuration value
    Set(SetArgs),

    /// Unset a configuration value
    Unset(UnsetArgs),

    /// List all configuration values
    #[command(visible_alias = "ls")]
    List,

    /// Register a named wiki
    #[command(name = "add-wiki")]
    AddWiki(AddWikiArgs),

    /// Remove a named wiki
    #[command(name = "remove-wiki", visible_alias = "rm-wiki")]
    RemoveWiki(RemoveWikiArgs),

    /// Show configuration file path
    Path,
}

#[derive(Args, Debug)]
pub struct GetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Configuration key
    pub key: String,

    /// Configuration value
    pub value: String,
}

#[derive(Args, Debug)]
pub struct UnsetArgs {
    /// Configuration key
    pub key: String,
}

#[derive(Args, Debug)]
pub struct AddWikiArgs {
    /// Name used with --wiki
    pub name: String,

    /// URL of the wiki's api.php
    pub endpoint: String,

    /// User-Agent for this wiki
    #[arg(long = "agent")]
    pub agent: Option<String>,
}

#[derive(Args, Debug)]
pub struct RemoveWikiArgs {
    /// Wiki name
    pub name: String,
}

impl ConfigCommand {
    pub async fn run(&self, global: &GlobalOptions) -> Result<()> {
        match &self.command {
            ConfigSubcommand::Get(args) => self.get(args, global),
            ConfigSubcommand::Set(args) => self.set(args, global),
            ConfigSubcommand::Unset(args) => self.unset(args, global),
            ConfigSubcommand::List => self.list(global),
            ConfigSubcommand::AddWiki(args) => self.add_wiki(args, global),
            ConfigSubcommand::RemoveWiki(args) => self.remove_wiki(args, global),
            ConfigSubcommand::Path => self.path(global),
        }
    }

    /// Get a configuration value
    fn get(&self, args: &GetArgs, global: &GlobalOptions) -> Result<()> {
        if !CORE_KEYS.contains(&args.key.as_str()) {
            bail!(
                "Unknown configuration key '{}'. Valid keys: {}",
                args.key,
                CORE_KEYS.join(", ")
            );
        }

        let config = Config::load()?;
        let value = config.get(&args.key);

        if global.json {
            let result = serde_json::json!({
                "key": args.key,
                "value": value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else if let Some(v) = value {
            println!("{}", v);
        }

        Ok(())
    }

    /// Set a configuration value
    fn set(&self, args: &SetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        config.set(&args.key, args.value.clone())?;
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
                "value": args.value,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Set {} = {}",
                style("✓").green(),
                style(&args.key).cyan(),
                args.value
            );
        }

        Ok(())
    }

    /// Unset a configuration value
    fn unset(&self, args: &UnsetArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        config.unset(&args.key)?;
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "key": args.key,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Unset {}", style("✓").green(), style(&args.key).cyan());
        }

        Ok(())
    }

    /// List all configuration values
    fn list(&self, global: &GlobalOptions) -> Result<()> {
        let config = Config::load()?;

        if global.json {
            println!("{}", serde_json::to_string_pretty(&config)?);
            return Ok(());
        }

        println!();
        println!("{}", style("Core Configuration").bold());
        println!("{}", "-".repeat(50));
        for key in CORE_KEYS {
            match config.get(key) {
                Some(value) => println!("  {}: {}", style(key).cyan(), value),
                None => println!("  {}: {}", style(key).cyan(), style("(not set)").dim()),
            }
        }

        if !config.wikis.is_empty() {
            println!();
            println!("{}", style("Wikis").bold());
            println!("{}", "-".repeat(50));
            for (name, wiki) in &config.wikis {
                println!();
                println!("  {}", style(name).cyan().bold());
                println!("    endpoint: {}", wiki.endpoint);
                if let Some(agent) = &wiki.user_agent {
                    println!("    user_agent: {}", agent);
                }
                if let Some(verbose) = wiki.verbose {
                    println!("    verbose: {}", verbose);
                }
            }
        }

        println!();
        Ok(())
    }

    /// Register a named wiki
    fn add_wiki(&self, args: &AddWikiArgs, global: &GlobalOptions) -> Result<()> {
        if !is_endpoint_url(&args.endpoint) {
            bail!("Endpoint must be an http(s) URL, got '{}'", args.endpoint);
        }
        url::Url::parse(&args.endpoint)?;

        let mut config = Config::load()?;
        let wiki = WikiConfig {
            user_agent: args.agent.clone(),
            ..WikiConfig::new(args.endpoint.clone())
        };
        config.wikis.insert(args.name.clone(), wiki);
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "name": args.name,
                "endpoint": args.endpoint,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!(
                "{} Added wiki {} -> {}",
                style("✓").green(),
                style(&args.name).cyan(),
                args.endpoint
            );
        }

        Ok(())
    }

    /// Remove a named wiki
    fn remove_wiki(&self, args: &RemoveWikiArgs, global: &GlobalOptions) -> Result<()> {
        let mut config = Config::load()?;
        if config.wikis.remove(&args.name).is_none() {
            bail!("No wiki named '{}' is configured", args.name);
        }
        config.save()?;

        if global.json {
            let result = serde_json::json!({
                "success": true,
                "name": args.name,
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{} Removed wiki {}", style("✓").green(), style(&args.name).cyan());
        }

        Ok(())
    }

    /// Show configuration file path
    fn path(&self, global: &GlobalOptions) -> Result<()> {
        let path = Config::config_path()?;

        if global.json {
            let result = serde_json::json!({
                "path": path.display().to_string(),
                "exists": path.exists(),
            });
            println!("{}", serde_json::to_string_pretty(&result)?);
        } else {
            println!("{}", path.display());
        }

        Ok(())
    }
}
