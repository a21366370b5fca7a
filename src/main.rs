//
//  mediawiki-client
//  main.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use mediawiki_client::cli::{Cli, Commands};
use mediawiki_client::{exit_codes, Error};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    init_logging();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Execute command
    let result = run(cli).await;

    // Handle result and exit
    match result {
        Ok(()) => std::process::exit(exit_codes::SUCCESS),
        Err(e) => {
            eprintln!("Error: {e:#}");
            std::process::exit(exit_code(&e));
        }
    }
}

/// Initialize logging based on environment
fn init_logging() {
    let filter = EnvFilter::try_from_env("MW_DEBUG")
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// Maps library errors to exit codes
fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<Error>() {
        Some(Error::Api(_)) => exit_codes::API_ERROR,
        Some(Error::UnsupportedAction { .. }) => exit_codes::UNSUPPORTED_ACTION,
        Some(Error::Network(_)) => exit_codes::NETWORK_ERROR,
        Some(Error::UnknownOption(_)) | Some(Error::InvalidOption { .. }) => exit_codes::USAGE,
        _ => exit_codes::ERROR,
    }
}

/// Main command dispatcher
async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Call(cmd) => cmd.run(&cli.global).await,
        Commands::Page(cmd) => cmd.run(&cli.global).await,
        Commands::Siteinfo(cmd) => cmd.run(&cli.global).await,
        Commands::Config(cmd) => cmd.run(&cli.global).await,
        Commands::Completion(cmd) => cmd.run(&cli.global).await,
        Commands::Version => {
            println!("mw version {}", mediawiki_client::VERSION);
            Ok(())
        }
    }
}
