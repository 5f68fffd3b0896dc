//! Slotwise CLI - inspect canvas layouts from the terminal
//!
//! Usage: slotwise <COMMAND>
//!
//! Commands:
//!   resolve    Resolve the layout for a canvas state
//!   catalog    List every module in the catalog
//!   templates  List the built-in templates
//!   check      Audit the catalog

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod cli;
mod commands;
mod ui;

use cli::{Cli, Commands};

/// `RUST_LOG` wins; otherwise `-v` raises the level from `warn`.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
        .with(env_filter)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Resolve {
            state,
            config,
            template,
            enable,
            disable,
            explain,
        } => {
            let overrides = commands::resolve::ResolveOverrides {
                template,
                enable,
                disable,
            };
            commands::resolve::cmd_resolve(state, config.as_deref(), &overrides, explain, cli.json)
        }
        Commands::Catalog => commands::catalog::cmd_catalog(cli.json),
        Commands::Templates => commands::templates::cmd_templates(cli.json),
        Commands::Check => commands::check::cmd_check(cli.json),
    }
}
