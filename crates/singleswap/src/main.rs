// SPDX-FileCopyrightText: 2026 Singleswap Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Singleswap - pick the hot-swap context for a JVM source file.
//!
//! This is the binary entry point. It loads configuration, builds the plugin
//! table, loads the process-wide variant registry and runs one command.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use singleswap_config::SingleswapConfig;
use singleswap_registry::{init_global, TracingSink};

/// Singleswap - pick the hot-swap context for a JVM source file.
#[derive(Parser, Debug)]
#[command(name = "singleswap", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Treat a host plugin as enabled (repeatable).
    #[arg(long = "enable", value_name = "ID", global = true)]
    enable: Vec<String>,

    /// Treat a host plugin as disabled (repeatable).
    #[arg(long = "disable", value_name = "ID", global = true)]
    disable: Vec<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Commands {
    /// List every variant and whether its context was loaded.
    Variants,
    /// Show the context that would hot-swap FILE.
    Resolve {
        /// Source file to resolve.
        file: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(errors) => {
            singleswap_config::render_errors(errors);
            std::process::exit(1);
        }
    };

    init_tracing(&config.log.level);
    tracing::debug!(plugins = config.plugins.len(), "config loaded");

    let table = commands::plugin_table(&config, &cli.enable, &cli.disable);
    let registry = init_global(&table, &TracingSink);

    let output = match &cli.command {
        Commands::Variants => Ok(commands::variants(registry)),
        Commands::Resolve { file } => commands::resolve(registry, file),
    };

    match output {
        Ok(text) => println!("{text}"),
        Err(err) => {
            eprintln!("singleswap: {err}");
            std::process::exit(1);
        }
    }
}

fn load_config(cli: &Cli) -> Result<SingleswapConfig, Vec<singleswap_config::ConfigError>> {
    match &cli.config {
        Some(path) => singleswap_config::load_and_validate_path(path),
        None => singleswap_config::load_and_validate(),
    }
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to
/// singleswap crates and everything else logs at `warn`.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("singleswap={log_level},warn")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
