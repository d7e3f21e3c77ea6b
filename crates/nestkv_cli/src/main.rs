//! NestKV CLI
//!
//! Interactive shell for an in-memory NestKV store.

use clap::Parser;
use nestkv_cli::Session;
use nestkv_core::{Config, Store};
use std::fs::File;
use std::io::{self, BufReader, IsTerminal};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// In-memory key-value store with nested transactions.
#[derive(Parser)]
#[command(name = "nestkv")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Read commands from this file instead of standard input
    #[arg(short, long)]
    script: Option<PathBuf>,

    /// Enable verbose logging on standard error
    #[arg(short, long)]
    verbose: bool,

    /// Suppress the banner, prompt and farewell
    #[arg(short, long)]
    quiet: bool,

    /// Maximum number of nested transactions
    #[arg(long)]
    max_depth: Option<usize>,

    /// Print operation statistics as JSON on standard error when done
    #[arg(long)]
    stats_json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let mut config = Config::new();
    if let Some(depth) = cli.max_depth {
        config = config.max_depth(depth);
    }
    let store = Store::with_config(config);

    let interactive = cli.script.is_none() && io::stdin().is_terminal();
    let quiet = cli.quiet || !interactive;
    let mut session = Session::new(store, io::stdout().lock()).quiet(quiet);
    if !quiet {
        session = session.with_prompt("> ");
    }

    match &cli.script {
        Some(path) => {
            let file = File::open(path)
                .map_err(|e| format!("cannot open script {}: {e}", path.display()))?;
            session.run(BufReader::new(file))?;
        }
        None => session.run(io::stdin().lock())?,
    }

    if cli.stats_json {
        let stats = session.store().stats().snapshot();
        eprintln!("{}", serde_json::to_string_pretty(&stats)?);
    }

    Ok(())
}
