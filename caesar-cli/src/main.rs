mod menu;
mod report;

use anyhow::Result;
use caesar_core::{DEFAULT_TOP_N, Listing, analyze, decrypt, encrypt};
use clap::{Parser, Subcommand};
use std::io::{self, Write};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser)]
#[command(name = "caesar")]
#[command(about = "Caesar cipher tool: encrypt | decrypt | analyze (brute-force + frequency analysis)", long_about = None)]
#[command(after_help = "Run without arguments to start the interactive menu.")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt plaintext with a known key
    Encrypt {
        /// Text to encrypt (quote it if it contains spaces)
        text: String,

        /// Key, an integer between 1 and 25
        #[arg(allow_negative_numbers = true)]
        key: i64,
    },

    /// Decrypt ciphertext with a known key
    Decrypt {
        /// Text to decrypt (quote it if it contains spaces)
        text: String,

        /// Key, an integer between 1 and 25
        #[arg(allow_negative_numbers = true)]
        key: i64,
    },

    /// Recover an unknown key by trying all 26 shifts
    Analyze {
        /// Ciphertext to analyze
        text: String,

        /// Show the top N candidates
        #[arg(long, default_value_t = DEFAULT_TOP_N)]
        top: usize,

        /// Show all 26 candidates
        #[arg(long)]
        all: bool,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    init_tracing();

    if let Err(e) = run() {
        eprintln!("Error: {:?}", e);
        std::process::exit(1);
    }
}

/// Logs go to stderr; level comes from RUST_LOG (warnings by default)
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        tracing::debug!("no subcommand given, starting interactive menu");
        let stdin = io::stdin();
        let stdout = io::stdout();
        return menu::run(&mut stdin.lock(), &mut stdout.lock());
    };

    match command {
        Commands::Encrypt { text, key } => {
            tracing::debug!(key, len = text.len(), "encrypt");
            cmd_print(&encrypt(&text, key)?)?;
        }
        Commands::Decrypt { text, key } => {
            tracing::debug!(key, len = text.len(), "decrypt");
            cmd_print(&decrypt(&text, key)?)?;
        }
        Commands::Analyze {
            text,
            top,
            all,
            json,
        } => {
            cmd_analyze(&text, Listing::from_flags(top, all), json)?;
        }
    }

    Ok(())
}

fn cmd_print(output: &str) -> Result<()> {
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", output)?;
    Ok(())
}

fn cmd_analyze(text: &str, listing: Listing, json: bool) -> Result<()> {
    let analysis = analyze(text);
    let best = analysis.best();
    tracing::debug!(
        best_key = best.key,
        best_score = best.score,
        ?listing,
        "analysis finished"
    );

    let mut stdout = io::stdout().lock();
    if json {
        report::write_json(&mut stdout, &analysis, listing)
    } else {
        report::write_text(&mut stdout, &analysis, listing)
    }
}
