//! Terminal frontend for Spearfishing Adventure.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "spearfish",
    about = "Spearfishing Adventure: a branching story in the Hawaiian surf",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the story interactively
    Play {
        /// RNG seed for a reproducible playthrough
        #[arg(short, long)]
        seed: Option<u64>,

        /// Milliseconds to pause between sentences
        #[arg(short, long, default_value = "0")]
        pace: u64,
    },

    /// List every scene with its mood and choices
    Scenes,

    /// Validate the scene graph
    Check,

    /// Play many random walks and count the endings reached
    Simulate {
        /// Number of adventures to play
        #[arg(short, long, default_value = "1000")]
        runs: u32,

        /// RNG seed for deterministic simulation
        #[arg(short, long, default_value = "42")]
        seed: u64,
    },

    /// Export the scene graph
    Export {
        /// Output format: json, markdown, dot
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed, pace } => commands::play::run(seed, pace),
        Commands::Scenes => commands::scenes::run(),
        Commands::Check => commands::check::run(),
        Commands::Simulate { runs, seed } => commands::simulate::run(runs, seed),
        Commands::Export { format, output } => commands::export::run(&format, output.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
