//! CLI frontend for the Onyzuka progression core.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "oz",
    about = "Onyzuka — traverse the Ring of Ages from your terminal",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive session (reads commands from stdin)
    Play {
        /// RNG seed for reproducible trials and scans
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Directory holding the save snapshot
        #[arg(long, default_value = ".")]
        save_dir: PathBuf,
    },

    /// Show the service record and ring status for an existing save
    Status {
        /// Directory holding the save snapshot
        #[arg(long, default_value = ".")]
        save_dir: PathBuf,
    },

    /// Browse a codex tab without starting a session
    Codex {
        /// Tab: archives, laws, factions, artefacts, creatures, allies,
        /// quests, or upgrades
        #[arg(default_value = "archives")]
        tab: String,

        /// Directory holding the save snapshot
        #[arg(long, default_value = ".")]
        save_dir: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play { seed, save_dir } => commands::play::run(&save_dir, seed),
        Commands::Status { save_dir } => commands::status::run(&save_dir),
        Commands::Codex { tab, save_dir } => commands::codex::run(&save_dir, &tab),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
