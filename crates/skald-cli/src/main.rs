//! CLI frontend for the Skald story engine.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "skald",
    about = "Skald — a narrated RPG cast simulator",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Process a command script and narrate the story
    Run {
        /// Script file to process (default: standard input)
        script: Option<PathBuf>,

        /// Path of the event log written during the run
        #[arg(short, long, default_value = "story_log.txt")]
        log: PathBuf,
    },

    /// Lint a command script without executing it
    Check {
        /// Script file to lint
        script: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run { script, log } => commands::run::run(script.as_deref(), &log),
        Commands::Check { script } => commands::check::run(&script),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
