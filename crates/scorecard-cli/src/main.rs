//! scorecard CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "scorecard", version, about = "Attempt review and progress tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the pass/fail summary of one attempt
    Summarize {
        /// Path to an attempt snapshot JSON file
        #[arg(long)]
        attempt: PathBuf,
    },

    /// Show the per-question review of one attempt
    Review {
        /// Path to an attempt snapshot JSON file
        #[arg(long)]
        attempt: PathBuf,

        /// Output format: text, json, markdown
        #[arg(long, default_value = "text")]
        format: String,

        /// Save the full review report JSON to this path
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Check attempt snapshot files for data problems
    Validate {
        /// Path to an attempt file or directory
        #[arg(long)]
        attempt: PathBuf,
    },

    /// Aggregate progress statistics over a directory of attempts
    Progress {
        /// Directory of attempt snapshot JSON files
        #[arg(long)]
        dir: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("scorecard=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Summarize { attempt } => commands::summarize::execute(attempt),
        Commands::Review {
            attempt,
            format,
            output,
        } => commands::review::execute(attempt, format, output),
        Commands::Validate { attempt } => commands::validate::execute(attempt),
        Commands::Progress { dir } => commands::progress::execute(dir),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
