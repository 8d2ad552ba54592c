//! sincecheck CLI
//!
//! Command-line interface for since-tag validation.
//!
//! Exit status: 0 when the check passes, 1 when diagnostics were emitted,
//! 2 on any fatal error.

use clap::{Parser, Subcommand, ValueEnum};
use sincecheck_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "sincecheck")]
#[command(about = "sincecheck - @since tag consistency validation", long_about = None)]
struct Cli {
    /// Enable structured logging on stderr
    #[arg(long, global = true, value_enum)]
    log_profile: Option<LogProfile>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogProfile {
    Dev,
    Prod,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate the since tags of the verify snapshot
    Check(commands::check::CheckArgs),
    /// Print the first analyzed version of every element
    History(commands::history::HistoryArgs),
}

fn main() {
    let cli = Cli::parse();

    match cli.log_profile {
        Some(LogProfile::Dev) => init(Profile::Development),
        Some(LogProfile::Prod) => init(Profile::Production),
        None => {}
    }

    let result = match cli.command {
        Commands::Check(args) => commands::check::execute(args),
        Commands::History(args) => commands::history::execute(args).map(|()| true),
    };

    match result {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(2);
        }
    }
}
