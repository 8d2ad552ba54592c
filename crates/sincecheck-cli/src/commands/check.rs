//! Check command

use crate::commands::source::SourceArgs;
use clap::{Args, ValueEnum};
use sincecheck_core::render_human_summary;
use sincecheck_engine::{apply_engine_command, EngineCommand, EngineCommandResult};
use sincecheck_store::FsSnapshotLoader;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// One diagnostic line per mismatch
    #[default]
    Text,
    /// The full report as JSON
    Json,
    /// Human-readable summary
    Markdown,
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Returns whether the check passed
pub fn execute(args: CheckArgs) -> Result<bool, Box<dyn std::error::Error>> {
    let config = args.source.into_configuration()?;
    let loader = FsSnapshotLoader::new();

    let report = match apply_engine_command(EngineCommand::Check { config }, &loader)? {
        EngineCommandResult::Check(report) => report,
        EngineCommandResult::History(_) => return Err("unexpected engine result".into()),
    };

    match args.format {
        OutputFormat::Text => {
            for line in report.lines() {
                println!("{}", line);
            }
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Markdown => print!("{}", render_human_summary(&report)),
    }

    Ok(report.passed())
}
