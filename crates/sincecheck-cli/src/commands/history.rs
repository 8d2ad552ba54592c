//! History command

use crate::commands::source::SourceArgs;
use clap::Args;
use sincecheck_engine::{apply_engine_command, history_lines, EngineCommand, EngineCommandResult};
use sincecheck_store::FsSnapshotLoader;

#[derive(Debug, Args)]
pub struct HistoryArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub fn execute(args: HistoryArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = args.source.into_configuration()?;
    let loader = FsSnapshotLoader::new();

    match apply_engine_command(EngineCommand::History { config }, &loader)? {
        EngineCommandResult::History(first) => {
            for line in history_lines(&first) {
                println!("{}", line);
            }
            Ok(())
        }
        EngineCommandResult::Check(_) => Err("unexpected engine result".into()),
    }
}
