use crate::cli::BatchArgs;
use crate::config::PartialJobConfig;
use crate::error::{CliError, Result};
use crate::output;
use crate::utils::progress::CliProgressHandler;
use seqchain::engine::progress::ProgressReporter;
use seqchain::workflows;
use std::fs::File;
use std::io::{BufWriter, Write};
use tracing::info;

pub fn run(args: BatchArgs, out: &mut impl Write) -> Result<()> {
    let partial_config = PartialJobConfig::from_file(&args.config)?;
    info!("Merging configuration from file and CLI arguments...");
    let job = partial_config.merge_with_cli(&args)?;

    let progress_handler = CliProgressHandler::new();
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    info!(
        "Invoking the chain workflow on {} record(s)...",
        job.records.len()
    );
    let results = workflows::chain::run_batch(&job.records, &job.chain, &reporter);
    info!(
        "Workflow finished, {} record(s) processed.",
        progress_handler.completed()
    );

    let total = results.len();
    let mut outcomes = Vec::with_capacity(total);
    for result in results {
        match result {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => eprintln!("✗ {}", e),
        }
    }

    match &args.output {
        Some(path) => {
            info!("Writing {} result(s) to {:?}", outcomes.len(), path);
            let mut writer = BufWriter::new(File::create(path)?);
            output::write_outcomes(&mut writer, &outcomes, args.format)?;
            writer.flush()?;
        }
        None => output::write_outcomes(out, &outcomes, args.format)?,
    }

    let failed = total - outcomes.len();
    if failed > 0 {
        return Err(CliError::BatchFailed { failed, total });
    }
    Ok(())
}
