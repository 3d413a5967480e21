use crate::cli::SequenceArgs;
use crate::error::Result;
use seqchain::core::models::record::SequenceRecord;
use std::io::Write;
use tracing::debug;

pub fn run(args: SequenceArgs, out: &mut impl Write) -> Result<()> {
    let sequence = SequenceRecord::from(args).to_sequence()?;
    debug!(kind = %sequence.kind(), length = sequence.len(), "Sequence validated.");
    writeln!(out, "{}", sequence.render())?;
    Ok(())
}
