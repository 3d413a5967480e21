use crate::cli::MotifArgs;
use crate::error::Result;
use crate::output;
use seqchain::core::models::record::SequenceRecord;
use seqchain::workflows::chain::MotifReport;
use std::io::Write;
use tracing::debug;

pub fn run(args: MotifArgs, out: &mut impl Write) -> Result<()> {
    let sequence = SequenceRecord::from(args.sequence).to_sequence()?;

    let reports = args
        .motifs
        .into_iter()
        .map(|motif| {
            let positions = sequence.find_motif(&motif)?;
            debug!(motif = %motif, hits = positions.len(), "Motif scanned.");
            Ok(MotifReport { motif, positions })
        })
        .collect::<Result<Vec<_>>>()?;

    output::write_motif_reports(out, &sequence, &reports, args.format)
}
