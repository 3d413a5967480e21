use crate::core::models::any::AnySequence;
use crate::core::models::record::SequenceRecord;
use crate::engine::config::ChainConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use std::iter;
use tracing::{debug, info, instrument, warn};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotifReport {
    pub motif: String,
    pub positions: Vec<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainOutcome {
    pub intermediates: Vec<AnySequence>, // Input and every stage before `result`; empty unless kept
    pub result: AnySequence,
    pub motif_hits: Vec<MotifReport>,
}

impl ChainOutcome {
    pub fn identifier(&self) -> &str {
        self.result.identifier()
    }

    /// Intermediates followed by the final sequence.
    pub fn stages(&self) -> impl Iterator<Item = &AnySequence> {
        self.intermediates.iter().chain(iter::once(&self.result))
    }
}

#[instrument(skip_all, name = "chain_workflow", fields(identifier = %record.identifier))]
pub fn run(record: &SequenceRecord, config: &ChainConfig) -> Result<ChainOutcome, EngineError> {
    let final_kind = config
        .validate_for(record.kind)
        .map_err(|source| EngineError::Config {
            identifier: record.identifier.clone(),
            source,
        })?;
    debug!(start = %record.kind, end = %final_kind, steps = config.steps.len(), "Chain plan validated.");

    let mut current = record.to_sequence().map_err(|source| EngineError::Sequence {
        identifier: record.identifier.clone(),
        source,
    })?;

    let mut intermediates = Vec::new();
    for &step in &config.steps {
        let next = current.apply(step).map_err(|source| EngineError::Step {
            identifier: record.identifier.clone(),
            step,
            source,
        })?;
        debug!(%step, from = %current.kind(), to = %next.kind(), "Applied step.");
        if config.keep_intermediates {
            intermediates.push(current);
        }
        current = next;
    }

    let motif_hits = config
        .motifs
        .iter()
        .map(|motif| {
            let positions = current
                .find_motif(motif)
                .map_err(|source| EngineError::Motif {
                    identifier: record.identifier.clone(),
                    motif: motif.clone(),
                    source,
                })?;
            Ok(MotifReport {
                motif: motif.clone(),
                positions,
            })
        })
        .collect::<Result<Vec<_>, EngineError>>()?;

    Ok(ChainOutcome {
        intermediates,
        result: current,
        motif_hits,
    })
}

/// Runs the chain over every record. Results come back in input order, one per record; a
/// failing record does not stop the others.
#[instrument(skip_all, name = "chain_batch_workflow", fields(records = records.len()))]
pub fn run_batch(
    records: &[SequenceRecord],
    config: &ChainConfig,
    reporter: &ProgressReporter,
) -> Vec<Result<ChainOutcome, EngineError>> {
    reporter.report(Progress::PhaseStart { name: "Chain" });
    info!(
        records = records.len(),
        steps = config.steps.len(),
        motifs = config.motifs.len(),
        "Starting chain over batch."
    );

    if records.is_empty() {
        reporter.report(Progress::PhaseFinish);
        return Vec::new();
    }

    reporter.report(Progress::TaskStart {
        total_steps: records.len() as u64,
    });

    #[cfg(not(feature = "parallel"))]
    let iterator = records.iter();

    #[cfg(feature = "parallel")]
    let iterator = records.par_iter();

    let outcomes: Vec<_> = iterator
        .map(|record| {
            let outcome = run(record, config);
            if let Err(e) = &outcome {
                reporter.report(Progress::Message(e.to_string()));
            }
            reporter.report(Progress::TaskIncrement);
            outcome
        })
        .collect();

    reporter.report(Progress::TaskFinish);

    let failed = outcomes.iter().filter(|o| o.is_err()).count();
    if failed > 0 {
        warn!(failed, total = outcomes.len(), "Some records failed the chain.");
    }
    info!(
        succeeded = outcomes.len() - failed,
        failed, "Chain batch complete."
    );

    reporter.report(Progress::PhaseFinish);
    outcomes
}
