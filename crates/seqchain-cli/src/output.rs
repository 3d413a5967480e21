use crate::cli::OutputFormat;
use crate::error::Result;
use itertools::Itertools;
use seqchain::core::models::any::AnySequence;
use seqchain::workflows::chain::{ChainOutcome, MotifReport};
use serde::Serialize;
use std::io::Write;

#[derive(Serialize)]
struct StageRow<'a> {
    identifier: &'a str,
    stage: usize,
    kind: String,
    symbols: &'a str,
    motif_hits: String,
}

#[derive(Serialize)]
struct MotifRow<'a> {
    identifier: &'a str,
    motif: &'a str,
    position: usize,
}

fn format_positions(positions: &[usize]) -> String {
    if positions.is_empty() {
        "no matches".to_string()
    } else {
        positions.iter().join(", ")
    }
}

// `AT=0,4;GG=`
fn format_hits_cell(reports: &[MotifReport]) -> String {
    reports
        .iter()
        .map(|report| format!("{}={}", report.motif, report.positions.iter().join(",")))
        .join(";")
}

fn write_motif_lines(
    out: &mut impl Write,
    reports: &[MotifReport],
    indent: &str,
) -> std::io::Result<()> {
    for report in reports {
        writeln!(
            out,
            "{}{}: {}",
            indent,
            report.motif,
            format_positions(&report.positions)
        )?;
    }
    Ok(())
}

/// Writes motif scan results for one sequence.
pub fn write_motif_reports(
    out: &mut impl Write,
    sequence: &AnySequence,
    reports: &[MotifReport],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out, "{}", sequence.render())?;
            write_motif_lines(out, reports, "  ")?;
        }
        OutputFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(out);
            writer.write_record(["identifier", "motif", "position"])?;
            for report in reports {
                for &position in &report.positions {
                    writer.serialize(MotifRow {
                        identifier: sequence.identifier(),
                        motif: &report.motif,
                        position,
                    })?;
                }
            }
            writer.flush()?;
        }
    }
    Ok(())
}

/// Writes every stage of every outcome. Motif hits are attached to the final stage.
pub fn write_outcomes(
    out: &mut impl Write,
    outcomes: &[ChainOutcome],
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Text => {
            for outcome in outcomes {
                for stage in outcome.stages() {
                    writeln!(out, "{}", stage.render())?;
                }
                write_motif_lines(out, &outcome.motif_hits, "  ")?;
            }
        }
        OutputFormat::Csv => {
            let mut writer = csv::WriterBuilder::new()
                .has_headers(false)
                .from_writer(out);
            writer.write_record(["identifier", "stage", "kind", "symbols", "motif_hits"])?;
            for outcome in outcomes {
                let last = outcome.intermediates.len();
                for (stage, sequence) in outcome.stages().enumerate() {
                    let motif_hits = if stage == last {
                        format_hits_cell(&outcome.motif_hits)
                    } else {
                        String::new()
                    };
                    writer.serialize(StageRow {
                        identifier: sequence.identifier(),
                        stage,
                        kind: sequence.kind().to_string(),
                        symbols: sequence.symbols(),
                        motif_hits,
                    })?;
                }
            }
            writer.flush()?;
        }
    }
    Ok(())
}
