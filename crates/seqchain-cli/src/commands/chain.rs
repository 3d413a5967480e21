use crate::cli::ChainArgs;
use crate::error::Result;
use crate::output;
use seqchain::core::models::record::SequenceRecord;
use seqchain::engine::config::ChainConfigBuilder;
use seqchain::workflows;
use std::io::Write;
use tracing::info;

pub fn run(args: ChainArgs, out: &mut impl Write) -> Result<()> {
    let config = ChainConfigBuilder::new()
        .steps(args.steps)
        .motifs(args.motifs)
        .keep_intermediates(args.keep_intermediates)
        .build()?;

    let record = SequenceRecord::from(args.sequence);
    info!(
        "Running {} step(s) on '{}'.",
        config.steps.len(),
        record.identifier
    );
    let outcome = workflows::chain::run(&record, &config)?;

    output::write_outcomes(out, &[outcome], args.format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{OutputFormat, SequenceArgs};
    use crate::error::CliError;
    use seqchain::core::models::kind::{SequenceKind, Step};
    use seqchain::engine::config::ConfigError;
    use seqchain::engine::error::EngineError;

    fn args(kind: SequenceKind, symbols: &str, steps: Vec<Step>, motifs: &[&str]) -> ChainArgs {
        ChainArgs {
            sequence: SequenceArgs {
                kind,
                identifier: "seq1".to_string(),
                symbols: symbols.to_string(),
            },
            steps,
            motifs: motifs.iter().map(|m| m.to_string()).collect(),
            keep_intermediates: false,
            format: OutputFormat::Text,
        }
    }

    fn run_to_string(args: ChainArgs) -> Result<String> {
        let mut out = Vec::new();
        run(args, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn transcribes_and_translates() {
        let text = run_to_string(args(
            SequenceKind::Dna,
            "ATGTTTTAA",
            vec![Step::Transcribe, Step::Translate],
            &["F"],
        ))
        .unwrap();
        assert_eq!(text, ">seq1: MF*\n  F: 1\n");
    }

    #[test]
    fn empty_plan_echoes_input() {
        let text = run_to_string(args(SequenceKind::Rna, "AUCGAUC", vec![], &[])).unwrap();
        assert_eq!(text, ">seq1: AUCGAUC\n");
    }

    #[test]
    fn keep_intermediates_prints_each_stage() {
        let mut chain_args = args(SequenceKind::Dna, "ATCG", vec![Step::Complement], &[]);
        chain_args.keep_intermediates = true;
        let text = run_to_string(chain_args).unwrap();
        assert_eq!(text, ">seq1: ATCG\n>seq1: TAGC\n");
    }

    #[test]
    fn undefined_transition_is_rejected_before_running() {
        let result = run_to_string(args(
            SequenceKind::Dna,
            "ATG",
            vec![Step::Translate],
            &[],
        ));
        assert!(matches!(
            result,
            Err(CliError::Engine(EngineError::Config {
                source: ConfigError::UndefinedTransition {
                    kind: SequenceKind::Dna,
                    step: Step::Translate
                },
                ..
            }))
        ));
    }

    #[test]
    fn empty_motif_is_a_config_error() {
        let result = run_to_string(args(SequenceKind::Dna, "ATG", vec![], &[""]));
        assert!(matches!(
            result,
            Err(CliError::ChainConfig(ConfigError::EmptyMotif { index: 0 }))
        ));
    }
}
