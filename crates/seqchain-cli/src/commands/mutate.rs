use crate::cli::MutateArgs;
use crate::error::Result;
use seqchain::core::models::record::SequenceRecord;
use std::io::Write;
use tracing::info;

pub fn run(args: MutateArgs, out: &mut impl Write) -> Result<()> {
    let mut sequence = SequenceRecord::from(args.sequence).to_sequence()?;
    sequence.mutate(args.position, args.symbol)?;
    info!(
        "Replaced position {} of '{}' with '{}'.",
        args.position,
        sequence.identifier(),
        args.symbol
    );
    writeln!(out, "{}", sequence.render())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::SequenceArgs;
    use crate::error::CliError;
    use seqchain::core::error::SequenceError;
    use seqchain::core::models::kind::SequenceKind;

    fn args(kind: SequenceKind, symbols: &str, position: usize, symbol: char) -> MutateArgs {
        MutateArgs {
            sequence: SequenceArgs {
                kind,
                identifier: "seq3".to_string(),
                symbols: symbols.to_string(),
            },
            position,
            symbol,
        }
    }

    #[test]
    fn prints_mutated_sequence() {
        let mut out = Vec::new();
        run(args(SequenceKind::Protein, "NM", 0, 'M'), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), ">seq3: MM\n");
    }

    #[test]
    fn out_of_range_position_is_an_error() {
        let mut out = Vec::new();
        let result = run(args(SequenceKind::Dna, "ATCG", 4, 'A'), &mut out);
        assert!(matches!(
            result,
            Err(CliError::Sequence(SequenceError::IndexOutOfRange {
                position: 4,
                length: 4
            }))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn foreign_symbol_is_an_error() {
        let mut out = Vec::new();
        let result = run(args(SequenceKind::Dna, "ATCG", 1, 'U'), &mut out);
        assert!(matches!(
            result,
            Err(CliError::Sequence(SequenceError::InvalidAlphabet { .. }))
        ));
    }
}
