use super::models::kind::{SequenceKind, Step};
use itertools::Itertools;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    #[error("Invalid {kind} symbol(s): {}", format_symbols(.invalid))]
    InvalidAlphabet {
        kind: SequenceKind,
        invalid: Vec<char>, // Distinct offending symbols, sorted
    },

    #[error("Position {position} is out of range for a sequence of length {length}")]
    IndexOutOfRange { position: usize, length: usize },

    #[error("Motif must not be empty")]
    EmptyMotif,

    #[error(
        "Sequence of length {length} does not divide into codons ({remainder} trailing symbol(s))"
    )]
    IncompleteCodon { length: usize, remainder: usize },

    #[error("Sequence identifier must not be empty")]
    EmptyIdentifier,

    #[error("No {kind} pairing partner for symbol '{symbol}'")]
    UnmappedSymbol { kind: SequenceKind, symbol: char },

    #[error("Codon '{codon}' is missing from the codon table")]
    UnmappedCodon { codon: String },

    #[error("{kind} sequences do not support '{operation}'")]
    UnsupportedOperation {
        kind: SequenceKind,
        operation: Step,
    },
}

fn format_symbols(symbols: &[char]) -> String {
    symbols.iter().map(|c| format!("'{}'", c)).join(", ")
}
