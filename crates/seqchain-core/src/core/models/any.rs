use super::kind::{Dna, Protein, Rna, SequenceKind, Step};
use super::sequence::Sequence;
use crate::core::error::SequenceError;
use std::fmt;

/// A sequence whose kind is only known at run time.
///
/// Transformations go through [`AnySequence::apply`], which consults the kind's capability
/// table. Code that knows the kind statically should use [`Sequence`] directly.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum AnySequence {
    Dna(Sequence<Dna>),
    Rna(Sequence<Rna>),
    Protein(Sequence<Protein>),
}

macro_rules! dispatch {
    ($value:expr, $seq:ident => $body:expr) => {
        match $value {
            AnySequence::Dna($seq) => $body,
            AnySequence::Rna($seq) => $body,
            AnySequence::Protein($seq) => $body,
        }
    };
}

impl AnySequence {
    pub fn new(
        kind: SequenceKind,
        identifier: impl Into<String>,
        symbols: impl Into<String>,
    ) -> Result<Self, SequenceError> {
        Ok(match kind {
            SequenceKind::Dna => AnySequence::Dna(Sequence::new(identifier, symbols)?),
            SequenceKind::Rna => AnySequence::Rna(Sequence::new(identifier, symbols)?),
            SequenceKind::Protein => AnySequence::Protein(Sequence::new(identifier, symbols)?),
        })
    }

    pub fn kind(&self) -> SequenceKind {
        dispatch!(self, seq => seq.kind())
    }

    pub fn identifier(&self) -> &str {
        dispatch!(self, seq => seq.identifier())
    }

    pub fn symbols(&self) -> &str {
        dispatch!(self, seq => seq.symbols())
    }

    pub fn len(&self) -> usize {
        dispatch!(self, seq => seq.len())
    }

    pub fn is_empty(&self) -> bool {
        dispatch!(self, seq => seq.is_empty())
    }

    pub fn render(&self) -> String {
        dispatch!(self, seq => seq.render())
    }

    pub fn mutate(&mut self, position: usize, symbol: char) -> Result<(), SequenceError> {
        dispatch!(self, seq => seq.mutate(position, symbol))
    }

    pub fn find_motif(&self, motif: &str) -> Result<Vec<usize>, SequenceError> {
        dispatch!(self, seq => seq.find_motif(motif))
    }

    /// Applies one transformation, or fails with [`SequenceError::UnsupportedOperation`] if
    /// the kind does not define it.
    pub fn apply(&self, step: Step) -> Result<AnySequence, SequenceError> {
        match (self, step) {
            (AnySequence::Dna(seq), Step::Complement) => seq.complement().map(AnySequence::Dna),
            (AnySequence::Dna(seq), Step::Transcribe) => seq.transcribe().map(AnySequence::Rna),
            (AnySequence::Rna(seq), Step::Complement) => seq.complement().map(AnySequence::Rna),
            (AnySequence::Rna(seq), Step::Translate) => seq.translate().map(AnySequence::Protein),
            (other, step) => Err(SequenceError::UnsupportedOperation {
                kind: other.kind(),
                operation: step,
            }),
        }
    }
}

impl From<Sequence<Dna>> for AnySequence {
    fn from(seq: Sequence<Dna>) -> Self {
        AnySequence::Dna(seq)
    }
}

impl From<Sequence<Rna>> for AnySequence {
    fn from(seq: Sequence<Rna>) -> Self {
        AnySequence::Rna(seq)
    }
}

impl From<Sequence<Protein>> for AnySequence {
    fn from(seq: Sequence<Protein>) -> Self {
        AnySequence::Protein(seq)
    }
}

impl fmt::Display for AnySequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, seq => fmt::Display::fmt(seq, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STEPS: [Step; 3] = [Step::Complement, Step::Transcribe, Step::Translate];

    fn sample(kind: SequenceKind) -> AnySequence {
        let symbols = match kind {
            SequenceKind::Dna => "ATGCAT",
            SequenceKind::Rna => "AUGCAU",
            SequenceKind::Protein => "MH",
        };
        AnySequence::new(kind, "any", symbols).unwrap()
    }

    #[test]
    fn new_selects_variant_from_kind() {
        assert!(matches!(sample(SequenceKind::Dna), AnySequence::Dna(_)));
        assert!(matches!(sample(SequenceKind::Rna), AnySequence::Rna(_)));
        assert!(matches!(sample(SequenceKind::Protein), AnySequence::Protein(_)));
    }

    #[test]
    fn new_validates_against_kind_alphabet() {
        let err = AnySequence::new(SequenceKind::Rna, "x", "ATG").unwrap_err();
        assert_eq!(
            err,
            SequenceError::InvalidAlphabet {
                kind: SequenceKind::Rna,
                invalid: vec!['T'],
            }
        );
    }

    #[test]
    fn accessors_forward_to_inner_sequence() {
        let mut seq = sample(SequenceKind::Dna);
        assert_eq!(seq.kind(), SequenceKind::Dna);
        assert_eq!(seq.identifier(), "any");
        assert_eq!(seq.len(), 6);
        assert_eq!(seq.render(), ">any: ATGCAT");
        assert_eq!(seq.to_string(), ">any: ATGCAT");
        assert_eq!(seq.find_motif("AT").unwrap(), vec![0, 4]);
        seq.mutate(5, 'A').unwrap();
        assert_eq!(seq.symbols(), "ATGCAA");
    }

    #[test]
    fn apply_agrees_with_capability_table() {
        for kind in SequenceKind::ALL {
            for step in ALL_STEPS {
                let result = sample(kind).apply(step);
                match kind.successor(step) {
                    Some(target) => assert_eq!(result.unwrap().kind(), target),
                    None => assert_eq!(
                        result.unwrap_err(),
                        SequenceError::UnsupportedOperation {
                            kind,
                            operation: step
                        }
                    ),
                }
            }
        }
    }

    #[test]
    fn apply_runs_full_chain() {
        let dna = AnySequence::new(SequenceKind::Dna, "gene", "ATGGCCTAA").unwrap();
        let rna = dna.apply(Step::Transcribe).unwrap();
        assert_eq!(rna.render(), ">gene: AUGGCCUAA");
        let protein = rna.apply(Step::Translate).unwrap();
        assert_eq!(protein.render(), ">gene: MA*");
        assert_eq!(dna.symbols(), "ATGGCCTAA");
    }

    #[test]
    fn from_typed_sequence_wraps_variant() {
        let typed = Sequence::<Rna>::new("r", "GGU").unwrap();
        let any: AnySequence = typed.clone().into();
        assert_eq!(any, AnySequence::Rna(typed));
    }
}
