use super::kind::SequenceKind;
use crate::core::error::SequenceError;
use phf::{Set, phf_set};
use std::collections::BTreeSet;
use std::fmt;

static DNA_SYMBOLS: Set<char> = phf_set! { 'A', 'C', 'G', 'T' };

static RNA_SYMBOLS: Set<char> = phf_set! { 'A', 'C', 'G', 'U' };

// 20 standard residues, the ambiguity / non-standard codes B J O U X Z, and the stop marker.
static PROTEIN_SYMBOLS: Set<char> = phf_set! {
    'A', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'K', 'L',
    'M', 'N', 'P', 'Q', 'R', 'S', 'T', 'V', 'W', 'Y',
    'B', 'J', 'O', 'U', 'X', 'Z',
    '*',
};

/// The fixed symbol set of a sequence kind. Symbols are case-sensitive.
#[derive(Clone, Copy)]
pub struct Alphabet {
    kind: SequenceKind,
    symbols: &'static Set<char>,
}

impl Alphabet {
    pub fn for_kind(kind: SequenceKind) -> Self {
        let symbols = match kind {
            SequenceKind::Dna => &DNA_SYMBOLS,
            SequenceKind::Rna => &RNA_SYMBOLS,
            SequenceKind::Protein => &PROTEIN_SYMBOLS,
        };
        Self { kind, symbols }
    }

    pub fn kind(&self) -> SequenceKind {
        self.kind
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.symbols.contains(&symbol)
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Members in ascending order.
    pub fn symbols(&self) -> Vec<char> {
        let mut symbols: Vec<char> = self.symbols.iter().copied().collect();
        symbols.sort_unstable();
        symbols
    }

    /// Distinct characters of `text` outside the alphabet, sorted.
    pub fn invalid_symbols(&self, text: &str) -> BTreeSet<char> {
        text.chars().filter(|c| !self.contains(*c)).collect()
    }

    pub fn validate(&self, text: &str) -> Result<(), SequenceError> {
        let invalid = self.invalid_symbols(text);
        if invalid.is_empty() {
            Ok(())
        } else {
            Err(SequenceError::InvalidAlphabet {
                kind: self.kind,
                invalid: invalid.into_iter().collect(),
            })
        }
    }
}

impl PartialEq for Alphabet {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind
    }
}

impl Eq for Alphabet {}

impl fmt::Debug for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Alphabet")
            .field("kind", &self.kind)
            .field("symbols", &self.symbols().into_iter().collect::<String>())
            .finish()
    }
}
