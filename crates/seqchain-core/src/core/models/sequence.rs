use super::alphabet::Alphabet;
use super::kind::{Kind, SequenceKind};
use crate::core::error::SequenceError;
use std::fmt;
use std::marker::PhantomData;
use tracing::trace;

/// A validated sequence of kind `K`.
///
/// Every symbol is a member of `K`'s alphabet. All alphabets are ASCII, so character
/// positions and byte offsets coincide.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Sequence<K: Kind> {
    identifier: String, // Opaque, non-empty label; never changes after construction
    symbols: String,    // Validated against K's alphabet
    _kind: PhantomData<K>,
}

impl<K: Kind> Sequence<K> {
    /// Builds a sequence, rejecting it whole if any symbol is outside the alphabet.
    ///
    /// # Errors
    ///
    /// - [`SequenceError::EmptyIdentifier`] if `identifier` is empty.
    /// - [`SequenceError::InvalidAlphabet`] listing every distinct offending symbol.
    pub fn new(
        identifier: impl Into<String>,
        symbols: impl Into<String>,
    ) -> Result<Self, SequenceError> {
        let identifier = identifier.into();
        let symbols = symbols.into();
        if identifier.is_empty() {
            return Err(SequenceError::EmptyIdentifier);
        }
        K::KIND.alphabet().validate(&symbols)?;
        trace!(kind = %K::KIND, identifier = %identifier, length = symbols.len(), "Sequence constructed.");
        Ok(Self {
            identifier,
            symbols,
            _kind: PhantomData,
        })
    }

    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    pub fn symbols(&self) -> &str {
        &self.symbols
    }

    pub fn kind(&self) -> SequenceKind {
        K::KIND
    }

    pub fn alphabet(&self) -> Alphabet {
        K::KIND.alphabet()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// `>identifier: symbols`
    pub fn render(&self) -> String {
        self.to_string()
    }

    /// Replaces the symbol at `position`. Nothing changes if the call fails.
    pub fn mutate(&mut self, position: usize, symbol: char) -> Result<(), SequenceError> {
        if !self.alphabet().contains(symbol) {
            return Err(SequenceError::InvalidAlphabet {
                kind: K::KIND,
                invalid: vec![symbol],
            });
        }
        if position >= self.len() {
            return Err(SequenceError::IndexOutOfRange {
                position,
                length: self.len(),
            });
        }

        let mut buf = [0u8; 4];
        self.symbols
            .replace_range(position..position + 1, symbol.encode_utf8(&mut buf));
        trace!(identifier = %self.identifier, position, %symbol, "Sequence mutated.");
        Ok(())
    }

    /// Lazily yields every start offset where `motif` occurs, overlaps included.
    pub fn motif_hits<'a>(
        &'a self,
        motif: &'a str,
    ) -> Result<impl Iterator<Item = usize> + 'a, SequenceError> {
        if motif.is_empty() {
            return Err(SequenceError::EmptyMotif);
        }
        let needle = motif.as_bytes();
        Ok(self
            .symbols
            .as_bytes()
            .windows(needle.len())
            .enumerate()
            .filter(move |(_, window)| *window == needle)
            .map(|(offset, _)| offset))
    }

    pub fn find_motif(&self, motif: &str) -> Result<Vec<usize>, SequenceError> {
        let positions: Vec<usize> = self.motif_hits(motif)?.collect();
        trace!(identifier = %self.identifier, motif, hits = positions.len(), "Motif scan finished.");
        Ok(positions)
    }
}

impl<K: Kind> fmt::Display for Sequence<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ">{}: {}", self.identifier, self.symbols)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::core::models::kind::{Dna, Protein, Rna};
    use proptest::prelude::*;

    fn check_alphabet_invariant<K: Kind>(text: &str) -> Result<(), TestCaseError> {
        let alphabet = K::KIND.alphabet();
        match Sequence::<K>::new("p", text) {
            Ok(seq) => prop_assert!(seq.symbols().chars().all(|c| alphabet.contains(c))),
            Err(SequenceError::InvalidAlphabet { invalid, .. }) => {
                prop_assert!(!invalid.is_empty());
                prop_assert!(invalid.iter().all(|c| !alphabet.contains(*c)));
                prop_assert!(invalid.iter().all(|c| text.contains(*c)));
            }
            Err(other) => prop_assert!(false, "unexpected error {:?}", other),
        }
        Ok(())
    }

    proptest! {
        #[test]
        fn construction_enforces_alphabet(text in "[ACGTUMN*xz ]{0,24}") {
            check_alphabet_invariant::<Dna>(&text)?;
            check_alphabet_invariant::<Rna>(&text)?;
            check_alphabet_invariant::<Protein>(&text)?;
        }

        #[test]
        fn mutation_preserves_alphabet_and_length(
            text in "[ACGT]{1,24}",
            position in 0usize..32,
            symbol in proptest::char::range('A', 'Z'),
        ) {
            let mut seq = Sequence::<Dna>::new("p", text.as_str()).unwrap();
            let before = seq.symbols().to_string();
            match seq.mutate(position, symbol) {
                Ok(()) => {
                    prop_assert_eq!(seq.len(), before.len());
                    for (i, (old, new)) in before.chars().zip(seq.symbols().chars()).enumerate() {
                        if i == position {
                            prop_assert_eq!(new, symbol);
                        } else {
                            prop_assert_eq!(new, old);
                        }
                    }
                }
                Err(_) => prop_assert_eq!(seq.symbols(), before.as_str()),
            }
            prop_assert!(seq.symbols().chars().all(|c| seq.alphabet().contains(c)));
        }

        #[test]
        fn find_motif_returns_all_and_only_matches(
            text in "[ACGT]{0,40}",
            motif in "[ACGT]{1,4}",
        ) {
            let seq = Sequence::<Dna>::new("p", text.as_str()).unwrap();
            let hits = seq.find_motif(&motif).unwrap();
            let expected: Vec<usize> = (0..text.len())
                .filter(|&i| text[i..].starts_with(motif.as_str()))
                .collect();
            prop_assert_eq!(hits, expected);
        }
    }
}
