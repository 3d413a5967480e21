//! Transformations along the chain `DNA -> RNA -> Protein`.
//!
//! Each operation is implemented only on the kind that defines it: DNA has
//! `complement` and `transcribe`, RNA has `complement` and `translate`, and protein has
//! none. The source is never modified; the result is a new, independently owned sequence
//! that has been validated against its own alphabet.

use crate::core::error::SequenceError;
use crate::core::models::kind::{Dna, Kind, Protein, Rna};
use crate::core::models::sequence::Sequence;
use crate::core::tables::{codon, pairing};
use tracing::debug;

fn complement_of<K: Kind>(seq: &Sequence<K>) -> Result<Sequence<K>, SequenceError> {
    let symbols = seq
        .symbols()
        .chars()
        .map(|symbol| {
            pairing::partner(K::KIND, symbol).ok_or(SequenceError::UnmappedSymbol {
                kind: K::KIND,
                symbol,
            })
        })
        .collect::<Result<String, _>>()?;
    debug!(kind = %K::KIND, identifier = seq.identifier(), "Complemented sequence.");
    Sequence::new(seq.identifier(), symbols)
}

impl Sequence<Dna> {
    /// Pairs A with T and C with G.
    pub fn complement(&self) -> Result<Sequence<Dna>, SequenceError> {
        complement_of(self)
    }

    /// Replaces every `T` with `U`.
    pub fn transcribe(&self) -> Result<Sequence<Rna>, SequenceError> {
        let symbols = self.symbols().replace('T', "U");
        debug!(identifier = self.identifier(), length = self.len(), "Transcribed DNA to RNA.");
        Sequence::new(self.identifier(), symbols)
    }
}

impl Sequence<Rna> {
    /// Pairs A with U and C with G.
    pub fn complement(&self) -> Result<Sequence<Rna>, SequenceError> {
        complement_of(self)
    }

    /// Translates consecutive, non-overlapping codons from offset 0 with the standard
    /// genetic code. Stop codons become `*` and translation continues past them.
    ///
    /// # Errors
    ///
    /// [`SequenceError::IncompleteCodon`] if the length is not a multiple of three; trailing
    /// symbols are never dropped.
    pub fn translate(&self) -> Result<Sequence<Protein>, SequenceError> {
        let symbols = self.symbols();
        let remainder = symbols.len() % codon::CODON_LENGTH;
        if remainder != 0 {
            return Err(SequenceError::IncompleteCodon {
                length: symbols.len(),
                remainder,
            });
        }

        let mut stop_codons = 0;
        let residues = (0..symbols.len())
            .step_by(codon::CODON_LENGTH)
            .map(|start| {
                let triplet = &symbols[start..start + codon::CODON_LENGTH];
                if codon::is_stop_codon(triplet) {
                    stop_codons += 1;
                }
                codon::amino_acid(triplet).ok_or_else(|| SequenceError::UnmappedCodon {
                    codon: triplet.to_string(),
                })
            })
            .collect::<Result<String, _>>()?;
        debug!(
            identifier = self.identifier(),
            codons = residues.len(),
            stop_codons,
            "Translated RNA to protein."
        );
        Sequence::new(self.identifier(), residues)
    }
}
