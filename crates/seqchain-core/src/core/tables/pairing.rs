use crate::core::models::kind::SequenceKind;
use phf::{Map, phf_map};

static DNA_PAIRING: Map<char, char> = phf_map! {
    'A' => 'T', 'T' => 'A',
    'C' => 'G', 'G' => 'C',
};

static RNA_PAIRING: Map<char, char> = phf_map! {
    'A' => 'U', 'U' => 'A',
    'C' => 'G', 'G' => 'C',
};

/// The pairing table of a kind, or `None` for kinds without a complement.
pub fn pairing_for(kind: SequenceKind) -> Option<&'static Map<char, char>> {
    match kind {
        SequenceKind::Dna => Some(&DNA_PAIRING),
        SequenceKind::Rna => Some(&RNA_PAIRING),
        SequenceKind::Protein => None,
    }
}

pub fn partner(kind: SequenceKind, symbol: char) -> Option<char> {
    pairing_for(kind)?.get(&symbol).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dna_pairs_adenine_with_thymine() {
        assert_eq!(partner(SequenceKind::Dna, 'A'), Some('T'));
        assert_eq!(partner(SequenceKind::Dna, 'T'), Some('A'));
        assert_eq!(partner(SequenceKind::Dna, 'C'), Some('G'));
        assert_eq!(partner(SequenceKind::Dna, 'G'), Some('C'));
        assert_eq!(partner(SequenceKind::Dna, 'U'), None);
    }

    #[test]
    fn rna_pairs_adenine_with_uracil() {
        assert_eq!(partner(SequenceKind::Rna, 'A'), Some('U'));
        assert_eq!(partner(SequenceKind::Rna, 'U'), Some('A'));
        assert_eq!(partner(SequenceKind::Rna, 'T'), None);
    }

    #[test]
    fn protein_has_no_pairing() {
        assert!(pairing_for(SequenceKind::Protein).is_none());
        assert_eq!(partner(SequenceKind::Protein, 'A'), None);
    }

    #[test]
    fn pairing_covers_alphabet_and_is_an_involution() {
        for kind in [SequenceKind::Dna, SequenceKind::Rna] {
            let table = pairing_for(kind).unwrap();
            let alphabet = kind.alphabet();
            assert_eq!(table.len(), alphabet.len());
            for symbol in alphabet.symbols() {
                let paired = table[&symbol];
                assert!(alphabet.contains(paired));
                assert_eq!(table[&paired], symbol);
            }
        }
    }
}
