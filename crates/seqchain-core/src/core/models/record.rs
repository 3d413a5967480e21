use super::any::AnySequence;
use super::kind::SequenceKind;
use crate::core::error::SequenceError;
use serde::{Deserialize, Serialize};

/// Unvalidated input for a sequence: what a caller hands over before construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SequenceRecord {
    pub kind: SequenceKind,
    #[serde(rename = "id")]
    pub identifier: String,
    pub symbols: String,
}

impl SequenceRecord {
    pub fn new(
        kind: SequenceKind,
        identifier: impl Into<String>,
        symbols: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            identifier: identifier.into(),
            symbols: symbols.into(),
        }
    }

    pub fn to_sequence(&self) -> Result<AnySequence, SequenceError> {
        AnySequence::new(self.kind, self.identifier.as_str(), self.symbols.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_from_toml_with_id_key() {
        let record: SequenceRecord =
            toml::from_str("kind = \"dna\"\nid = \"seq1\"\nsymbols = \"ATCG\"").unwrap();
        assert_eq!(record, SequenceRecord::new(SequenceKind::Dna, "seq1", "ATCG"));
    }

    #[test]
    fn rejects_unknown_fields() {
        let result: Result<SequenceRecord, _> =
            toml::from_str("kind = \"dna\"\nid = \"seq1\"\nsymbols = \"ATCG\"\nnote = \"x\"");
        assert!(result.is_err());
    }

    #[test]
    fn to_sequence_validates_symbols() {
        let good = SequenceRecord::new(SequenceKind::Protein, "p", "MNOMN");
        assert_eq!(good.to_sequence().unwrap().render(), ">p: MNOMN");

        let bad = SequenceRecord::new(SequenceKind::Dna, "d", "ACGU");
        assert!(matches!(
            bad.to_sequence(),
            Err(SequenceError::InvalidAlphabet { .. })
        ));
    }
}
