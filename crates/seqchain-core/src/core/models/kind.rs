use super::alphabet::Alphabet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    Dna,
    Rna,
    Protein,
}

/// A transformation between sequence kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Step {
    Complement,
    Transcribe,
    Translate,
}

/// Which transformations a kind defines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capabilities {
    pub complement: bool,
    pub transcribe: bool,
    pub translate: bool,
}

impl Capabilities {
    pub fn supports(&self, step: Step) -> bool {
        match step {
            Step::Complement => self.complement,
            Step::Transcribe => self.transcribe,
            Step::Translate => self.translate,
        }
    }
}

const DNA_CAPABILITIES: Capabilities = Capabilities {
    complement: true,
    transcribe: true,
    translate: false,
};

const RNA_CAPABILITIES: Capabilities = Capabilities {
    complement: true,
    transcribe: false,
    translate: true,
};

const PROTEIN_CAPABILITIES: Capabilities = Capabilities {
    complement: false,
    transcribe: false,
    translate: false,
};

impl SequenceKind {
    pub const ALL: [SequenceKind; 3] = [
        SequenceKind::Dna,
        SequenceKind::Rna,
        SequenceKind::Protein,
    ];

    pub fn alphabet(self) -> Alphabet {
        Alphabet::for_kind(self)
    }

    pub fn capabilities(self) -> Capabilities {
        match self {
            SequenceKind::Dna => DNA_CAPABILITIES,
            SequenceKind::Rna => RNA_CAPABILITIES,
            SequenceKind::Protein => PROTEIN_CAPABILITIES,
        }
    }

    /// The kind produced by applying `step`, or `None` if the kind does not define it.
    pub fn successor(self, step: Step) -> Option<SequenceKind> {
        if !self.capabilities().supports(step) {
            return None;
        }
        match (self, step) {
            (SequenceKind::Dna, Step::Transcribe) => Some(SequenceKind::Rna),
            (SequenceKind::Rna, Step::Translate) => Some(SequenceKind::Protein),
            (kind, Step::Complement) => Some(kind),
            _ => None,
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid sequence kind '{0}' (expected 'dna', 'rna' or 'protein')")]
pub struct ParseSequenceKindError(String);

impl FromStr for SequenceKind {
    type Err = ParseSequenceKindError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "dna" => Ok(SequenceKind::Dna),
            "rna" => Ok(SequenceKind::Rna),
            "protein" => Ok(SequenceKind::Protein),
            _ => Err(ParseSequenceKindError(s.to_string())),
        }
    }
}

impl fmt::Display for SequenceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SequenceKind::Dna => "DNA",
                SequenceKind::Rna => "RNA",
                SequenceKind::Protein => "Protein",
            }
        )
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid step '{0}' (expected 'complement', 'transcribe' or 'translate')")]
pub struct ParseStepError(String);

impl FromStr for Step {
    type Err = ParseStepError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "complement" => Ok(Step::Complement),
            "transcribe" => Ok(Step::Transcribe),
            "translate" => Ok(Step::Translate),
            _ => Err(ParseStepError(s.to_string())),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Step::Complement => "complement",
                Step::Transcribe => "transcribe",
                Step::Translate => "translate",
            }
        )
    }
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for super::Dna {}
    impl Sealed for super::Rna {}
    impl Sealed for super::Protein {}
}

/// Compile-time marker for a sequence kind. Implemented only by [`Dna`], [`Rna`] and
/// [`Protein`].
pub trait Kind:
    sealed::Sealed
    + fmt::Debug
    + Clone
    + Copy
    + PartialEq
    + Eq
    + std::hash::Hash
    + Send
    + Sync
    + 'static
{
    const KIND: SequenceKind;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dna;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rna;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Protein;

impl Kind for Dna {
    const KIND: SequenceKind = SequenceKind::Dna;
}

impl Kind for Rna {
    const KIND: SequenceKind = SequenceKind::Rna;
}

impl Kind for Protein {
    const KIND: SequenceKind = SequenceKind::Protein;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_str_is_case_insensitive_and_trims() {
        assert_eq!("DNA".parse::<SequenceKind>(), Ok(SequenceKind::Dna));
        assert_eq!(" rna ".parse::<SequenceKind>(), Ok(SequenceKind::Rna));
        assert_eq!("Protein".parse::<SequenceKind>(), Ok(SequenceKind::Protein));
    }

    #[test]
    fn from_str_rejects_unknown_kind() {
        assert!("peptide".parse::<SequenceKind>().is_err());
        assert!("".parse::<SequenceKind>().is_err());
    }

    #[test]
    fn display_uses_conventional_names() {
        assert_eq!(SequenceKind::Dna.to_string(), "DNA");
        assert_eq!(SequenceKind::Rna.to_string(), "RNA");
        assert_eq!(SequenceKind::Protein.to_string(), "Protein");
    }

    #[test]
    fn step_round_trips_through_display_and_from_str() {
        for step in [Step::Complement, Step::Transcribe, Step::Translate] {
            assert_eq!(step.to_string().parse::<Step>(), Ok(step));
        }
        assert!("reverse".parse::<Step>().is_err());
    }

    #[test]
    fn capability_table_matches_transformation_chain() {
        assert!(SequenceKind::Dna.capabilities().supports(Step::Complement));
        assert!(SequenceKind::Dna.capabilities().supports(Step::Transcribe));
        assert!(!SequenceKind::Dna.capabilities().supports(Step::Translate));

        assert!(SequenceKind::Rna.capabilities().supports(Step::Complement));
        assert!(!SequenceKind::Rna.capabilities().supports(Step::Transcribe));
        assert!(SequenceKind::Rna.capabilities().supports(Step::Translate));

        for step in [Step::Complement, Step::Transcribe, Step::Translate] {
            assert!(!SequenceKind::Protein.capabilities().supports(step));
        }
    }

    #[test]
    fn successor_follows_forward_chain_only() {
        use SequenceKind as K;
        assert_eq!(K::Dna.successor(Step::Complement), Some(K::Dna));
        assert_eq!(K::Dna.successor(Step::Transcribe), Some(K::Rna));
        assert_eq!(K::Dna.successor(Step::Translate), None);
        assert_eq!(K::Rna.successor(Step::Complement), Some(K::Rna));
        assert_eq!(K::Rna.successor(Step::Translate), Some(K::Protein));
        assert_eq!(K::Rna.successor(Step::Transcribe), None);
        assert_eq!(K::Protein.successor(Step::Complement), None);
        assert_eq!(K::Protein.successor(Step::Translate), None);
    }

    #[test]
    fn serde_uses_lowercase_names() {
        #[derive(Deserialize)]
        struct Wrapper {
            kind: SequenceKind,
            step: Step,
        }
        let parsed: Wrapper = toml::from_str("kind = \"rna\"\nstep = \"translate\"").unwrap();
        assert_eq!(parsed.kind, SequenceKind::Rna);
        assert_eq!(parsed.step, Step::Translate);
    }

    #[test]
    fn markers_carry_their_runtime_kind() {
        assert_eq!(Dna::KIND, SequenceKind::Dna);
        assert_eq!(Rna::KIND, SequenceKind::Rna);
        assert_eq!(Protein::KIND, SequenceKind::Protein);
    }
}
