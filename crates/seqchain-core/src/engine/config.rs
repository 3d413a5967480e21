use crate::core::models::kind::{SequenceKind, Step};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum ConfigError {
    #[error("Motif #{index} is empty; motifs must contain at least one symbol")]
    EmptyMotif { index: usize },

    #[error("Step '{step}' is not defined for {kind} sequences")]
    UndefinedTransition { kind: SequenceKind, step: Step },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChainConfig {
    pub steps: Vec<Step>,
    pub motifs: Vec<String>,
    pub keep_intermediates: bool,
}

impl ChainConfig {
    /// Walks the steps through the capability table starting at `kind` and returns the
    /// kind of the final sequence.
    pub fn validate_for(&self, kind: SequenceKind) -> Result<SequenceKind, ConfigError> {
        self.steps.iter().try_fold(kind, |current, &step| {
            current
                .successor(step)
                .ok_or(ConfigError::UndefinedTransition {
                    kind: current,
                    step,
                })
        })
    }
}

#[derive(Default)]
pub struct ChainConfigBuilder {
    steps: Vec<Step>,
    motifs: Vec<String>,
    keep_intermediates: Option<bool>,
}

impl ChainConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn steps(mut self, steps: Vec<Step>) -> Self {
        self.steps = steps;
        self
    }
    pub fn step(mut self, step: Step) -> Self {
        self.steps.push(step);
        self
    }
    pub fn motifs(mut self, motifs: Vec<String>) -> Self {
        self.motifs = motifs;
        self
    }
    pub fn motif(mut self, motif: impl Into<String>) -> Self {
        self.motifs.push(motif.into());
        self
    }
    pub fn keep_intermediates(mut self, keep: bool) -> Self {
        self.keep_intermediates = Some(keep);
        self
    }

    pub fn build(self) -> Result<ChainConfig, ConfigError> {
        if let Some(index) = self.motifs.iter().position(|m| m.is_empty()) {
            return Err(ConfigError::EmptyMotif { index });
        }
        Ok(ChainConfig {
            steps: self.steps,
            motifs: self.motifs,
            keep_intermediates: self.keep_intermediates.unwrap_or(false),
        })
    }
}
