use thiserror::Error;

use super::config::ConfigError;
use crate::core::error::SequenceError;
use crate::core::models::kind::Step;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid chain configuration for record '{identifier}': {source}")]
    Config {
        identifier: String,
        #[source]
        source: ConfigError,
    },

    #[error("Record '{identifier}' is not a valid sequence: {source}")]
    Sequence {
        identifier: String,
        #[source]
        source: SequenceError,
    },

    #[error("Step '{step}' failed for record '{identifier}': {source}")]
    Step {
        identifier: String,
        step: Step,
        #[source]
        source: SequenceError,
    },

    #[error("Motif search for '{motif}' failed on record '{identifier}': {source}")]
    Motif {
        identifier: String,
        motif: String,
        #[source]
        source: SequenceError,
    },
}

impl EngineError {
    pub fn identifier(&self) -> &str {
        match self {
            EngineError::Config { identifier, .. }
            | EngineError::Sequence { identifier, .. }
            | EngineError::Step { identifier, .. }
            | EngineError::Motif { identifier, .. } => identifier,
        }
    }
}
