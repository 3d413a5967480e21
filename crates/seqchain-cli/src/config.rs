mod models;

pub use models::JobConfig;

use crate::cli::BatchArgs;
use crate::error::{CliError, Result};
use crate::utils::parser;
use seqchain::core::models::kind::Step;
use seqchain::core::models::record::SequenceRecord;
use seqchain::engine::config::ChainConfigBuilder;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
struct PartialChainConfig {
    steps: Option<Vec<Step>>,
    motifs: Option<Vec<String>>,
    #[serde(rename = "keep-intermediates")]
    keep_intermediates: Option<bool>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields)]
pub struct PartialJobConfig {
    chain: Option<PartialChainConfig>,
    records: Option<Vec<SequenceRecord>>,
}

impl PartialJobConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading job file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    /// Precedence, highest first: explicit CLI flags, `-S` values, the job file, defaults.
    pub fn merge_with_cli(mut self, args: &BatchArgs) -> Result<JobConfig> {
        self.apply_set_values(&args.set_values)?;

        let chain_config = self.chain.take().unwrap_or_default();

        let steps = if args.steps.is_empty() {
            chain_config.steps.unwrap_or_default()
        } else {
            args.steps.clone()
        };
        let motifs = if args.motifs.is_empty() {
            chain_config.motifs.unwrap_or_default()
        } else {
            args.motifs.clone()
        };
        let keep_intermediates =
            args.keep_intermediates || chain_config.keep_intermediates.unwrap_or(false);

        let records = self.records.take().unwrap_or_default();
        if records.is_empty() {
            return Err(CliError::Config(
                "The job file must contain at least one `[[records]]` entry.".to_string(),
            ));
        }

        let chain = ChainConfigBuilder::new()
            .steps(steps)
            .motifs(motifs)
            .keep_intermediates(keep_intermediates)
            .build()?;

        Ok(JobConfig { records, chain })
    }

    fn apply_set_values(&mut self, set_values: &[String]) -> Result<()> {
        for kv_pair in set_values {
            let (key, value) =
                parser::parse_key_value(kv_pair).map_err(|e| CliError::Config(e.to_string()))?;
            let chain = self.chain.get_or_insert_with(Default::default);

            match key {
                "chain.steps" => {
                    chain.steps = Some(
                        parser::parse_list(key, value)
                            .map_err(|e| CliError::Config(e.to_string()))?,
                    );
                }
                "chain.motifs" => {
                    chain.motifs = Some(
                        parser::parse_list(key, value)
                            .map_err(|e| CliError::Config(e.to_string()))?,
                    );
                }
                "chain.keep-intermediates" => {
                    chain.keep_intermediates = Some(
                        parser::parse_value(key, value)
                            .map_err(|e| CliError::Config(e.to_string()))?,
                    );
                }
                _ => {
                    return Err(CliError::Config(format!(
                        "Unsupported configuration key for --set: '{}'",
                        key
                    )));
                }
            }
        }
        Ok(())
    }
}
