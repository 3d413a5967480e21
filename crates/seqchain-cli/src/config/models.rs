use seqchain::core::models::record::SequenceRecord;
use seqchain::engine::config::ChainConfig;

pub struct JobConfig {
    pub records: Vec<SequenceRecord>,
    pub chain: ChainConfig,
}
