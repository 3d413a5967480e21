pub mod batch;
pub mod chain;
pub mod motif;
pub mod mutate;
pub mod render;

use crate::cli::SequenceArgs;
use seqchain::core::models::record::SequenceRecord;

impl From<SequenceArgs> for SequenceRecord {
    fn from(args: SequenceArgs) -> Self {
        SequenceRecord::new(args.kind, args.identifier, args.symbols)
    }
}
