//! # Core Models Module
//!
//! Data structures describing biological sequences and the rules that keep them valid.
//!
//! ## Key Components
//!
//! - [`kind`] - The closed set of sequence kinds, their capability table, and the
//!   zero-sized markers used to type sequences statically
//! - [`alphabet`] - The fixed symbol set of each kind
//! - [`sequence`] - `Sequence<K>`, the validated record shared by every kind
//! - [`any`] - `AnySequence`, the tagged union used when the kind is only known at run time
//! - [`record`] - `SequenceRecord`, the plain input triple a sequence is built from
//!
//! ## Usage
//!
//! ```
//! use seqchain::core::models::kind::Dna;
//! use seqchain::core::models::sequence::Sequence;
//!
//! let mut dna = Sequence::<Dna>::new("seq1", "ATCG")?;
//! dna.mutate(0, 'T')?;
//! assert_eq!(dna.render(), ">seq1: TTCG");
//! assert_eq!(dna.find_motif("CG")?, vec![2]);
//! # Ok::<(), seqchain::core::error::SequenceError>(())
//! ```

pub mod alphabet;
pub mod any;
pub mod kind;
pub mod record;
pub mod sequence;
