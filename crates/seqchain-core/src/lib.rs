//! # seqchain Core Library
//!
//! Typed biological sequences (DNA, RNA, protein) with validated alphabets, point
//! mutation, motif search, and the one-directional transformation chain
//! `DNA --transcribe--> RNA --translate--> Protein`.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Stateless sequence models (`Sequence<K>`, `AnySequence`),
//!   the compile-time lookup tables (base pairing and the standard codon table), and the
//!   transformations themselves. Every kind-specific operation lives on the kind that
//!   defines it, so `translate` on a protein is rejected by the compiler.
//!
//! - **[`engine`]: The Plumbing.** Chain configuration (`ChainConfig`), progress reporting,
//!   and the error type that adds record and step context to sequence failures.
//!
//! - **[`workflows`]: The Public API.** Runs a configured chain of steps and motif scans over
//!   one record or a batch of independent records.
//!
//! ```
//! use seqchain::core::models::kind::{Dna, Rna};
//! use seqchain::core::models::sequence::Sequence;
//!
//! let dna = Sequence::<Dna>::new("seq1", "ATGTTTTAA")?;
//! let rna: Sequence<Rna> = dna.transcribe()?;
//! let protein = rna.translate()?;
//! assert_eq!(protein.render(), ">seq1: MF*");
//! # Ok::<(), seqchain::core::error::SequenceError>(())
//! ```

pub mod core;
pub mod engine;
pub mod workflows;
