//! # Core Module
//!
//! The fundamental building blocks of seqchain: sequence models, the immutable lookup
//! tables they rely on, and the transformations between sequence kinds.
//!
//! ## Architecture
//!
//! - **Sequence Representation** ([`models`]) - Kinds, alphabets, typed and runtime-typed sequences
//! - **Lookup Tables** ([`tables`]) - Base pairing maps and the standard codon table
//! - **Transformations** ([`transform`]) - Complement, transcription and translation
//! - **Errors** ([`error`]) - The error taxonomy shared by every sequence operation
//!
//! ## Invariants
//!
//! Every symbol of a sequence belongs to the alphabet of its kind. Construction and
//! mutation are the only places symbols are written, and both validate before committing.
//! Transformations never touch their source; they build a new value of the target kind and
//! validate it against the target alphabet before returning it.

pub mod error;
pub mod models;
pub mod tables;
pub mod transform;
