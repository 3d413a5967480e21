//! # Lookup Tables Module
//!
//! Process-wide immutable tables, generated at compile time with `phf`:
//!
//! - [`pairing`] - Watson-Crick base pairing for DNA and RNA
//! - [`codon`] - The standard genetic code (NCBI table 1) over RNA codons
//!
//! The tables are never mutated and need no initialisation at run time.

pub mod codon;
pub mod pairing;
