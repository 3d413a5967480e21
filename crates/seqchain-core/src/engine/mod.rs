//! # Engine Module
//!
//! The plumbing that sits between the sequence models in [`crate::core`] and the
//! end-to-end [`crate::workflows`].
//!
//! - [`config`] - What a chain run should do: the ordered steps, motif scans, and whether
//!   intermediate sequences are kept. Built through [`config::ChainConfigBuilder`].
//! - [`progress`] - A callback-based progress reporter, so front-ends can draw their own
//!   progress display without the library depending on one.
//! - [`error`] - [`error::EngineError`], which attaches record and step context to the
//!   underlying [`crate::core::error::SequenceError`].

pub mod config;
pub mod error;
pub mod progress;
