//! # Workflows Module
//!
//! High-level entry points that take plain input records and a [`crate::engine::config::ChainConfig`]
//! and produce finished results.
//!
//! - **Chain Workflow** ([`chain`]) - Validates a record, applies the configured
//!   transformation steps in order, and scans the final sequence for motifs. Batches of
//!   independent records run in parallel when the `parallel` feature is enabled.

pub mod chain;
