//! # Workflows Module - High-Level Orchestration
//!
//! This module provides the top-level entry point that ties the engine stages
//! together into a complete contact map generation run. Callers hand it the
//! raw atom-site records read by the I/O layer and receive the finished
//! per-chain distance matrices back; reading input files and writing matrix
//! files stay with the caller, keeping the workflow itself pure and easy to
//! test.

pub mod generate;
