//! Provides input/output functionality for the pipeline's file formats.
//!
//! This module contains the reader for the mmCIF structure format consumed on the
//! way in and the NPY array writer used on the way out. It provides a trait-based
//! interface for structure-file parsing so the engine never depends on a concrete
//! format, plus the naming rule for per-chain output files.

pub mod mmcif;
pub mod npy;
pub mod traits;
