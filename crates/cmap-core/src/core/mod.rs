//! # Core Module
//!
//! This module provides the fundamental building blocks for contact-map generation,
//! serving as the data and I/O foundation of the library.
//!
//! ## Overview
//!
//! The core module implements the data structures and codecs required to go from a
//! structure file on disk to typed atom records, and from computed distance matrices
//! back to files a downstream NumPy-based toolchain can consume.
//!
//! ## Architecture
//!
//! The module is organized into specialized submodules that handle different aspects
//! of the pipeline:
//!
//! - **Molecular Representation** ([`models`]) - Data structures for atom records, selected
//!   atoms, chains, and distance matrices
//! - **File I/O** ([`io`]) - Reading mmCIF atom-site tables and writing NPY arrays
//! - **Utilities** ([`utils`]) - Small geometric helpers shared by the engine
//!
//! ## Key Capabilities
//!
//! - **Faithful mmCIF ingestion** of the `_atom_site` table with strict syntax checking
//! - **NumPy-compatible output** byte-identical to `np.save` for 2-D float64 arrays
//! - **Order-preserving chain model** so matrix indices always mean file order

pub mod io;
pub mod models;
pub mod utils;
