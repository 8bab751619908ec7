//! # Core Models Module
//!
//! This module contains the fundamental data structures used to represent a structure's
//! atoms and the matrices derived from them, providing the foundation for the whole pipeline.
//!
//! ## Overview
//!
//! The models module defines the data that flows between the layers:
//!
//! - **Represent the input** - Raw atom-site rows exactly as the file states them
//! - **Represent the selection** - Chain-tagged alpha-carbon positions
//! - **Represent the result** - Square, symmetric per-chain distance matrices
//! - **Maintain type safety** - Invariants (squareness, file order) enforced at construction
//!
//! ## Key Components
//!
//! - [`atom`] - Raw atom-site records and selected atoms with parsed coordinates
//! - [`chain`] - Per-chain ordered atom collections
//! - [`matrix`] - The square distance matrix and its shape invariant
//!
//! ## Usage
//!
//! Most operations start from a stream of [`atom::AtomSiteRecord`]s produced by the I/O
//! layer and end in a mapping of chain identifiers to [`matrix::DistanceMatrix`] values.
//!
//! ```ignore
//! use contactmap::core::models::{atom::Atom, matrix::DistanceMatrix};
//!
//! let atom = Atom::new("A", Point3::new(17.023, -10.577, 32.291));
//! let matrix = DistanceMatrix::from_flat(vec![0.0])?;
//! assert_eq!(matrix.dim(), 1);
//! ```

pub mod atom;
pub mod chain;
pub mod matrix;
