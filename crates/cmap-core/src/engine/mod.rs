//! # Engine Module - Contact Map Computation
//!
//! This module implements the computational layer that turns raw atom records
//! into per-chain distance matrices. It sits between the I/O layer, which
//! produces [`AtomSiteRecord`](crate::core::models::atom::AtomSiteRecord)s,
//! and the workflow layer, which orchestrates a full generation run.
//!
//! ## Overview
//!
//! The engine is organized as a short pipeline:
//!
//! 1. **Selection** ([`selection`]): filters the records down to alpha-carbon
//!    atoms and parses their coordinates into typed [`Atom`](crate::core::models::atom::Atom)s.
//! 2. **Grouping and distances** ([`distance`]): partitions atoms into chains
//!    in order of first appearance and computes one symmetric Euclidean
//!    distance matrix per chain.
//!
//! Every stage is fallible and surfaces its failures through
//! [`EngineError`](error::EngineError); there is no partial output. A file
//! with no qualifying atoms is not an error and simply yields no matrices.

pub mod distance;
pub mod error;
pub mod selection;
