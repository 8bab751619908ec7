//! # ContactMap Core Library
//!
//! A library for turning a macromolecular structure file into one pairwise
//! alpha-carbon distance matrix per polymer chain, serialized as NumPy arrays.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to ensure a clear separation of concerns,
//! making it modular, testable, and extensible.
//!
//! - **[`core`]: The Foundation.** Contains stateless data models (`AtomSiteRecord`, `Chain`,
//!   `DistanceMatrix`) and I/O codecs for the mmCIF input and NPY output formats.
//!
//! - **[`engine`]: The Logic Core.** This layer implements the actual transformation: the
//!   alpha-carbon selection rule, insertion-ordered grouping of atoms into chains, and the
//!   per-chain distance matrix construction.
//!
//! - **[`workflows`]: The Public API.** This is the highest-level, user-facing layer. It ties the
//!   `engine` and `core` together to execute the complete record-stream-to-matrices pipeline,
//!   providing a simple entry point for end-users of the library.

pub mod core;
pub mod engine;
pub mod workflows;
