//! Provides small numeric helpers shared across the core and engine layers.

pub mod geometry;
