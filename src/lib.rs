//! Grid layout engine for cover art composites built from listening statistics
//!
//! A square image is split into `dimension` x `dimension` tiles. Layout designs
//! merge tiles into larger cells, and ranked releases fill those cells in
//! order, yielding a list of positioned thumbnail URLs for a renderer.

#![forbid(unsafe_code)]

/// Cover art URL resolution and candidate placement
pub mod art;
/// Configuration, validation and error handling
pub mod io;
/// Tile geometry and layout designs
pub mod spatial;
/// Listening statistics stores and statistics covers
pub mod stats;

pub use io::error::{CoverArtError, Result};
