//! Grid geometry and layout designs
//!
//! This module contains the spatial side of cover generation:
//! - Tile addressing and pixel bounding boxes
//! - The catalog of built-in layout designs

/// Tile positions and bounding boxes
pub mod geometry;
/// Built-in layout designs per grid dimension
pub mod layouts;

pub use geometry::{BoundingBox, GridGeometry, TileAddress};
pub use layouts::{LayoutCatalog, LayoutSelection};
