//! Tile addressing and pixel geometry for square cover grids
//!
//! Tiles are numbered row-major from the top-left corner. A tile address names
//! one or more tiles whose combined bounding box becomes one placement cell.

use crate::io::error::{CoverArtError, Result, invalid_address};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::trace;

/// Index of one atomic grid cell, row-major from the top-left
pub type Tile = u32;

/// Axis-aligned pixel rectangle of a placement cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct BoundingBox {
    /// Top-left corner `[x, y]`
    pub min: [u32; 2],
    /// Bottom-right corner `[x, y]`
    pub max: [u32; 2],
}

impl BoundingBox {
    /// Horizontal extent in pixels
    pub const fn width(&self) -> u32 {
        self.max[0] - self.min[0]
    }

    /// Vertical extent in pixels
    pub const fn height(&self) -> u32 {
        self.max[1] - self.min[1]
    }

    /// Check if a pixel is within the bounds
    pub const fn contains(&self, pos: [u32; 2]) -> bool {
        pos[0] >= self.min[0]
            && pos[0] <= self.max[0]
            && pos[1] >= self.min[1]
            && pos[1] <= self.max[1]
    }

    /// Grow this box to cover `other`
    ///
    /// Both corners of `other` feed both the running minimum and the running
    /// maximum, so the result does not depend on member order.
    #[must_use]
    pub fn union(self, other: &Self) -> Self {
        let min_x = self.min[0].min(other.min[0]).min(other.max[0]);
        let min_y = self.min[1].min(other.min[1]).min(other.max[1]);
        let max_x = self.max[0].max(other.min[0]).max(other.max[0]);
        let max_y = self.max[1].max(other.min[1]).max(other.max[1]);

        Self {
            min: [min_x, min_y],
            max: [max_x, max_y],
        }
    }
}

/// One or more tiles merged into a single placement cell
///
/// The textual form is a comma separated list such as `"0,1,3,4"`; whitespace
/// around each index is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileAddress {
    tiles: Vec<Tile>,
}

impl TileAddress {
    /// Create an address from tile indices
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if `tiles` is empty
    pub fn new(tiles: Vec<Tile>) -> Result<Self> {
        if tiles.is_empty() {
            return Err(invalid_address(&""));
        }
        Ok(Self { tiles })
    }

    /// Member tiles in the order they were written
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }
}

impl FromStr for TileAddress {
    type Err = CoverArtError;

    fn from_str(address: &str) -> Result<Self> {
        let tiles = address
            .split(',')
            .map(|token| token.trim().parse::<Tile>())
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|_parse_error| invalid_address(&address))?;

        Self::new(tiles)
    }
}

impl fmt::Display for TileAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for tile in &self.tiles {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{tile}")?;
            first = false;
        }
        Ok(())
    }
}

/// Pixel geometry of a `dimension` x `dimension` grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    dimension: u32,
    image_size: u32,
    tile_size: u32,
}

impl GridGeometry {
    /// Create the geometry for a square image split into `dimension` tiles per side
    ///
    /// Callers are expected to have validated both values; a zero dimension
    /// yields a grid without tiles.
    pub const fn new(dimension: u32, image_size: u32) -> Self {
        let tile_size = if dimension == 0 {
            0
        } else {
            image_size / dimension
        };

        Self {
            dimension,
            image_size,
            tile_size,
        }
    }

    /// Tiles per side
    pub const fn dimension(&self) -> u32 {
        self.dimension
    }

    /// Image width and height in pixels
    pub const fn image_size(&self) -> u32 {
        self.image_size
    }

    /// Nominal tile edge length in pixels (truncated)
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Total number of tiles in the grid
    pub const fn tile_count(&self) -> u32 {
        self.dimension * self.dimension
    }

    /// Row and column of a tile, or `None` when it lies outside the grid
    pub const fn tile_coordinates(&self, tile: Tile) -> Option<(u32, u32)> {
        if tile >= self.tile_count() {
            return None;
        }
        Some((tile / self.dimension, tile % self.dimension))
    }

    /// Pixel rectangle of a single tile
    ///
    /// The last row and column end at `image_size - 1` rather than at the
    /// truncated multiple of the tile size, so rounding never leaves a gap
    /// along the bottom or right edge.
    pub const fn tile_position(&self, tile: Tile) -> Option<BoundingBox> {
        let Some((row, col)) = self.tile_coordinates(tile) else {
            return None;
        };

        let x1 = col * self.tile_size;
        let y1 = row * self.tile_size;
        let mut x2 = (col + 1) * self.tile_size;
        let mut y2 = (row + 1) * self.tile_size;

        if col == self.dimension - 1 {
            x2 = self.image_size - 1;
        }
        if row == self.dimension - 1 {
            y2 = self.image_size - 1;
        }

        Some(BoundingBox {
            min: [x1, y1],
            max: [x2, y2],
        })
    }

    /// Bounding box of a textual tile address such as `"0,1,3,4"`
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if a token is not a tile index or a tile lies
    /// outside the grid
    pub fn bounding_box(&self, address: &str) -> Result<BoundingBox> {
        let parsed = address.parse::<TileAddress>()?;
        self.address_bounds(&parsed)
            .ok_or_else(|| invalid_address(&address))
    }

    /// Smallest rectangle covering every member tile of `address`
    pub fn address_bounds(&self, address: &TileAddress) -> Option<BoundingBox> {
        let mut bounds: Option<BoundingBox> = None;

        for &tile in address.tiles() {
            let rect = self.tile_position(tile)?;
            trace!(tile, ?rect, "tile position");
            bounds = Some(match bounds {
                Some(current) => current.union(&rect),
                None => rect,
            });
        }

        bounds
    }
}
