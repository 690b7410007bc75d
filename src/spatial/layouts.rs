//! Built-in tile grouping designs for each supported grid dimension
//!
//! Each design is an ordered list of tile addresses that partitions the grid:
//! every tile belongs to exactly one address. Design 0 of every dimension is
//! the plain one-cover-per-tile grid.

use crate::io::configuration::{MAX_DIMENSION, MIN_DIMENSION};
use crate::io::error::{CoverArtError, Result, invalid_address};
use crate::spatial::geometry::{GridGeometry, TileAddress};
use bitvec::prelude::{BitVec, bitvec};

/// One complete partition of a grid into tile addresses
pub type LayoutDesign = &'static [&'static str];

const DIMENSION_2: &[LayoutDesign] = &[&["0", "1", "2", "3"]];

const DIMENSION_3: &[LayoutDesign] = &[
    &["0", "1", "2", "3", "4", "5", "6", "7", "8"],
    &["0,1,3,4", "2", "5", "6", "7", "8"],
    &["0", "1", "2", "3", "4,5,7,8", "6"],
];

const DIMENSION_4: &[LayoutDesign] = &[
    &[
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
    ],
    &[
        "5,6,9,10", "0", "1", "2", "3", "4", "7", "8", "11", "12", "13", "14", "15",
    ],
    &[
        "0,1,4,5", "10,11,14,15", "2", "3", "6", "7", "8", "9", "12", "13",
    ],
    &["0,1,2,4,5,6,8,9,10", "3", "7", "11", "12", "13", "14", "15"],
];

const DIMENSION_5: &[LayoutDesign] = &[
    &[
        "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15",
        "16", "17", "18", "19", "20", "21", "22", "23", "24",
    ],
    &[
        "0,1,2,5,6,7,10,11,12",
        "3,4,8,9",
        "15,16,20,21",
        "13",
        "14",
        "17",
        "18",
        "19",
        "22",
        "23",
        "24",
    ],
];

/// How the tile addresses of a cover are chosen
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LayoutSelection {
    /// Design 0 of the catalog for the grid dimension
    #[default]
    Default,
    /// A catalog design by index
    Index(usize),
    /// Caller supplied addresses, used as-is
    Addresses(Vec<String>),
}

/// Static table of layout designs keyed by grid dimension
pub struct LayoutCatalog;

impl LayoutCatalog {
    /// All designs registered for `dimension`, or `None` for unsupported dimensions
    pub const fn designs(dimension: u32) -> Option<&'static [LayoutDesign]> {
        match dimension {
            2 => Some(DIMENSION_2),
            3 => Some(DIMENSION_3),
            4 => Some(DIMENSION_4),
            5 => Some(DIMENSION_5),
            _ => None,
        }
    }

    /// Design `layout` for `dimension`
    ///
    /// # Errors
    ///
    /// Returns `UnknownLayout` when no such design is registered
    pub fn design(dimension: u32, layout: usize) -> Result<LayoutDesign> {
        Self::designs(dimension)
            .and_then(|designs| designs.get(layout).copied())
            .ok_or(CoverArtError::UnknownLayout { dimension, layout })
    }

    /// The plain one-cover-per-tile design for `dimension`
    ///
    /// # Errors
    ///
    /// Returns `UnknownLayout` when the dimension is unsupported
    pub fn default_design(dimension: u32) -> Result<LayoutDesign> {
        Self::design(dimension, 0)
    }

    /// Resolve a selection into the tile addresses to fill, in order
    ///
    /// # Errors
    ///
    /// Returns `UnknownLayout` when a catalog design is requested that does not exist
    pub fn addresses(dimension: u32, selection: &LayoutSelection) -> Result<Vec<String>> {
        let design = match selection {
            LayoutSelection::Addresses(addresses) => return Ok(addresses.clone()),
            LayoutSelection::Index(layout) => Self::design(dimension, *layout)?,
            LayoutSelection::Default => Self::default_design(dimension)?,
        };

        Ok(design.iter().map(|address| (*address).to_string()).collect())
    }

    /// Check that every built-in design partitions its grid into rectangles
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` naming the first address that overlaps another,
    /// is not rectangular, or leaves tiles uncovered
    pub fn verify() -> Result<()> {
        for dimension in MIN_DIMENSION..=MAX_DIMENSION {
            for design in Self::designs(dimension).unwrap_or_default() {
                verify_partition(dimension, design)?;
            }
        }
        Ok(())
    }
}

/// Check that `design` covers every tile of the grid exactly once and that
/// every merged address spans a full rectangle of tiles
///
/// # Errors
///
/// Returns `InvalidAddress` for the first offending address, or for the whole
/// design when some tiles are left uncovered
pub fn verify_partition(dimension: u32, design: &[&str]) -> Result<()> {
    let geometry = GridGeometry::new(dimension, dimension);
    let mut covered: BitVec = bitvec![0; geometry.tile_count() as usize];

    for &address in design {
        let parsed = address.parse::<TileAddress>()?;

        let mut rows = (u32::MAX, 0);
        let mut cols = (u32::MAX, 0);
        for &tile in parsed.tiles() {
            let (row, col) = geometry
                .tile_coordinates(tile)
                .ok_or_else(|| invalid_address(&address))?;

            // Tile already claimed by an earlier address
            if covered.replace(tile as usize, true) {
                return Err(invalid_address(&address));
            }

            rows = (rows.0.min(row), rows.1.max(row));
            cols = (cols.0.min(col), cols.1.max(col));
        }

        let spanned = (rows.1 - rows.0 + 1) * (cols.1 - cols.0 + 1);
        if spanned as usize != parsed.tiles().len() {
            return Err(invalid_address(&address));
        }
    }

    if covered.not_all() {
        return Err(invalid_address(&design.join(" ")));
    }

    Ok(())
}
