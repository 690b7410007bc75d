//! Grid generator options and their validation
//!
//! Options are checked in one eager pass before any generation work so that
//! a bad request fails with a single descriptive error.

use crate::io::configuration::{
    DEFAULT_BACKGROUND, MAX_DIMENSION, MAX_IMAGE_SIZE, MIN_DIMENSION, MIN_IMAGE_SIZE,
};
use crate::io::error::{CoverArtError, Result, invalid_parameter};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Background painted behind the placed images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Background {
    /// No background
    Transparent,
    /// Solid white
    White,
    /// Solid black
    Black,
    /// Arbitrary `#rrggbb` colour
    Rgb(u8, u8, u8),
}

impl Background {
    /// Parse an HTML colour code of the form `#rrggbb`
    pub fn parse_color_code(code: &str) -> Option<(u8, u8, u8)> {
        let hex = code.strip_prefix('#')?;
        if hex.len() != 6 || !hex.is_ascii() {
            return None;
        }

        let channel = |range: std::ops::Range<usize>| {
            hex.get(range)
                .and_then(|digits| u8::from_str_radix(digits, 16).ok())
        };

        Some((channel(0..2)?, channel(2..4)?, channel(4..6)?))
    }
}

impl FromStr for Background {
    type Err = CoverArtError;

    fn from_str(value: &str) -> Result<Self> {
        match value {
            "transparent" => Ok(Self::Transparent),
            "white" => Ok(Self::White),
            "black" => Ok(Self::Black),
            code => Self::parse_color_code(code)
                .map(|(r, g, b)| Self::Rgb(r, g, b))
                .ok_or_else(|| {
                    invalid_parameter(
                        "background",
                        &code,
                        &"must be one of transparent, white, black or a color code #rrggbb",
                    )
                }),
        }
    }
}

impl fmt::Display for Background {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Transparent => write!(f, "transparent"),
            Self::White => write!(f, "white"),
            Self::Black => write!(f, "black"),
            Self::Rgb(r, g, b) => write!(f, "#{r:02X}{g:02X}{b:02X}"),
        }
    }
}

/// Options for one cover art grid
///
/// Built with [`GridConfig::new`] and the `with_*` setters, then handed to
/// [`crate::art::generator::CoverArtGenerator::new`], which validates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridConfig {
    /// Tiles per side of the grid
    pub dimension: u32,
    /// Width and height of the composite in pixels
    pub image_size: u32,
    /// Background as supplied by the caller
    pub background: String,
    /// Discard candidates without artwork instead of giving them a tile
    pub skip_missing: bool,
    /// Show the placeholder image for tiles without artwork
    pub show_placeholder_for_missing: bool,
}

impl GridConfig {
    /// Create options with the default background and missing-artwork policy
    pub fn new(dimension: u32, image_size: u32) -> Self {
        Self {
            dimension,
            image_size,
            background: DEFAULT_BACKGROUND.to_string(),
            skip_missing: true,
            show_placeholder_for_missing: true,
        }
    }

    /// Set the background
    #[must_use]
    pub fn with_background(mut self, background: impl Into<String>) -> Self {
        self.background = background.into();
        self
    }

    /// Set whether candidates without artwork are discarded
    #[must_use]
    pub const fn with_skip_missing(mut self, skip_missing: bool) -> Self {
        self.skip_missing = skip_missing;
        self
    }

    /// Set whether tiles without artwork show the placeholder image
    #[must_use]
    pub const fn with_placeholder_for_missing(mut self, show: bool) -> Self {
        self.show_placeholder_for_missing = show;
        self
    }

    /// Validate every option, returning the parsed background
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` for the first option out of range, checking
    /// dimension, then background, then image size
    pub fn validate(&self) -> Result<Background> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.dimension) {
            return Err(invalid_parameter(
                "dimension",
                &self.dimension,
                &format!("must be between {MIN_DIMENSION} and {MAX_DIMENSION}, inclusive"),
            ));
        }

        let background = self.background.parse::<Background>()?;

        if !(MIN_IMAGE_SIZE..=MAX_IMAGE_SIZE).contains(&self.image_size) {
            return Err(invalid_parameter(
                "image_size",
                &self.image_size,
                &format!("must be between {MIN_IMAGE_SIZE} and {MAX_IMAGE_SIZE}, inclusive"),
            ));
        }

        Ok(background)
    }
}
