//! Assignment of cover candidates to layout cells
//!
//! Candidates are consumed front to back. Each cell takes the first candidate
//! that yields a usable outcome; candidates skipped for missing artwork are
//! dropped for good and never occupy a cell.

use crate::art::resolver::{Artwork, CoverResolver, Resolution};
use crate::io::error::Result;
use crate::spatial::geometry::{BoundingBox, GridGeometry};
use serde::Serialize;
use std::collections::VecDeque;
use tracing::debug;

/// A content item competing for a cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverCandidate {
    /// Identifier of the entity the cover belongs to (a release MBID)
    pub entity_mbid: String,
    /// Display title
    pub title: String,
    /// Display artist credit
    pub artist: String,
    /// Archive artwork, when the release has any
    pub artwork: Option<Artwork>,
}

/// One image positioned on the composite
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlacedImage {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Width in pixels
    pub width: u32,
    /// Height in pixels
    pub height: u32,
    /// Image to draw
    pub url: String,
    /// Entity shown in the cell; `None` for placeholder-only cells
    pub entity_mbid: Option<String>,
    /// Title of the entity shown in the cell
    pub title: Option<String>,
    /// Artist credit of the entity shown in the cell
    pub artist: Option<String>,
}

impl PlacedImage {
    fn new(bounds: &BoundingBox, url: String, candidate: Option<CoverCandidate>) -> Self {
        let (entity_mbid, title, artist) = candidate.map_or((None, None, None), |c| {
            (Some(c.entity_mbid), Some(c.title), Some(c.artist))
        });

        Self {
            x: bounds.min[0],
            y: bounds.min[1],
            width: bounds.width(),
            height: bounds.height(),
            url,
            entity_mbid,
            title,
            artist,
        }
    }
}

/// Per-cell consumption state
enum CellState {
    TryNext,
    Exhausted,
    Resolved(Resolution, Option<CoverCandidate>),
}

/// Places candidates into the cells of a layout
#[derive(Debug, Clone, Copy)]
pub struct PlacementAssembler {
    geometry: GridGeometry,
    resolver: CoverResolver,
}

impl PlacementAssembler {
    /// Create an assembler for one grid and missing-artwork policy
    pub const fn new(geometry: GridGeometry, resolver: CoverResolver) -> Self {
        Self { geometry, resolver }
    }

    /// Fill `addresses` in order with `candidates`
    ///
    /// Cells that resolve to nothing are left out of the result, so the output
    /// may be shorter than `addresses`. Placeholder cells carry no entity.
    ///
    /// # Errors
    ///
    /// Returns `InvalidAddress` if any address is malformed or out of range;
    /// no candidate is consumed in that case
    pub fn assemble<S: AsRef<str>>(
        &self,
        candidates: Vec<CoverCandidate>,
        addresses: &[S],
        cover_art_size: u32,
    ) -> Result<Vec<PlacedImage>> {
        let cells = addresses
            .iter()
            .map(|address| self.geometry.bounding_box(address.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        let mut queue = VecDeque::from(candidates);
        let mut images = Vec::with_capacity(cells.len());

        for bounds in &cells {
            let (resolution, candidate) = self.fill_cell(&mut queue, cover_art_size);

            match resolution {
                Resolution::Url(url) => images.push(PlacedImage::new(bounds, url, candidate)),
                Resolution::Skip | Resolution::Empty => {
                    debug!(?bounds, "cell left empty");
                }
            }
        }

        Ok(images)
    }

    /// Pop candidates until one settles the cell
    ///
    /// Every iteration either consumes a candidate or finishes, so the loop is
    /// bounded by the queue length.
    fn fill_cell(
        &self,
        queue: &mut VecDeque<CoverCandidate>,
        cover_art_size: u32,
    ) -> (Resolution, Option<CoverCandidate>) {
        let mut state = CellState::TryNext;

        loop {
            state = match state {
                CellState::TryNext => match queue.pop_front() {
                    None => CellState::Exhausted,
                    Some(candidate) => {
                        match self
                            .resolver
                            .resolve(candidate.artwork.as_ref(), cover_art_size)
                        {
                            Resolution::Skip => {
                                debug!(
                                    entity_mbid = %candidate.entity_mbid,
                                    "skipping cover without artwork"
                                );
                                CellState::TryNext
                            }
                            resolution => CellState::Resolved(resolution, Some(candidate)),
                        }
                    }
                },
                CellState::Exhausted => {
                    CellState::Resolved(self.resolver.missing_outcome(), None)
                }
                CellState::Resolved(resolution, candidate) => return (resolution, candidate),
            };
        }
    }
}
