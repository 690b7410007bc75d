//! Cover art URL resolution and the missing-artwork policy
//!
//! Resolution is purely syntactic: URLs point into the content-addressed
//! cover art archive and are never fetched or checked for existence.

use crate::io::configuration::{CAA_ARCHIVE_BASE, CAA_MISSING_IMAGE, SUPPORTED_COVER_ART_SIZES};
use tracing::warn;

/// Archive reference for one piece of cover art
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artwork {
    /// Cover art archive image id
    pub caa_id: u64,
    /// Release the image is filed under in the archive
    pub caa_release_mbid: String,
}

impl Artwork {
    /// Pair an image id with its release, when both are known
    pub fn from_parts(caa_id: Option<u64>, caa_release_mbid: Option<String>) -> Option<Self> {
        Some(Self {
            caa_id: caa_id?,
            caa_release_mbid: caa_release_mbid?,
        })
    }
}

/// Outcome of resolving one candidate for a tile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Image to place in the tile
    Url(String),
    /// Candidate has no artwork; try the next one without consuming the tile
    Skip,
    /// Nothing to show; the tile stays empty
    Empty,
}

/// Missing-artwork policy plus URL formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoverResolver {
    skip_missing: bool,
    show_placeholder_for_missing: bool,
}

impl CoverResolver {
    /// Create a resolver with the given missing-artwork policy
    pub const fn new(skip_missing: bool, show_placeholder_for_missing: bool) -> Self {
        Self {
            skip_missing,
            show_placeholder_for_missing,
        }
    }

    /// Whether candidates without artwork are discarded
    pub const fn skip_missing(&self) -> bool {
        self.skip_missing
    }

    /// Whether empty tiles show the placeholder image
    pub const fn show_placeholder_for_missing(&self) -> bool {
        self.show_placeholder_for_missing
    }

    /// Build the archive thumbnail URL for `artwork`
    ///
    /// Only the archive's thumbnail sizes (250 and 500) exist; any other size
    /// yields `None`.
    pub fn resolve_url(artwork: &Artwork, size: u32) -> Option<String> {
        if !SUPPORTED_COVER_ART_SIZES.contains(&size) {
            warn!(size, "unsupported cover art size");
            return None;
        }

        let mbid = &artwork.caa_release_mbid;
        Some(format!(
            "{CAA_ARCHIVE_BASE}/mbid-{mbid}/mbid-{mbid}-{}_thumb{size}.jpg",
            artwork.caa_id
        ))
    }

    /// Placeholder shown for a tile that gets no artwork, if enabled
    pub const fn missing_url(&self) -> Option<&'static str> {
        if self.show_placeholder_for_missing {
            Some(CAA_MISSING_IMAGE)
        } else {
            None
        }
    }

    /// Apply the policy to one candidate's artwork
    pub fn resolve(&self, artwork: Option<&Artwork>, size: u32) -> Resolution {
        match artwork {
            Some(artwork) => {
                Self::resolve_url(artwork, size).map_or(Resolution::Empty, Resolution::Url)
            }
            None if self.skip_missing => Resolution::Skip,
            None => self.missing_outcome(),
        }
    }

    /// Outcome for a tile that has no candidate left
    pub fn missing_outcome(&self) -> Resolution {
        self.missing_url()
            .map_or(Resolution::Empty, |url| Resolution::Url(url.to_string()))
    }
}
