//! Validated cover art generator and its image-loading entry points

use crate::art::placement::{CoverCandidate, PlacedImage, PlacementAssembler};
use crate::art::resolver::{Artwork, CoverResolver};
use crate::io::error::{Result, StoreContext};
use crate::io::options::{Background, GridConfig};
use crate::spatial::geometry::GridGeometry;
use crate::spatial::layouts::{LayoutCatalog, LayoutSelection};
use crate::stats::store::ArtworkLookup;
use std::collections::BTreeSet;
use tracing::{debug, instrument, warn};

/// Turns cover candidates into placed images for one grid configuration
///
/// The configuration is validated once at construction and never changes,
/// so one generator can serve any number of requests.
#[derive(Debug, Clone)]
pub struct CoverArtGenerator {
    config: GridConfig,
    background: Background,
    geometry: GridGeometry,
    assembler: PlacementAssembler,
}

impl CoverArtGenerator {
    /// Validate `config` and derive the tile size
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the dimension, background or image size
    /// is out of range
    pub fn new(config: GridConfig) -> Result<Self> {
        let background = config.validate()?;
        let geometry = GridGeometry::new(config.dimension, config.image_size);
        let resolver = CoverResolver::new(config.skip_missing, config.show_placeholder_for_missing);

        Ok(Self {
            config,
            background,
            geometry,
            assembler: PlacementAssembler::new(geometry, resolver),
        })
    }

    /// The options this generator was built from
    pub const fn config(&self) -> &GridConfig {
        &self.config
    }

    /// Parsed background
    pub const fn background(&self) -> Background {
        self.background
    }

    /// Grid geometry
    pub const fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// Look up artwork for `release_mbids` and place it
    ///
    /// Empty identifiers are ignored. Identifiers the artwork store does not
    /// know are dropped; the rest keep their input order.
    ///
    /// # Errors
    ///
    /// Returns `Store` if the lookup fails, otherwise as [`Self::generate_from_caa_ids`]
    #[instrument(skip_all, fields(count = release_mbids.len()))]
    pub fn load_images<S: AsRef<str>>(
        &self,
        lookup: &dyn ArtworkLookup,
        release_mbids: &[S],
        selection: &LayoutSelection,
        cover_art_size: u32,
    ) -> Result<Vec<PlacedImage>> {
        let mbids: Vec<&str> = release_mbids
            .iter()
            .map(AsRef::as_ref)
            .filter(|mbid| !mbid.is_empty())
            .collect();
        let requested: BTreeSet<String> = mbids.iter().map(|mbid| (*mbid).to_string()).collect();

        let results = lookup
            .lookup_artwork(&requested)
            .store_context("lookup_artwork")?;
        debug!(requested = requested.len(), found = results.len(), "artwork lookup");

        let mut covers = Vec::with_capacity(mbids.len());
        for mbid in mbids {
            let Some(info) = results.get(mbid).cloned() else {
                warn!(release_mbid = mbid, "release missing from artwork lookup");
                continue;
            };
            covers.push(CoverCandidate {
                entity_mbid: mbid.to_string(),
                title: info.title,
                artist: info.artist,
                artwork: Artwork::from_parts(info.caa_id, info.caa_release_mbid),
            });
        }

        self.generate_from_caa_ids(covers, selection, cover_art_size)
    }

    /// Place already-resolved covers, skipping the artwork lookup
    ///
    /// # Errors
    ///
    /// Returns `UnknownLayout` for a layout index absent from the catalog and
    /// `InvalidAddress` for malformed caller-supplied addresses
    pub fn generate_from_caa_ids(
        &self,
        covers: Vec<CoverCandidate>,
        selection: &LayoutSelection,
        cover_art_size: u32,
    ) -> Result<Vec<PlacedImage>> {
        let addresses = LayoutCatalog::addresses(self.geometry.dimension(), selection)?;
        self.assembler.assemble(covers, &addresses, cover_art_size)
    }
}
