//! Covers built from a user's listening statistics
//!
//! Statistics are fetched once per request, capped at [`NUMBER_OF_STATS`]
//! records, and either placed on a grid or returned with caption metadata.

use crate::art::generator::CoverArtGenerator;
use crate::art::placement::PlacedImage;
use crate::io::configuration::{DEFAULT_COVER_ART_SIZE, NUMBER_OF_STATS};
use crate::io::error::{CoverArtError, Result, StoreContext};
use crate::spatial::layouts::LayoutSelection;
use crate::stats::range::{StatsEntity, StatsRange};
use crate::stats::store::{
    ArtistRecord, ArtworkLookup, EntityRecord, ReleaseRecord, StatsStore, UserStore,
};
use chrono::{Local, NaiveDate};
use serde::Serialize;
use tracing::{debug, instrument};

/// Caption data shown alongside a statistics cover
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsCoverMetadata {
    /// Name of the user the statistics belong to
    pub user_name: String,
    /// Day the cover was generated, serialized as `YYYY-MM-DD`
    pub date: NaiveDate,
    /// English time range phrase, e.g. "last month"
    pub time_range: &'static str,
    /// Entity the statistics rank
    pub entity: StatsEntity,
    /// Total number of distinct entities, not just those fetched
    pub count: u64,
}

impl StatsCoverMetadata {
    /// Metadata dated today in local time
    pub fn new(user_name: &str, range: StatsRange, entity: StatsEntity, count: u64) -> Self {
        Self {
            user_name: user_name.to_string(),
            date: Local::now().date_naive(),
            time_range: range.label(),
            entity,
            count,
        }
    }

    /// Date as an ISO 8601 string
    pub fn iso_date(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}

/// Placed release images with the caption phrase for their range
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridStatsCover {
    /// Images in layout order
    pub images: Vec<PlacedImage>,
    /// English time range phrase
    pub time_range: &'static str,
}

/// Ranked artists with caption metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtistStatsCover {
    /// Artist records in rank order
    pub artists: Vec<ArtistRecord>,
    /// Caption data
    pub metadata: StatsCoverMetadata,
}

/// Placed release images, the ranked releases behind them and caption metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReleaseStatsCover {
    /// Images in default layout order
    pub images: Vec<PlacedImage>,
    /// Release records in rank order
    pub releases: Vec<ReleaseRecord>,
    /// Caption data
    pub metadata: StatsCoverMetadata,
}

/// Builds statistics covers from the user, stats and artwork stores
pub struct StatsCovers<'a> {
    generator: &'a CoverArtGenerator,
    users: &'a dyn UserStore,
    stats: &'a dyn StatsStore,
    artwork: &'a dyn ArtworkLookup,
}

impl<'a> StatsCovers<'a> {
    /// Bind a generator to its stores for one request
    pub const fn new(
        generator: &'a CoverArtGenerator,
        users: &'a dyn UserStore,
        stats: &'a dyn StatsStore,
        artwork: &'a dyn ArtworkLookup,
    ) -> Self {
        Self {
            generator,
            users,
            stats,
            artwork,
        }
    }

    /// Fetch at most [`NUMBER_OF_STATS`] ranked records and the total entity count
    ///
    /// Both `time_range` and `entity` are checked before any store is queried.
    ///
    /// # Errors
    ///
    /// Returns `Validation` for an unknown range or entity, `UserNotFound`,
    /// `StatsNotFound` when nothing has been calculated yet, or `Store` if a
    /// store query fails
    #[instrument(skip(self))]
    pub fn fetch_user_stats(
        &self,
        entity: &str,
        user_name: &str,
        time_range: &str,
    ) -> Result<(Vec<EntityRecord>, u64)> {
        let range = time_range.parse::<StatsRange>()?;
        let entity = entity.parse::<StatsEntity>()?;
        self.fetch(entity, user_name, range)
    }

    fn fetch(
        &self,
        entity: StatsEntity,
        user_name: &str,
        range: StatsRange,
    ) -> Result<(Vec<EntityRecord>, u64)> {
        let user_id = self
            .users
            .user_id_by_name(user_name)
            .store_context("user_id_by_name")?
            .ok_or_else(|| CoverArtError::UserNotFound {
                user_name: user_name.to_string(),
            })?;

        let page = self
            .stats
            .get_stats(user_id, entity, range)
            .store_context("get_stats")?
            .ok_or_else(|| CoverArtError::StatsNotFound {
                user_name: user_name.to_string(),
                entity: entity.as_str(),
                range: range.as_str(),
            })?;

        let mut records = page.records;
        records.truncate(NUMBER_OF_STATS);
        debug!(fetched = records.len(), total = page.count, "user stats");

        Ok((records, page.count))
    }

    /// Place a user's top releases using a catalog layout
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_user_stats`], plus `UnknownLayout` for a layout
    /// absent from the catalog
    pub fn create_grid_stats_cover(
        &self,
        user_name: &str,
        time_range: &str,
        layout: usize,
    ) -> Result<GridStatsCover> {
        let range = time_range.parse::<StatsRange>()?;
        let (records, _) = self.fetch(StatsEntity::Releases, user_name, range)?;

        let images = self.generator.load_images(
            self.artwork,
            &release_mbids(&records),
            &LayoutSelection::Index(layout),
            DEFAULT_COVER_ART_SIZE,
        )?;

        Ok(GridStatsCover {
            images,
            time_range: range.label(),
        })
    }

    /// Rank a user's top artists; no images are placed
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_user_stats`]
    pub fn create_artist_stats_cover(
        &self,
        user_name: &str,
        time_range: &str,
    ) -> Result<ArtistStatsCover> {
        let range = time_range.parse::<StatsRange>()?;
        let (records, count) = self.fetch(StatsEntity::Artists, user_name, range)?;

        let artists = records
            .iter()
            .filter_map(EntityRecord::as_artist)
            .cloned()
            .collect();

        Ok(ArtistStatsCover {
            artists,
            metadata: StatsCoverMetadata::new(user_name, range, StatsEntity::Artists, count),
        })
    }

    /// Place a user's top releases on the default layout, with records and metadata
    ///
    /// # Errors
    ///
    /// As [`Self::fetch_user_stats`]
    pub fn create_release_stats_cover(
        &self,
        user_name: &str,
        time_range: &str,
    ) -> Result<ReleaseStatsCover> {
        let range = time_range.parse::<StatsRange>()?;
        let (records, count) = self.fetch(StatsEntity::Releases, user_name, range)?;

        let images = self.generator.load_images(
            self.artwork,
            &release_mbids(&records),
            &LayoutSelection::Default,
            DEFAULT_COVER_ART_SIZE,
        )?;

        let releases = records
            .iter()
            .filter_map(EntityRecord::as_release)
            .cloned()
            .collect();

        Ok(ReleaseStatsCover {
            images,
            releases,
            metadata: StatsCoverMetadata::new(user_name, range, StatsEntity::Releases, count),
        })
    }
}

/// Release identifiers of `records` in rank order; unmatched records are skipped
fn release_mbids(records: &[EntityRecord]) -> Vec<&str> {
    records
        .iter()
        .filter_map(EntityRecord::release_mbid)
        .collect()
}
