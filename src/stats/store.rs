//! Interfaces to the external stores the cover generator reads from
//!
//! Implementations own their connections; every call is one synchronous
//! round trip and failures are returned, never retried.

use crate::io::error::StoreError;
use crate::stats::range::{StatsEntity, StatsRange};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};

/// Internal identity of a user
pub type UserId = i64;

/// Artwork lookup result for one release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtworkInfo {
    /// Release title
    pub title: String,
    /// Release artist credit
    pub artist: String,
    /// Cover art archive image id, if the release has artwork
    pub caa_id: Option<u64>,
    /// Release under which the archive files the image
    pub caa_release_mbid: Option<String>,
}

/// Maps release identifiers to their archive artwork
pub trait ArtworkLookup {
    /// Look up artwork for a set of release MBIDs
    ///
    /// Returns an entry, possibly without artwork, for every requested
    /// release that exists.
    ///
    /// # Errors
    ///
    /// Returns the store's error if the lookup fails
    fn lookup_artwork(
        &self,
        release_mbids: &BTreeSet<String>,
    ) -> Result<HashMap<String, ArtworkInfo>, StoreError>;
}

/// Resolves user names to internal identities
pub trait UserStore {
    /// Find the user with the given name
    ///
    /// # Errors
    ///
    /// Returns the store's error if the query fails
    fn user_id_by_name(&self, user_name: &str) -> Result<Option<UserId>, StoreError>;
}

/// Precomputed listening statistics
pub trait StatsStore {
    /// Fetch the ranked statistics of a user, or `None` if not calculated yet
    ///
    /// # Errors
    ///
    /// Returns the store's error if the query fails
    fn get_stats(
        &self,
        user_id: UserId,
        entity: StatsEntity,
        range: StatsRange,
    ) -> Result<Option<StatsPage>, StoreError>;
}

/// Ranked statistics as stored, with the full entity count
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatsPage {
    /// Records in rank order
    pub records: Vec<EntityRecord>,
    /// Number of distinct entities, which may exceed `records.len()`
    pub count: u64,
}

/// A user's listens for one artist
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRecord {
    /// Artist MBID, if the artist was matched
    pub artist_mbid: Option<String>,
    /// Artist name as listened
    pub artist_name: String,
    /// Listens in the range
    pub listen_count: u64,
}

/// A user's listens for one release
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReleaseRecord {
    /// Release MBID, if the release was matched
    pub release_mbid: Option<String>,
    /// Release name as listened
    pub release_name: String,
    /// Artist credit as listened
    pub artist_name: String,
    /// MBIDs of the credited artists
    #[serde(default)]
    pub artist_mbids: Vec<String>,
    /// Listens in the range
    pub listen_count: u64,
}

/// A user's listens for one recording
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingRecord {
    /// Recording MBID, if the recording was matched
    pub recording_mbid: Option<String>,
    /// Track name as listened
    pub track_name: String,
    /// Artist credit as listened
    pub artist_name: String,
    /// Release the recording was listened from
    pub release_name: Option<String>,
    /// MBID of that release
    pub release_mbid: Option<String>,
    /// Listens in the range
    pub listen_count: u64,
}

/// One ranked statistics record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "entity", rename_all = "snake_case")]
pub enum EntityRecord {
    /// Artist statistics
    Artist(ArtistRecord),
    /// Release statistics
    Release(ReleaseRecord),
    /// Recording statistics
    Recording(RecordingRecord),
}

impl EntityRecord {
    /// The artist record, if this is one
    pub const fn as_artist(&self) -> Option<&ArtistRecord> {
        match self {
            Self::Artist(record) => Some(record),
            _ => None,
        }
    }

    /// The release record, if this is one
    pub const fn as_release(&self) -> Option<&ReleaseRecord> {
        match self {
            Self::Release(record) => Some(record),
            _ => None,
        }
    }

    /// Release MBID the record points at, for releases and recordings
    pub fn release_mbid(&self) -> Option<&str> {
        match self {
            Self::Release(record) => record.release_mbid.as_deref(),
            Self::Recording(record) => record.release_mbid.as_deref(),
            Self::Artist(_) => None,
        }
    }
}
