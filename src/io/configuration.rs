//! Grid bounds, thumbnail sizes and other process-wide defaults

/// Smallest supported grid dimension (tiles per side)
pub const MIN_DIMENSION: u32 = 2;
/// Largest supported grid dimension (tiles per side)
pub const MAX_DIMENSION: u32 = 5;

/// Smallest supported output image size in pixels
pub const MIN_IMAGE_SIZE: u32 = 128;
/// Largest supported output image size in pixels
pub const MAX_IMAGE_SIZE: u32 = 1024;

// Ranked records beyond this are never tiled, only counted
/// Maximum number of statistics records fetched per request
pub const NUMBER_OF_STATS: usize = 100;

/// Thumbnail size requested when the caller does not choose one
pub const DEFAULT_COVER_ART_SIZE: u32 = 500;
/// Thumbnail sizes published by the cover art archive
pub const SUPPORTED_COVER_ART_SIZES: [u32; 2] = [250, 500];

/// Background used when none is configured
pub const DEFAULT_BACKGROUND: &str = "#FFFFFF";

/// Image shown in place of releases without cover art
pub const CAA_MISSING_IMAGE: &str = "https://listenbrainz.org/static/img/cover-art-placeholder.jpg";

/// Root of the content-addressed cover art archive
pub const CAA_ARCHIVE_BASE: &str = "https://archive.org/download";
