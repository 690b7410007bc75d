//! Listening statistics input
//!
//! This module contains:
//! - The accepted statistics entities and time ranges
//! - Interfaces to the user, statistics and artwork stores
//! - Covers assembled from a user's statistics

/// Statistics covers and their caption metadata
pub mod covers;
/// Entities and time ranges
pub mod range;
/// External store interfaces and record types
pub mod store;

pub use covers::StatsCovers;
pub use range::{StatsEntity, StatsRange};
