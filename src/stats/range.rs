//! Statistics entities and time ranges accepted from callers

use crate::io::error::{CoverArtError, Result, validation_error};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Kind of entity a statistic ranks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsEntity {
    /// Top artists
    Artists,
    /// Top releases
    Releases,
    /// Top recordings
    Recordings,
}

impl StatsEntity {
    /// Every entity, in the order they are listed to users
    pub const ALL: [Self; 3] = [Self::Artists, Self::Releases, Self::Recordings];

    /// Name used by the statistics store
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Artists => "artists",
            Self::Releases => "releases",
            Self::Recordings => "recordings",
        }
    }
}

impl FromStr for StatsEntity {
    type Err = CoverArtError;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|entity| entity.as_str() == value)
            .ok_or_else(|| {
                validation_error(
                    "stats entity",
                    &value,
                    &"must be one of artists, releases or recordings",
                )
            })
    }
}

impl fmt::Display for StatsEntity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time window a statistic covers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatsRange {
    /// The previous calendar week
    Week,
    /// The previous calendar month
    Month,
    /// The previous quarter
    Quarter,
    /// The previous half year
    HalfYearly,
    /// The previous calendar year
    Year,
    /// Every listen ever submitted
    AllTime,
    /// The current week so far
    ThisWeek,
    /// The current month so far
    ThisMonth,
    /// The current year so far
    ThisYear,
}

impl StatsRange {
    /// Every range the statistics store calculates
    pub const ALL: [Self; 9] = [
        Self::Week,
        Self::Month,
        Self::Quarter,
        Self::HalfYearly,
        Self::Year,
        Self::AllTime,
        Self::ThisWeek,
        Self::ThisMonth,
        Self::ThisYear,
    ];

    /// Name used by the statistics store
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Week => "week",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::HalfYearly => "half_yearly",
            Self::Year => "year",
            Self::AllTime => "all_time",
            Self::ThisWeek => "this_week",
            Self::ThisMonth => "this_month",
            Self::ThisYear => "this_year",
        }
    }

    /// English phrase for cover captions, e.g. "last 6 months"
    pub const fn label(self) -> &'static str {
        match self {
            Self::Week => "last week",
            Self::Month => "last month",
            Self::Quarter => "last quarter",
            Self::HalfYearly => "last 6 months",
            Self::Year => "last year",
            Self::AllTime => "of all time",
            Self::ThisWeek => "this week",
            Self::ThisMonth => "this month",
            Self::ThisYear => "this year",
        }
    }
}

impl FromStr for StatsRange {
    type Err = CoverArtError;

    fn from_str(value: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|range| range.as_str() == value)
            .ok_or_else(|| validation_error("time range", &value, &"invalid date range given"))
    }
}

impl fmt::Display for StatsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
