//! Trapped Rain Water Calculator
//!
//! Counts how many units of water an elevation profile holds after rain,
//! either position by position with a left-to-right skyline scan or level
//! by level with a row scan over the columns.

pub mod axis;
pub mod chart;
pub mod counter;
pub mod profile;
pub mod water;

pub use axis::Axis;
pub use chart::Chart;
pub use counter::{count_trapped_water, WaterCounter};
pub use profile::ElevationProfile;
pub use water::WaterCounts;

/// Errors that can occur while counting trapped water
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WaterError {
    /// An elevation below ground level
    #[error("elevation map must contain all non-negative integers: {value} at index {index}")]
    NegativeHeight { index: usize, value: i64 },
    /// An elevation too tall to represent. The row scan has a lower ceiling,
    /// see [`counter::MAX_LEVELS`].
    #[error("elevation {value} at index {index} exceeds the maximum of {}", u32::MAX)]
    HeightOutOfRange { index: usize, value: i64 },
    /// Counts produced by one strategy handed to a consumer of another
    #[error("expected counts from the {expected} axis, found {found}")]
    StrategyMismatch { expected: Axis, found: Axis },
    /// A profile too tall to scan row by row
    #[error("maximum height {max_height} exceeds the row scan limit of {limit} levels")]
    TooManyLevels { max_height: u32, limit: u32 },
    /// Axis selector other than 0 or 1
    #[error("invalid axis '{0}': expected 0 (secondary) or 1 (primary)")]
    InvalidAxis(String),
}

/// Result type for trapped water calculations
pub type Result<T> = std::result::Result<T, WaterError>;
