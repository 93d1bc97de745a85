use std::str::FromStr;

use crate::WaterError;

/// Which counting strategy to run over a profile.
///
/// On the command line `1` selects [`Axis::Primary`] and `0` selects
/// [`Axis::Secondary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Axis {
    /// Left-to-right skyline scan, one count per profile index.
    #[default]
    Primary,
    /// Row scan over unit columns, one count per height level.
    Secondary,
}

impl FromStr for Axis {
    type Err = WaterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(Axis::Primary),
            "0" => Ok(Axis::Secondary),
            other => Err(WaterError::InvalidAxis(other.to_string())),
        }
    }
}

impl std::fmt::Display for Axis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Axis::Primary => write!(f, "primary"),
            Axis::Secondary => write!(f, "secondary"),
        }
    }
}
