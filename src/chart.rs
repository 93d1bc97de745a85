//! Text bar chart of a profile and the water resting on it.
//!
//! Each column of the chart is one profile index and each line one height
//! level, tallest first. Rendering is on demand; nothing is cached.

use crate::{Axis, ElevationProfile, Result, WaterCounts, WaterError};

const STRUCTURE: char = '#';
const WATER: char = '~';
const AIR: char = '.';

#[derive(Debug)]
pub struct Chart<'a> {
    profile: &'a ElevationProfile,
    counts: &'a WaterCounts,
}

impl<'a> Chart<'a> {
    /// Pairs a profile with its per-position counts.
    ///
    /// # Errors
    ///
    /// [`WaterError::StrategyMismatch`] unless `counts` came from the primary
    /// axis, since only those line up with profile indexes.
    pub fn new(profile: &'a ElevationProfile, counts: &'a WaterCounts) -> Result<Self> {
        if counts.axis() != Axis::Primary {
            return Err(WaterError::StrategyMismatch {
                expected: Axis::Primary,
                found: counts.axis(),
            });
        }
        Ok(Chart { profile, counts })
    }

    pub fn title(&self) -> String {
        format!("Trapped Rain Water: {} Units of Water", self.counts.total())
    }

    /// Glyph at `index` on the row for `level` (1-based from the ground).
    pub fn cell_to_char(&self, index: usize, level: u64) -> char {
        let height = self.profile.get_height(index).map_or(0, u64::from);
        let water = self.counts.units().get(index).copied().unwrap_or(0);

        if level <= height {
            STRUCTURE
        } else if level <= height + water {
            WATER
        } else {
            AIR
        }
    }

    /// One line per level, top row first.
    pub fn rows(&self) -> Vec<String> {
        let top = self.top_level();
        (1..=top)
            .rev()
            .map(|level| {
                (0..self.profile.len())
                    .map(|index| self.cell_to_char(index, level))
                    .collect::<String>()
            })
            .collect()
    }

    fn top_level(&self) -> u64 {
        (0..self.profile.len())
            .map(|index| {
                let height = self.profile.get_height(index).map_or(0, u64::from);
                height + self.counts.units().get(index).copied().unwrap_or(0)
            })
            .max()
            .unwrap_or(0)
    }

    pub fn render(&self) -> String {
        let mut out = self.title();
        out.push('\n');
        for row in self.rows() {
            out.push_str(&row);
            out.push('\n');
        }
        out.push_str(&format!("{STRUCTURE} structure  {WATER} water"));
        out
    }
}

impl std::fmt::Display for Chart<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
