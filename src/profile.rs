use crate::{Result, WaterError};

/// A validated skyline: non-negative heights in left-to-right order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElevationProfile {
    heights: Vec<u32>,
}

impl ElevationProfile {
    /// Validates raw heights, rejecting the first negative or oversized value.
    ///
    /// # Errors
    ///
    /// [`WaterError::NegativeHeight`] for a value below zero and
    /// [`WaterError::HeightOutOfRange`] for one above `u32::MAX`.
    pub fn new(heights: Vec<i64>) -> Result<Self> {
        let heights = heights
            .into_iter()
            .enumerate()
            .map(|(index, value)| {
                if value < 0 {
                    return Err(WaterError::NegativeHeight { index, value });
                }
                u32::try_from(value).map_err(|_| WaterError::HeightOutOfRange { index, value })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(ElevationProfile { heights })
    }

    pub fn heights(&self) -> &[u32] {
        &self.heights
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn get_height(&self, index: usize) -> Option<u32> {
        self.heights.get(index).copied()
    }

    /// Tallest column, or 0 for an empty profile.
    pub fn max_height(&self) -> u32 {
        self.heights.iter().copied().max().unwrap_or(0)
    }

    /// For each index, the tallest height strictly to its right (0 past the end).
    pub fn right_maxima(&self) -> Vec<u32> {
        let mut maxima = vec![0; self.heights.len()];
        let mut running = 0;
        for (index, &height) in self.heights.iter().enumerate().rev() {
            maxima[index] = running;
            running = running.max(height);
        }
        maxima
    }

    /// Indexes of the columns that reach above `level`, in ascending order.
    pub fn filled_columns(&self, level: u32) -> impl Iterator<Item = usize> + '_ {
        self.heights
            .iter()
            .enumerate()
            .filter(move |&(_, &height)| height > level)
            .map(|(index, _)| index)
    }
}

impl From<Vec<u32>> for ElevationProfile {
    fn from(heights: Vec<u32>) -> Self {
        ElevationProfile { heights }
    }
}
